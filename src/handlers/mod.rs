pub mod contact_messages;
pub mod dashboard;
pub mod designers;
pub mod health;
pub mod orders;
pub mod returns;
pub mod sellers;
pub mod users;

use crate::events::EventSender;
use crate::{
    db::DbPool,
    services::{
        contact_messages::ContactMessageService, dashboard::DashboardService,
        designers::DesignerService, orders::OrderService, returns::ReturnService,
        sellers::SellerService, users::UserService,
    },
};
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub returns: Arc<ReturnService>,
    pub dashboard: Arc<DashboardService>,
    pub users: Arc<UserService>,
    pub sellers: Arc<SellerService>,
    pub designers: Arc<DesignerService>,
    pub orders: Arc<OrderService>,
    pub contact_messages: Arc<ContactMessageService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            returns: Arc::new(ReturnService::new(db_pool.clone(), event_sender.clone())),
            dashboard: Arc::new(DashboardService::new(db_pool.clone())),
            users: Arc::new(UserService::new(db_pool.clone())),
            sellers: Arc::new(SellerService::new(db_pool.clone(), event_sender.clone())),
            designers: Arc::new(DesignerService::new(db_pool.clone(), event_sender)),
            orders: Arc::new(OrderService::new(db_pool.clone())),
            contact_messages: Arc::new(ContactMessageService::new(db_pool)),
        }
    }
}
