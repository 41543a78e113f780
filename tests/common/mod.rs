#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use tower::ServiceExt;

use casa_admin::{
    build_router,
    config::AppConfig,
    db,
    entities::{
        contact_message, designer, designer_hire_request, designer_rating, designer_work, order,
        order_item,
        return_request::{self, ApprovalStatus, RefundStatus},
        seller, seller_bank_details, seller_business, seller_delivery_details, user,
    },
    events::{self, Event},
    AppState,
};

/// Helper harness for spinning up the application against an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    events: tokio::sync::Mutex<tokio::sync::mpsc::Receiver<Event>>,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        // One connection so every query sees the same in-memory database.
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let (event_sender, event_rx) = events::channel(64);
        let state = AppState::new(Arc::new(pool), cfg, event_sender);
        let router = build_router(state.clone());

        Self {
            router,
            state,
            events: tokio::sync::Mutex::new(event_rx),
        }
    }

    pub fn db(&self) -> &db::DbPool {
        &self.state.db
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Events published so far, without waiting for more.
    pub async fn drain_events(&self) -> Vec<Event> {
        let mut rx = self.events.lock().await;
        let mut out = Vec::new();
        while let Ok(event) = rx.try_recv() {
            out.push(event);
        }
        out
    }

    pub async fn seed_user(&self, name: &str, phone: Option<&str>) -> user::Model {
        user::ActiveModel {
            name: Set(name.to_string()),
            email: Set(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
            phone: Set(phone.map(str::to_string)),
            credit: Set(Decimal::ZERO),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed user")
    }

    pub async fn seed_seller(&self, name: &str, is_verified: bool) -> seller::Model {
        seller::ActiveModel {
            name: Set(name.to_string()),
            email: Set(format!("{}@shop.example.com", name.to_lowercase().replace(' ', "."))),
            phone: Set(Some("9000000000".to_string())),
            is_verified: Set(is_verified),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed seller")
    }

    pub async fn seed_seller_business(&self, seller_id: i32, business_name: &str) {
        seller_business::ActiveModel {
            seller_id: Set(seller_id),
            business_name: Set(business_name.to_string()),
            city: Set(Some("Pune".to_string())),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed seller business");
    }

    pub async fn seed_bank_details(&self, seller_id: i32, upi_id: &str) {
        seller_bank_details::ActiveModel {
            seller_id: Set(seller_id),
            upi_id: Set(Some(upi_id.to_string())),
            account_number: Set(None),
            ifsc: Set(None),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed bank details");
    }

    pub async fn seed_designer(
        &self,
        fullname: &str,
        availability: Option<&str>,
        is_verified: bool,
    ) -> designer::Model {
        designer::ActiveModel {
            fullname: Set(fullname.to_string()),
            email: Set(format!("{}@design.example.com", fullname.to_lowercase().replace(' ', "."))),
            mobile: Set(None),
            location: Set(Some("Mumbai".to_string())),
            experience: Set(Some("5 years".to_string())),
            availability: Set(availability.map(str::to_string)),
            is_verified: Set(is_verified),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed designer")
    }

    pub async fn seed_designer_work(
        &self,
        designer_id: i32,
        image: &str,
        created_at: DateTime<Utc>,
    ) -> designer_work::Model {
        designer_work::ActiveModel {
            designer_id: Set(designer_id),
            image: Set(image.to_string()),
            description: Set(Some(format!("Portfolio piece {}", image))),
            created_at: Set(created_at),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed designer work")
    }

    pub async fn seed_hire_request(
        &self,
        designer_id: i32,
        client: &str,
        status: &str,
        created_at: DateTime<Utc>,
    ) -> designer_hire_request::Model {
        designer_hire_request::ActiveModel {
            designer_id: Set(designer_id),
            full_name: Set(client.to_string()),
            work_type: Set("Interior".to_string()),
            budget: Set(Some(Decimal::new(4_500_000, 2))),
            status: Set(status.to_string()),
            created_at: Set(created_at),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed hire request")
    }

    pub async fn seed_rating(&self, hire_request_id: i32, stars: i32) {
        designer_rating::ActiveModel {
            hire_request_id: Set(hire_request_id),
            stars: Set(stars),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed rating");
    }

    pub async fn seed_delivery_details(&self, seller_id: i32, min_days: i32, max_days: i32) {
        seller_delivery_details::ActiveModel {
            seller_id: Set(seller_id),
            delivery_time_min: Set(Some(min_days)),
            delivery_time_max: Set(Some(max_days)),
            shipping_charge: Set(Some(Decimal::new(25_000, 2))),
            installation_available: Set(Some("yes".to_string())),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed delivery details");
    }

    pub async fn seed_order(
        &self,
        user_id: i32,
        grand_total: Decimal,
        created_at: DateTime<Utc>,
    ) -> order::Model {
        order::ActiveModel {
            user_id: Set(user_id),
            grand_total: Set(grand_total),
            created_at: Set(created_at),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed order")
    }

    pub async fn seed_order_item(
        &self,
        order_id: i32,
        seller_id: i32,
        product_name: &str,
        status: &str,
    ) -> order_item::Model {
        order_item::ActiveModel {
            order_id: Set(order_id),
            seller_id: Set(seller_id),
            product_name: Set(product_name.to_string()),
            quantity: Set(1),
            price: Set(Decimal::new(149_900, 2)),
            status: Set(status.to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed order item")
    }

    pub async fn seed_return(
        &self,
        user_id: i32,
        order_item_id: i32,
        seller: ApprovalStatus,
        admin: ApprovalStatus,
        refund: RefundStatus,
    ) -> return_request::Model {
        return_request::ActiveModel {
            product_name: Set("Teak Armchair".to_string()),
            user_id: Set(user_id),
            order_item_id: Set(order_item_id),
            reason: Set("Damaged on arrival".to_string()),
            seller_approval_status: Set(seller),
            admin_approval_status: Set(admin),
            admin_approved_at: Set(None),
            refund_method: Set(Some("UPI".to_string())),
            refund_amount: Set(Some(Decimal::new(149_900, 2))),
            refund_status: Set(refund),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed return request")
    }

    /// Seeds a buyer, a seller and one fulfilled order item, then a return against it.
    pub async fn seed_return_scenario(
        &self,
        seller_status: ApprovalStatus,
        admin_status: ApprovalStatus,
        refund_status: RefundStatus,
    ) -> return_request::Model {
        let buyer = self.seed_user("Asha Rao", Some("9876543210")).await;
        let seller = self.seed_seller("Woodcraft", true).await;
        let order = self.seed_order(buyer.id, Decimal::new(149_900, 2), Utc::now()).await;
        let item = self
            .seed_order_item(order.id, seller.id, "Teak Armchair", "fulfilled")
            .await;
        self.seed_return(buyer.id, item.id, seller_status, admin_status, refund_status)
            .await
    }

    pub async fn seed_contact_message(&self, name: &str, email: &str, message: &str) {
        contact_message::ActiveModel {
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            message: Set(message.to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("seed contact message");
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}
