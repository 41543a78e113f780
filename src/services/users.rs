use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{
    entities::{
        order,
        return_request::{ApprovalStatus, RefundStatus},
        user,
    },
    errors::ServiceError,
    repositories::ReturnRepository,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[schema(value_type = String)]
    pub credit: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<user::Model> for UserSummary {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            credit: model.credit,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserOrder {
    pub id: i32,
    #[schema(value_type = String)]
    pub grand_total: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserReturn {
    pub id: i32,
    pub product_name: String,
    pub reason: String,
    pub seller_approval_status: ApprovalStatus,
    pub admin_approval_status: ApprovalStatus,
    pub refund_status: RefundStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: UserSummary,
    pub orders: Vec<UserOrder>,
    pub return_requests: Vec<UserReturn>,
}

#[derive(Clone)]
pub struct UserService {
    db: Arc<DatabaseConnection>,
}

impl UserService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// All users, newest first.
    pub async fn list(&self) -> Result<Vec<UserSummary>, ServiceError> {
        let users = user::Entity::find()
            .order_by_desc(user::Column::CreatedAt)
            .all(&*self.db)
            .await?;
        Ok(users.into_iter().map(UserSummary::from).collect())
    }

    pub async fn detail(&self, id: i32) -> Result<UserDetail, ServiceError> {
        let db = &*self.db;
        let user = user::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;

        let orders = user
            .find_related(order::Entity)
            .order_by_desc(order::Column::CreatedAt)
            .all(db)
            .await?
            .into_iter()
            .map(|o| UserOrder {
                id: o.id,
                grand_total: o.grand_total,
                created_at: o.created_at,
            })
            .collect();

        let return_requests = ReturnRepository::new(self.db.clone())
            .find_by_user(user.id)
            .await?
            .into_iter()
            .map(|r| UserReturn {
                id: r.id,
                product_name: r.product_name,
                reason: r.reason,
                seller_approval_status: r.seller_approval_status,
                admin_approval_status: r.admin_approval_status,
                refund_status: r.refund_status,
                created_at: r.created_at,
            })
            .collect();

        Ok(UserDetail {
            user: user.into(),
            orders,
            return_requests,
        })
    }
}
