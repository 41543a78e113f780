use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Consent state of one approval authority (seller or admin).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "PENDING",
            ApprovalStatus::Approved => "APPROVED",
            ApprovalStatus::Rejected => "REJECTED",
        }
    }
}

/// Refund progress. `Completed` is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

impl RefundStatus {
    pub fn is_final(&self) -> bool {
        matches!(self, RefundStatus::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RefundStatus::Pending => "PENDING",
            RefundStatus::Completed => "COMPLETED",
        }
    }
}

/// The `return_requests` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "return_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_name: String,
    pub user_id: i32,
    /// Resolves transitively to the seller through `order_items.seller_id`.
    pub order_item_id: i32,
    pub reason: String,
    pub seller_approval_status: ApprovalStatus,
    pub admin_approval_status: ApprovalStatus,
    /// Stamped whenever the admin decision is recorded.
    pub admin_approved_at: Option<DateTime<Utc>>,
    pub refund_method: Option<String>,
    pub refund_amount: Option<Decimal>,
    pub refund_status: RefundStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::order_item::Entity",
        from = "Column::OrderItemId",
        to = "super::order_item::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    OrderItem,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveEnum;

    #[test]
    fn approval_status_uses_upper_case_storage_values() {
        assert_eq!(ApprovalStatus::Pending.to_value(), "PENDING");
        assert_eq!(ApprovalStatus::Approved.to_value(), "APPROVED");
        assert_eq!(ApprovalStatus::Rejected.to_value(), "REJECTED");
        assert_eq!(
            ApprovalStatus::try_from_value(&"APPROVED".to_string()).unwrap(),
            ApprovalStatus::Approved
        );
    }

    #[test]
    fn refund_status_completed_is_final() {
        assert!(RefundStatus::Completed.is_final());
        assert!(!RefundStatus::Pending.is_final());
        assert_eq!(RefundStatus::Completed.to_value(), RefundStatus::Completed.as_str());
    }

    #[test]
    fn statuses_serialize_as_screaming_case() {
        assert_eq!(
            serde_json::to_string(&ApprovalStatus::Rejected).unwrap(),
            "\"REJECTED\""
        );
        assert_eq!(
            serde_json::to_string(&RefundStatus::Completed).unwrap(),
            "\"COMPLETED\""
        );
    }
}
