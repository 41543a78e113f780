use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sellers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::seller_business::Entity")]
    Business,
    #[sea_orm(has_one = "super::seller_bank_details::Entity")]
    Bank,
    #[sea_orm(has_one = "super::seller_delivery_details::Entity")]
    Delivery,
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::seller_business::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Business.def()
    }
}

impl Related<super::seller_bank_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bank.def()
    }
}

impl Related<super::seller_delivery_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Delivery.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Display status shown in the seller tables.
    pub fn verification_label(&self) -> &'static str {
        if self.is_verified {
            "VERIFIED"
        } else {
            "PENDING"
        }
    }
}
