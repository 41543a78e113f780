use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Delivery terms a seller offers. At most one row per seller.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "seller_delivery_details")]
#[serde(rename_all = "camelCase")]
#[schema(as = SellerDeliveryDetails)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub seller_id: i32,
    /// Days.
    pub delivery_time_min: Option<i32>,
    pub delivery_time_max: Option<i32>,
    #[schema(value_type = Option<String>, example = "250.00")]
    pub shipping_charge: Option<Decimal>,
    /// "yes", "no" or "on request" as entered by the seller.
    pub installation_available: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seller::Entity",
        from = "Column::SellerId",
        to = "super::seller::Column::Id",
        on_delete = "Cascade"
    )]
    Seller,
}

impl Related<super::seller::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seller.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
