use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{
    entities::{order, order_item, seller, user},
    errors::ServiceError,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderBuyer {
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub id: i32,
    pub product_name: String,
    pub quantity: i32,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub status: String,
    pub seller_id: i32,
    pub seller_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderListItem {
    pub id: i32,
    pub user_id: i32,
    #[schema(value_type = String)]
    pub grand_total: Decimal,
    pub created_at: DateTime<Utc>,
    pub user: Option<OrderBuyer>,
    pub items: Vec<OrderLine>,
}

#[derive(Clone)]
pub struct OrderService {
    db: Arc<DatabaseConnection>,
}

impl OrderService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// All orders, newest first, with the buyer and each item's seller.
    pub async fn list(&self) -> Result<Vec<OrderListItem>, ServiceError> {
        let db = &*self.db;

        let orders = order::Entity::find()
            .find_also_related(user::Entity)
            .order_by_desc(order::Column::CreatedAt)
            .order_by_desc(order::Column::Id)
            .all(db)
            .await?;

        let order_ids: Vec<i32> = orders.iter().map(|(o, _)| o.id).collect();
        let items = order_item::Entity::find()
            .filter(order_item::Column::OrderId.is_in(order_ids))
            .find_also_related(seller::Entity)
            .order_by_asc(order_item::Column::Id)
            .all(db)
            .await?;

        let mut lines: HashMap<i32, Vec<OrderLine>> = HashMap::new();
        for (item, seller) in items {
            lines.entry(item.order_id).or_default().push(OrderLine {
                id: item.id,
                product_name: item.product_name,
                quantity: item.quantity,
                price: item.price,
                status: item.status,
                seller_id: item.seller_id,
                seller_name: seller.map(|s| s.name),
            });
        }

        Ok(orders
            .into_iter()
            .map(|(o, buyer)| OrderListItem {
                id: o.id,
                user_id: o.user_id,
                grand_total: o.grand_total,
                created_at: o.created_at,
                user: buyer.map(|u| OrderBuyer {
                    name: u.name,
                    phone: u.phone,
                }),
                items: lines.remove(&o.id).unwrap_or_default(),
            })
            .collect())
    }
}
