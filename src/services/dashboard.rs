use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::{
    entities::{
        designer, order,
        order_item::{self, STATUS_FULFILLED},
        return_request::{self, ApprovalStatus, RefundStatus},
        seller, user,
    },
    errors::ServiceError,
    models::{DisplayStatus, ReturnState},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_sellers: u64,
    pub total_designers: u64,
    pub total_orders: u64,
    pub pending_returns: u64,
    pub completed_refunds: u64,
    /// Orders whose items are all fulfilled. An order without items counts.
    pub completed_orders: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyOrders {
    /// UTC day, `YYYY-MM-DD`
    pub date: String,
    pub orders: u64,
    #[schema(value_type = String)]
    pub revenue: Decimal,
}

/// A named slice for the dashboard pie charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NamedCount {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub orders_over_time: Vec<DailyOrders>,
    pub returns_by_status: Vec<NamedCount>,
    pub platform_mix: Vec<NamedCount>,
}

/// Read-only aggregates for the admin dashboard
#[derive(Clone)]
pub struct DashboardService {
    db: Arc<DatabaseConnection>,
}

impl DashboardService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Builds the dashboard for the trailing `window_days`.
    #[instrument(skip(self))]
    pub async fn summary(&self, window_days: u32) -> Result<DashboardSummary, ServiceError> {
        let stats = self.stats().await?;
        let since = Utc::now() - Duration::days(i64::from(window_days));
        let orders_over_time = self.orders_over_time(since).await?;
        let returns_by_status = self.returns_by_status().await?;

        let platform_mix = vec![
            NamedCount {
                name: "Users".to_string(),
                value: stats.total_users,
            },
            NamedCount {
                name: "Sellers".to_string(),
                value: stats.total_sellers,
            },
            NamedCount {
                name: "Designers".to_string(),
                value: stats.total_designers,
            },
        ];

        info!(window_days, "dashboard summary generated");

        Ok(DashboardSummary {
            stats,
            orders_over_time,
            returns_by_status,
            platform_mix,
        })
    }

    pub async fn stats(&self) -> Result<DashboardStats, ServiceError> {
        let db = &*self.db;

        let total_users = user::Entity::find().count(db).await?;
        let total_sellers = seller::Entity::find().count(db).await?;
        let total_designers = designer::Entity::find().count(db).await?;
        let total_orders = order::Entity::find().count(db).await?;

        let states = self.return_states().await?;
        let pending_returns = count_pending(&states);
        let completed_refunds = states
            .iter()
            .filter(|state| state.refund == RefundStatus::Completed)
            .count() as u64;

        // Orders holding at least one item that is not fulfilled.
        let open_orders: Vec<i32> = order_item::Entity::find()
            .select_only()
            .column(order_item::Column::OrderId)
            .filter(order_item::Column::Status.ne(STATUS_FULFILLED))
            .distinct()
            .into_tuple()
            .all(db)
            .await?;

        Ok(DashboardStats {
            total_users,
            total_sellers,
            total_designers,
            total_orders,
            pending_returns,
            completed_refunds,
            completed_orders: total_orders.saturating_sub(open_orders.len() as u64),
        })
    }

    /// Per-day order counts and revenue since `since`, ascending. Days without orders are omitted.
    pub async fn orders_over_time(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<DailyOrders>, ServiceError> {
        let orders = order::Entity::find()
            .filter(order::Column::CreatedAt.gte(since))
            .order_by_asc(order::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(bucket_by_day(&orders))
    }

    /// REQUESTED/APPROVED/REJECTED histogram over every return request.
    pub async fn returns_by_status(&self) -> Result<Vec<NamedCount>, ServiceError> {
        let states = self.return_states().await?;
        Ok(status_histogram(
            states.iter().map(|state| (state.seller, state.admin)),
        ))
    }

    /// Workflow fields of every return request, without the joined rows.
    async fn return_states(&self) -> Result<Vec<ReturnState>, ServiceError> {
        let rows: Vec<(ApprovalStatus, ApprovalStatus, RefundStatus)> =
            return_request::Entity::find()
                .select_only()
                .column(return_request::Column::SellerApprovalStatus)
                .column(return_request::Column::AdminApprovalStatus)
                .column(return_request::Column::RefundStatus)
                .into_tuple()
                .all(&*self.db)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(seller, admin, refund)| ReturnState::new(seller, admin, refund))
            .collect())
    }
}

fn bucket_by_day(orders: &[order::Model]) -> Vec<DailyOrders> {
    let mut days: BTreeMap<String, DailyOrders> = BTreeMap::new();
    for order in orders {
        let date = order.created_at.format("%Y-%m-%d").to_string();
        let bucket = days.entry(date.clone()).or_insert_with(|| DailyOrders {
            date,
            orders: 0,
            revenue: Decimal::ZERO,
        });
        bucket.orders += 1;
        bucket.revenue += order.grand_total;
    }
    days.into_values().collect()
}

fn count_pending(states: &[ReturnState]) -> u64 {
    states.iter().filter(|state| state.is_pending()).count() as u64
}

fn status_histogram(
    statuses: impl IntoIterator<Item = (ApprovalStatus, ApprovalStatus)>,
) -> Vec<NamedCount> {
    let mut counts: HashMap<DisplayStatus, u64> = HashMap::new();
    for (seller, admin) in statuses {
        *counts.entry(DisplayStatus::derive(seller, admin)).or_default() += 1;
    }
    DisplayStatus::ALL
        .iter()
        .map(|status| NamedCount {
            name: status.as_str().to_string(),
            value: counts.get(status).copied().unwrap_or(0),
        })
        .collect()
}
