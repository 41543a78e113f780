use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

use crate::{
    commands::{
        returns::{AdminApproveReturnCommand, AdminRejectReturnCommand, IssueRefundCommand},
        Command,
    },
    db::DbPool,
    entities::return_request::{ApprovalStatus, RefundStatus},
    errors::ServiceError,
    events::EventSender,
    models::{DisplayStatus, ReturnState},
    repositories::{return_repository::ReturnRow, ReturnRepository},
};

use super::or_missing;

/// One row of the admin returns table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnListItem {
    pub id: i32,
    pub product_name: String,
    pub user_name: String,
    pub user_mobile: String,
    pub seller_name: String,
    pub reason: String,
    /// Derived from the two approval statuses
    pub status: DisplayStatus,
    pub seller_approval_status: ApprovalStatus,
    pub admin_approval_status: ApprovalStatus,
    pub admin_approved_at: Option<DateTime<Utc>>,
    pub refund_method: Option<String>,
    #[schema(value_type = String, example = "1499.00")]
    pub refund_amount: Decimal,
    pub refund_status: RefundStatus,
    pub requested_at: DateTime<Utc>,
}

impl From<ReturnRow> for ReturnListItem {
    fn from(row: ReturnRow) -> Self {
        let state = ReturnState::from(&row.request);
        let request = row.request;
        Self {
            id: request.id,
            product_name: request.product_name,
            user_name: or_missing(row.user.as_ref().map(|u| u.name.as_str())),
            user_mobile: or_missing(row.user.as_ref().and_then(|u| u.phone.as_deref())),
            seller_name: or_missing(row.seller.as_ref().map(|s| s.name.as_str())),
            reason: request.reason,
            status: state.display_status(),
            seller_approval_status: request.seller_approval_status,
            admin_approval_status: request.admin_approval_status,
            admin_approved_at: request.admin_approved_at,
            refund_method: request.refund_method,
            refund_amount: request.refund_amount.unwrap_or(Decimal::ZERO),
            refund_status: request.refund_status,
            requested_at: request.created_at,
        }
    }
}

/// Service for the admin side of the return workflow
#[derive(Clone)]
pub struct ReturnService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
    repository: ReturnRepository,
}

impl ReturnService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        let repository = ReturnRepository::new(db_pool.clone());
        Self {
            db_pool,
            event_sender,
            repository,
        }
    }

    /// All return requests, newest first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ReturnListItem>, ServiceError> {
        let rows = self.repository.find_all_rows().await?;
        Ok(rows.into_iter().map(ReturnListItem::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<ReturnListItem, ServiceError> {
        self.repository
            .find_row(id)
            .await?
            .map(ReturnListItem::from)
            .ok_or_else(|| ServiceError::not_found("Return request", id))
    }

    #[instrument(skip(self))]
    pub async fn approve(&self, id: i32) -> Result<ReturnListItem, ServiceError> {
        AdminApproveReturnCommand { return_id: id }
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await?;
        self.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn reject(&self, id: i32) -> Result<ReturnListItem, ServiceError> {
        AdminRejectReturnCommand { return_id: id }
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await?;
        self.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn issue_refund(&self, id: i32) -> Result<ReturnListItem, ServiceError> {
        IssueRefundCommand { return_id: id }
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await?;
        self.get(id).await
    }
}
