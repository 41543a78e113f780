use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use crate::entities::return_request::{
    ApprovalStatus, Column, Entity as ReturnRequest, Model as ReturnRequestModel, RefundStatus,
};
use crate::entities::{order_item, seller, user};
use crate::errors::ServiceError;
use crate::repositories::Repository;

use super::BaseRepository;

/// A return request joined with the names shown in the admin table.
#[derive(Debug, Clone)]
pub struct ReturnRow {
    pub request: ReturnRequestModel,
    pub user: Option<user::Model>,
    pub seller: Option<seller::Model>,
}

/// Storage access for return requests.
///
/// Every write is a single conditional `UPDATE` so the workflow guard and the
/// mutation happen atomically in the store.
#[derive(Debug, Clone)]
pub struct ReturnRepository {
    base: BaseRepository,
}

impl ReturnRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ReturnRequestModel>, ServiceError> {
        Ok(ReturnRequest::find_by_id(id).one(self.base.get_db()).await?)
    }

    /// All return requests, newest first, with their requester and seller.
    pub async fn find_all_rows(&self) -> Result<Vec<ReturnRow>, ServiceError> {
        let db = self.base.get_db();
        let requests = ReturnRequest::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await?;
        self.attach_names(requests).await
    }

    pub async fn find_row(&self, id: i32) -> Result<Option<ReturnRow>, ServiceError> {
        match self.find_by_id(id).await? {
            Some(request) => Ok(self.attach_names(vec![request]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<ReturnRequestModel>, ServiceError> {
        Ok(ReturnRequest::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .all(self.base.get_db())
            .await?)
    }

    /// Records an admin decision unless the refund is already completed.
    /// Returns the number of rows written (0 or 1).
    pub async fn set_admin_decision(
        &self,
        id: i32,
        decision: ApprovalStatus,
        decided_at: DateTime<Utc>,
    ) -> Result<u64, ServiceError> {
        let result = ReturnRequest::update_many()
            .col_expr(Column::AdminApprovalStatus, Expr::value(decision))
            .col_expr(Column::AdminApprovedAt, Expr::value(decided_at))
            .filter(Column::Id.eq(id))
            .filter(Column::RefundStatus.eq(RefundStatus::Pending))
            .exec(self.base.get_db())
            .await?;
        Ok(result.rows_affected)
    }

    /// Marks the refund completed only if both parties approved and it is still pending.
    /// Returns the number of rows written (0 or 1).
    pub async fn complete_refund(&self, id: i32) -> Result<u64, ServiceError> {
        let result = ReturnRequest::update_many()
            .col_expr(Column::RefundStatus, Expr::value(RefundStatus::Completed))
            .filter(Column::Id.eq(id))
            .filter(Column::SellerApprovalStatus.eq(ApprovalStatus::Approved))
            .filter(Column::AdminApprovalStatus.eq(ApprovalStatus::Approved))
            .filter(Column::RefundStatus.eq(RefundStatus::Pending))
            .exec(self.base.get_db())
            .await?;
        Ok(result.rows_affected)
    }

    async fn attach_names(
        &self,
        requests: Vec<ReturnRequestModel>,
    ) -> Result<Vec<ReturnRow>, ServiceError> {
        let db = self.base.get_db();

        let user_ids: Vec<i32> = requests.iter().map(|r| r.user_id).collect();
        let users = user::Entity::find()
            .filter(user::Column::Id.is_in(user_ids))
            .all(db)
            .await?;

        let item_ids: Vec<i32> = requests.iter().map(|r| r.order_item_id).collect();
        let items_with_sellers = order_item::Entity::find()
            .filter(order_item::Column::Id.is_in(item_ids))
            .find_also_related(seller::Entity)
            .all(db)
            .await?;

        Ok(requests
            .into_iter()
            .map(|request| {
                let user = users.iter().find(|u| u.id == request.user_id).cloned();
                let seller = items_with_sellers
                    .iter()
                    .find(|(item, _)| item.id == request.order_item_id)
                    .and_then(|(_, seller)| seller.clone());
                ReturnRow {
                    request,
                    user,
                    seller,
                }
            })
            .collect())
    }
}
