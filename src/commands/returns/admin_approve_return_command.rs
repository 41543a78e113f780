use crate::{
    commands::Command,
    db::DbPool,
    entities::return_request::{self, ApprovalStatus},
    errors::ServiceError,
    events::{Event, EventSender},
    models::ReturnTransition,
    repositories::ReturnRepository,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

use super::{observe, run_transition};

/// Records the admin's approval and stamps the decision time.
///
/// Repeating it re-stamps the time. Refused once the refund is completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminApproveReturnCommand {
    pub return_id: i32,
}

#[async_trait::async_trait]
impl Command for AdminApproveReturnCommand {
    type Result = return_request::Model;

    #[instrument(skip(self, db_pool, event_sender), fields(return_id = self.return_id))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let repo = ReturnRepository::new(db_pool);
        let now = Utc::now();

        let result = run_transition(
            self.return_id,
            ReturnTransition::AdminApprove,
            || repo.set_admin_decision(self.return_id, ApprovalStatus::Approved, now),
            || repo.find_by_id(self.return_id),
        )
        .await;

        let outcome = observe(ReturnTransition::AdminApprove, self.return_id, result)?;
        if outcome.applied {
            event_sender
                .publish(Event::ReturnAdminApproved {
                    return_id: self.return_id,
                    at: now,
                })
                .await;
        }

        Ok(outcome.record)
    }
}
