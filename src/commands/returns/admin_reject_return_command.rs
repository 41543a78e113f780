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

/// Records the admin's rejection and stamps the decision time.
///
/// No reason is captured. Refused once the refund is completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminRejectReturnCommand {
    pub return_id: i32,
}

#[async_trait::async_trait]
impl Command for AdminRejectReturnCommand {
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
            ReturnTransition::AdminReject,
            || repo.set_admin_decision(self.return_id, ApprovalStatus::Rejected, now),
            || repo.find_by_id(self.return_id),
        )
        .await;

        let outcome = observe(ReturnTransition::AdminReject, self.return_id, result)?;
        if outcome.applied {
            event_sender
                .publish(Event::ReturnAdminRejected {
                    return_id: self.return_id,
                    at: now,
                })
                .await;
        }

        Ok(outcome.record)
    }
}
