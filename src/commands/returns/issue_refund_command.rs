use crate::{
    commands::Command,
    db::DbPool,
    entities::return_request,
    errors::ServiceError,
    events::{Event, EventSender},
    models::ReturnTransition,
    repositories::ReturnRepository,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

use super::{observe, run_transition};

/// Completes the refund once both the seller and the admin have approved.
///
/// The guard and the write are one conditional update. Issuing a refund that
/// is already completed succeeds without writing anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRefundCommand {
    pub return_id: i32,
}

#[async_trait::async_trait]
impl Command for IssueRefundCommand {
    type Result = return_request::Model;

    #[instrument(skip(self, db_pool, event_sender), fields(return_id = self.return_id))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let repo = ReturnRepository::new(db_pool);

        let result = run_transition(
            self.return_id,
            ReturnTransition::IssueRefund,
            || repo.complete_refund(self.return_id),
            || repo.find_by_id(self.return_id),
        )
        .await;

        let outcome = observe(ReturnTransition::IssueRefund, self.return_id, result)?;
        if outcome.applied {
            event_sender
                .publish(Event::ReturnRefundCompleted {
                    return_id: self.return_id,
                })
                .await;
        }

        Ok(outcome.record)
    }
}
