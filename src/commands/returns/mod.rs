//! Admin-side transitions of the return workflow.

mod admin_approve_return_command;
mod admin_reject_return_command;
mod issue_refund_command;

pub use admin_approve_return_command::AdminApproveReturnCommand;
pub use admin_reject_return_command::AdminRejectReturnCommand;
pub use issue_refund_command::IssueRefundCommand;

use crate::{
    entities::return_request,
    errors::ServiceError,
    metrics,
    models::return_workflow::{plan, Plan, ReturnState, ReturnTransition},
    repositories::ReturnRepository,
};
use std::future::Future;
use tracing::{debug, error, info, warn};

/// Result of a transition that did not fail.
#[derive(Debug, Clone)]
pub(crate) struct TransitionOutcome {
    pub record: return_request::Model,
    /// False when the record already held the target state.
    pub applied: bool,
}

/// Conditional writes attempted before giving up on a record that keeps changing.
const MAX_ATTEMPTS: usize = 2;

pub(crate) const MSG_CONCURRENT_CHANGE: &str =
    "Return request changed while being updated, try again";

/// Runs a conditional update and turns its row count into an outcome.
///
/// On zero rows the record is re-read and the workflow rules decide whether
/// the id was missing, the write was already done, or a precondition failed.
/// If the re-read shows the guard now holds, another request changed the row
/// between the write and the read, so the write is attempted again.
pub(crate) async fn run_transition<W, WF, R, RF>(
    id: i32,
    transition: ReturnTransition,
    mut write: W,
    mut reread: R,
) -> Result<TransitionOutcome, ServiceError>
where
    W: FnMut() -> WF,
    WF: Future<Output = Result<u64, ServiceError>>,
    R: FnMut() -> RF,
    RF: Future<Output = Result<Option<return_request::Model>, ServiceError>>,
{
    for attempt in 1..=MAX_ATTEMPTS {
        let rows_affected = write().await?;
        let record = reread()
            .await?
            .ok_or_else(|| ServiceError::not_found("Return request", id))?;

        if rows_affected > 0 {
            return Ok(TransitionOutcome {
                record,
                applied: true,
            });
        }

        match plan(ReturnState::from(&record), transition) {
            Ok(Plan::NoOp) => {
                return Ok(TransitionOutcome {
                    record,
                    applied: false,
                })
            }
            Err(e) => return Err(ServiceError::PreconditionFailed(e.to_string())),
            Ok(Plan::Apply(_)) => {
                debug!(return_id = id, %transition, attempt, "return changed concurrently");
            }
        }
    }

    Err(ServiceError::PreconditionFailed(
        MSG_CONCURRENT_CHANGE.to_string(),
    ))
}

/// Logs and counts the result of a transition.
pub(crate) fn observe(
    transition: ReturnTransition,
    id: i32,
    result: Result<TransitionOutcome, ServiceError>,
) -> Result<TransitionOutcome, ServiceError> {
    match &result {
        Ok(outcome) if outcome.applied => {
            metrics::record_transition(transition, "applied");
            info!(return_id = id, %transition, "return transition applied");
        }
        Ok(_) => {
            metrics::record_transition(transition, "noop");
            info!(return_id = id, %transition, "return transition already applied");
        }
        Err(e @ (ServiceError::NotFound(_) | ServiceError::PreconditionFailed(_))) => {
            metrics::record_transition(transition, e.outcome_label());
            warn!(return_id = id, %transition, reason = %e, "return transition refused");
        }
        Err(e) => {
            metrics::record_transition(transition, e.outcome_label());
            error!(return_id = id, %transition, error = %e, "return transition failed");
        }
    }
    result
}
