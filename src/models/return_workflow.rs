//! Return/refund approval state machine.
//!
//! A return request moves through two independent consent gates (seller and
//! admin) before a refund may be issued. The refund status is terminal once
//! `COMPLETED`. Everything here is pure; persistence lives in
//! [`crate::repositories::return_repository`].

use crate::entities::return_request::{self, ApprovalStatus, RefundStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

pub const MSG_APPROVALS_REQUIRED: &str = "Seller & Admin must approve first";
pub const MSG_REFUND_COMPLETED: &str = "Refund already completed";

/// The three fields that drive the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnState {
    pub seller: ApprovalStatus,
    pub admin: ApprovalStatus,
    pub refund: RefundStatus,
}

impl ReturnState {
    pub fn new(seller: ApprovalStatus, admin: ApprovalStatus, refund: RefundStatus) -> Self {
        Self {
            seller,
            admin,
            refund,
        }
    }

    pub fn both_approved(&self) -> bool {
        self.seller == ApprovalStatus::Approved && self.admin == ApprovalStatus::Approved
    }

    pub fn display_status(&self) -> DisplayStatus {
        DisplayStatus::derive(self.seller, self.admin)
    }

    /// Pending for dashboard purposes: either authority has yet to decide.
    pub fn is_pending(&self) -> bool {
        self.seller == ApprovalStatus::Pending || self.admin == ApprovalStatus::Pending
    }
}

impl From<&return_request::Model> for ReturnState {
    fn from(model: &return_request::Model) -> Self {
        Self::new(
            model.seller_approval_status,
            model.admin_approval_status,
            model.refund_status,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnTransition {
    AdminApprove,
    AdminReject,
    IssueRefund,
}

impl ReturnTransition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnTransition::AdminApprove => "admin_approve",
            ReturnTransition::AdminReject => "admin_reject",
            ReturnTransition::IssueRefund => "issue_refund",
        }
    }
}

impl fmt::Display for ReturnTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the store must do to carry out a permitted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Write the target state.
    Apply(ReturnState),
    /// The record already holds the target state; write nothing.
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("{}", MSG_APPROVALS_REQUIRED)]
    ApprovalsRequired,
    #[error("{}", MSG_REFUND_COMPLETED)]
    RefundCompleted,
}

/// Decides whether `transition` may run from `state`.
///
/// Admin decisions overwrite any prior admin decision as long as the refund
/// is still pending. A refund requires both approvals; repeating it on a
/// completed record is a no-op.
pub fn plan(state: ReturnState, transition: ReturnTransition) -> Result<Plan, TransitionError> {
    match transition {
        ReturnTransition::AdminApprove | ReturnTransition::AdminReject => {
            if state.refund.is_final() {
                return Err(TransitionError::RefundCompleted);
            }
            let admin = if transition == ReturnTransition::AdminApprove {
                ApprovalStatus::Approved
            } else {
                ApprovalStatus::Rejected
            };
            // Always applied so the decision timestamp is re-stamped.
            Ok(Plan::Apply(ReturnState { admin, ..state }))
        }
        ReturnTransition::IssueRefund => {
            if state.refund.is_final() {
                return Ok(Plan::NoOp);
            }
            if !state.both_approved() {
                return Err(TransitionError::ApprovalsRequired);
            }
            Ok(Plan::Apply(ReturnState {
                refund: RefundStatus::Completed,
                ..state
            }))
        }
    }
}

/// Status shown to admins. Computed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayStatus {
    Requested,
    Approved,
    Rejected,
}

impl DisplayStatus {
    pub const ALL: [DisplayStatus; 3] = [
        DisplayStatus::Requested,
        DisplayStatus::Approved,
        DisplayStatus::Rejected,
    ];

    /// Admin rejection dominates; both approvals yield `Approved`; anything else is `Requested`.
    pub fn derive(seller: ApprovalStatus, admin: ApprovalStatus) -> Self {
        match (seller, admin) {
            (_, ApprovalStatus::Rejected) => DisplayStatus::Rejected,
            (ApprovalStatus::Approved, ApprovalStatus::Approved) => DisplayStatus::Approved,
            _ => DisplayStatus::Requested,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayStatus::Requested => "REQUESTED",
            DisplayStatus::Approved => "APPROVED",
            DisplayStatus::Rejected => "REJECTED",
        }
    }
}
