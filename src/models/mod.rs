//! Domain models that are not tied to a storage row.

pub mod return_workflow;

pub use return_workflow::{DisplayStatus, Plan, ReturnState, ReturnTransition, TransitionError};
