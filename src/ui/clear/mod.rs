//! Confirmation-gated "clear all" workflow.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - per-invocation state machine
//! - `intent.rs` - user answers and store results
//! - `reducer.rs` - state transitions
//! - `workflow.rs` - drives the port, the store and the notifier

mod intent;
mod reducer;
mod state;
mod workflow;

pub use intent::ClearIntent;
pub use reducer::ClearReducer;
pub use state::ClearDialogState;
pub use workflow::{ClearOutcome, ClearWorkflow};
