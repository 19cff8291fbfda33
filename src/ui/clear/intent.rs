//! Intents for the clear-confirmation workflow.

use crate::confirm::Decision;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ClearIntent {
    /// User asked to clear the cart.
    Request { item_count: usize },

    /// The confirmation primitive answered.
    Decide(Decision),

    /// The store clear was invoked.
    ClearStarted,

    /// The store clear completed.
    ClearSucceeded { removed: usize },

    /// The store clear failed.
    ClearFailed { message: String },
}

impl Intent for ClearIntent {}
