//! State for the clear-confirmation workflow.

use crate::ui::mvi::UiState;

/// One invocation of "clear all", from request to terminal outcome.
///
/// ```text
/// Idle → Confirming → Cancelled
///                   → Confirmed → Clearing → Cleared
///                                          → Failed
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClearDialogState {
    #[default]
    Idle,

    /// Waiting for the user's answer.
    Confirming {
        /// Lines in the cart when the request was made.
        item_count: usize,
    },

    /// User declined. Terminal.
    Cancelled,

    /// User accepted; the clear has not been started yet.
    Confirmed { item_count: usize },

    /// Backend clear in flight.
    Clearing { item_count: usize },

    /// Terminal.
    Cleared {
        /// Lines dropped by the clear.
        removed: usize,
    },

    /// Backend clear failed; the cart is unchanged. Terminal.
    Failed { error: String },
}

impl UiState for ClearDialogState {}

impl ClearDialogState {
    /// A dialog is on screen.
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Confirming { .. })
    }

    /// Between a request and its terminal state.
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            Self::Confirming { .. } | Self::Confirmed { .. } | Self::Clearing { .. }
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Cleared { .. } | Self::Failed { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Stable name for log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Confirming { .. } => "confirming",
            Self::Cancelled => "cancelled",
            Self::Confirmed { .. } => "confirmed",
            Self::Clearing { .. } => "clearing",
            Self::Cleared { .. } => "cleared",
            Self::Failed { .. } => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_default() {
        assert_eq!(ClearDialogState::default(), ClearDialogState::Idle);
    }

    #[test]
    fn only_confirming_is_visible() {
        assert!(ClearDialogState::Confirming { item_count: 1 }.is_visible());
        assert!(!ClearDialogState::Clearing { item_count: 1 }.is_visible());
        assert!(!ClearDialogState::Idle.is_visible());
    }

    #[test]
    fn terminal_states() {
        assert!(ClearDialogState::Cancelled.is_terminal());
        assert!(ClearDialogState::Cleared { removed: 2 }.is_terminal());
        assert!(ClearDialogState::Failed { error: "x".into() }.is_terminal());
        assert!(!ClearDialogState::Idle.is_terminal());
        assert!(!ClearDialogState::Clearing { item_count: 0 }.is_terminal());
    }

    #[test]
    fn error_message_only_when_failed() {
        assert_eq!(ClearDialogState::Idle.error_message(), None);
        assert_eq!(
            ClearDialogState::Failed { error: "disk full".into() }.error_message(),
            Some("disk full")
        );
    }
}
