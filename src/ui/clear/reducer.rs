//! Reducer for the clear-confirmation workflow.

use crate::confirm::Decision;
use crate::ui::mvi::Reducer;

use super::intent::ClearIntent;
use super::state::ClearDialogState;

pub struct ClearReducer;

impl Reducer for ClearReducer {
    type State = ClearDialogState;
    type Intent = ClearIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ClearIntent::Request { item_count } => {
                if state.is_in_progress() {
                    // One invocation at a time
                    state
                } else {
                    ClearDialogState::Confirming { item_count }
                }
            }

            ClearIntent::Decide(decision) => match state {
                ClearDialogState::Confirming { item_count } => match decision {
                    Decision::Confirmed => ClearDialogState::Confirmed { item_count },
                    Decision::Cancelled => ClearDialogState::Cancelled,
                },
                other => other,
            },

            ClearIntent::ClearStarted => match state {
                ClearDialogState::Confirmed { item_count } => {
                    ClearDialogState::Clearing { item_count }
                }
                other => other,
            },

            ClearIntent::ClearSucceeded { removed } => match state {
                ClearDialogState::Clearing { .. } => ClearDialogState::Cleared { removed },
                other => other,
            },

            ClearIntent::ClearFailed { message } => match state {
                ClearDialogState::Clearing { .. } => ClearDialogState::Failed { error: message },
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(intents: Vec<ClearIntent>) -> ClearDialogState {
        intents
            .into_iter()
            .fold(ClearDialogState::Idle, ClearReducer::reduce)
    }

    #[test]
    fn request_opens_confirmation() {
        let state = reduce_all(vec![ClearIntent::Request { item_count: 3 }]);
        assert_eq!(state, ClearDialogState::Confirming { item_count: 3 });
    }

    #[test]
    fn decline_cancels() {
        let state = reduce_all(vec![
            ClearIntent::Request { item_count: 3 },
            ClearIntent::Decide(Decision::Cancelled),
        ]);
        assert_eq!(state, ClearDialogState::Cancelled);
    }

    #[test]
    fn happy_path_reaches_cleared() {
        let state = reduce_all(vec![
            ClearIntent::Request { item_count: 3 },
            ClearIntent::Decide(Decision::Confirmed),
            ClearIntent::ClearStarted,
            ClearIntent::ClearSucceeded { removed: 3 },
        ]);
        assert_eq!(state, ClearDialogState::Cleared { removed: 3 });
    }

    #[test]
    fn failure_keeps_error() {
        let state = reduce_all(vec![
            ClearIntent::Request { item_count: 1 },
            ClearIntent::Decide(Decision::Confirmed),
            ClearIntent::ClearStarted,
            ClearIntent::ClearFailed {
                message: "disk full".into(),
            },
        ]);
        assert_eq!(state.error_message(), Some("disk full"));
    }

    #[test]
    fn request_ignored_while_in_progress() {
        let state = reduce_all(vec![
            ClearIntent::Request { item_count: 1 },
            ClearIntent::Decide(Decision::Confirmed),
            ClearIntent::ClearStarted,
            ClearIntent::Request { item_count: 9 },
        ]);
        assert_eq!(state, ClearDialogState::Clearing { item_count: 1 });
    }

    #[test]
    fn request_from_terminal_starts_fresh() {
        let state = reduce_all(vec![
            ClearIntent::Request { item_count: 1 },
            ClearIntent::Decide(Decision::Cancelled),
            ClearIntent::Request { item_count: 2 },
        ]);
        assert_eq!(state, ClearDialogState::Confirming { item_count: 2 });
    }

    #[test]
    fn out_of_order_results_are_ignored() {
        let state = reduce_all(vec![
            ClearIntent::ClearSucceeded { removed: 5 },
            ClearIntent::Decide(Decision::Confirmed),
            ClearIntent::ClearStarted,
        ]);
        assert_eq!(state, ClearDialogState::Idle);
    }
}
