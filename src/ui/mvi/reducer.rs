//! Reducer trait and the in-place dispatch helper.

use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
///
/// `reduce` must stay pure: (State, Intent) -> State, no I/O.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `R` over the state stored in `slot`, replacing it with the result.
pub fn dispatch<R: Reducer>(slot: &mut R::State, intent: R::Intent) {
    *slot = R::reduce(std::mem::take(slot), intent);
}
