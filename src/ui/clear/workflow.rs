//! Drives one confirmation-gated bulk clear against a [`CartStore`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cart::{CartError, CartStore};
use crate::confirm::ConfirmationPort;
use crate::notify::Notifier;
use crate::ui::messages::Messages;
use crate::ui::mvi::dispatch;

use super::intent::ClearIntent;
use super::reducer::ClearReducer;
use super::state::ClearDialogState;

/// How a `run` ended.
#[derive(Debug)]
pub enum ClearOutcome {
    /// User declined; nothing changed.
    Cancelled,
    /// Cart emptied.
    Cleared { removed: usize },
    /// Backend clear failed; the cart is unchanged and the user was notified.
    Failed(CartError),
    /// Another run of this workflow had not finished yet.
    AlreadyRunning,
}

pub struct ClearWorkflow {
    store: CartStore,
    port: Arc<dyn ConfirmationPort>,
    notifier: Arc<dyn Notifier>,
    messages: Messages,
    state: Mutex<ClearDialogState>,
}

impl ClearWorkflow {
    pub fn new(
        store: CartStore,
        port: Arc<dyn ConfirmationPort>,
        notifier: Arc<dyn Notifier>,
        messages: Messages,
    ) -> Self {
        Self {
            store,
            port,
            notifier,
            messages,
            state: Mutex::new(ClearDialogState::default()),
        }
    }

    /// State of the latest invocation.
    pub fn state(&self) -> ClearDialogState {
        self.state.lock().clone()
    }

    fn apply(&self, intent: ClearIntent) -> ClearDialogState {
        let mut state = self.state.lock();
        dispatch::<ClearReducer>(&mut *state, intent);
        state.clone()
    }

    /// Ask for confirmation and clear the cart if the user accepts.
    ///
    /// Failures are reported to the notifier exactly once and returned in
    /// [`ClearOutcome::Failed`]; they never escape as a panic.
    pub async fn run(&self) -> ClearOutcome {
        let item_count = self.store.item_count();

        let state = {
            let mut state = self.state.lock();
            if state.is_in_progress() {
                tracing::debug!(state = state.label(), "Clear already in progress");
                return ClearOutcome::AlreadyRunning;
            }
            dispatch::<ClearReducer>(&mut *state, ClearIntent::Request { item_count });
            state.clone()
        };
        tracing::info!(state = state.label(), item_count, port = self.port.name(), "Clear requested");

        let request = self.messages.clear_request(item_count);
        let decision = self.port.confirm(&request).await;
        let state = self.apply(ClearIntent::Decide(decision));
        tracing::info!(state = state.label(), item_count, "Clear confirmation answered");

        if !decision.is_confirmed() {
            return ClearOutcome::Cancelled;
        }

        self.apply(ClearIntent::ClearStarted);
        match self.store.clear_cart().await {
            Ok(removed) => {
                let state = self.apply(ClearIntent::ClearSucceeded { removed });
                tracing::info!(state = state.label(), removed, "Clear finished");
                ClearOutcome::Cleared { removed }
            }
            Err(err) => {
                let state = self.apply(ClearIntent::ClearFailed {
                    message: err.to_string(),
                });
                tracing::error!(state = state.label(), error = %err, item_count, "Clear failed");
                let (title, body) = self.messages.clear_failed();
                self.notifier.notify_error(title, body);
                ClearOutcome::Failed(err)
            }
        }
    }
}
