//! Confirmation gate for destructive actions.
//!
//! One [`ConfirmationPort`] is chosen at startup by [`select_port`] and
//! injected where needed; call sites never branch on the environment.

mod blocking;
mod modal;

use std::io::IsTerminal;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ConfirmMode;

pub use blocking::{BlockingConfirm, Prompt};
pub use modal::{ModalConfirm, ModalDialog, ModalPresenter, ModalResponder};

/// Everything a confirmation primitive may show.
///
/// The blocking variant only uses `message`; the modal variant shows all
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub cancel_label: String,
    pub confirm_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Cancelled,
}

impl Decision {
    pub fn is_confirmed(self) -> bool {
        self == Decision::Confirmed
    }
}

/// Asks the user to acknowledge a destructive action.
#[async_trait]
pub trait ConfirmationPort: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Resolve once the user has answered. Never fails: anything that
    /// prevents an answer counts as [`Decision::Cancelled`].
    async fn confirm(&self, request: &ConfirmRequest) -> Decision;
}

/// Capabilities of the running process relevant to confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    /// A synchronous prompt can block on an interactive terminal.
    pub interactive: bool,
}

impl Environment {
    pub fn detect() -> Self {
        Self {
            interactive: std::io::stdin().is_terminal(),
        }
    }
}

/// Collapse `Auto` into a concrete variant for `env`.
pub fn resolve_mode(mode: ConfirmMode, env: Environment) -> ConfirmMode {
    match mode {
        ConfirmMode::Auto if env.interactive => ConfirmMode::Blocking,
        ConfirmMode::Auto => ConfirmMode::Modal,
        other => other,
    }
}

/// Build the port for `mode` once, at startup.
pub fn select_port(
    mode: ConfirmMode,
    env: Environment,
    prompt: Arc<dyn Prompt>,
    presenter: Arc<dyn ModalPresenter>,
) -> Arc<dyn ConfirmationPort> {
    let resolved = resolve_mode(mode, env);
    tracing::debug!(?mode, ?resolved, interactive = env.interactive, "Confirmation port selected");
    match resolved {
        ConfirmMode::Modal => Arc::new(ModalConfirm::new(presenter)),
        _ => Arc::new(BlockingConfirm::new(prompt)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTY: Environment = Environment { interactive: true };
    const PIPE: Environment = Environment { interactive: false };

    struct Never;

    impl ModalPresenter for Never {
        fn present(&self, _dialog: ModalDialog, _responder: ModalResponder) {}
    }

    #[test]
    fn auto_follows_terminal() {
        assert_eq!(resolve_mode(ConfirmMode::Auto, TTY), ConfirmMode::Blocking);
        assert_eq!(resolve_mode(ConfirmMode::Auto, PIPE), ConfirmMode::Modal);
    }

    #[test]
    fn explicit_mode_wins() {
        assert_eq!(resolve_mode(ConfirmMode::Modal, TTY), ConfirmMode::Modal);
        assert_eq!(resolve_mode(ConfirmMode::Blocking, PIPE), ConfirmMode::Blocking);
    }

    #[test]
    fn select_port_builds_matching_variant() {
        let prompt: Arc<dyn Prompt> = Arc::new(|_: &str| true);
        let presenter: Arc<dyn ModalPresenter> = Arc::new(Never);

        let port = select_port(ConfirmMode::Auto, TTY, prompt.clone(), presenter.clone());
        assert_eq!(port.name(), "blocking");

        let port = select_port(ConfirmMode::Auto, PIPE, prompt, presenter);
        assert_eq!(port.name(), "modal");
    }
}
