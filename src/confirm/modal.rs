use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::{ConfirmRequest, ConfirmationPort, Decision};

/// A two-action dialog: a cancel action and a destructive confirm action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalDialog {
    pub title: String,
    pub message: String,
    pub cancel_label: String,
    pub confirm_label: String,
}

/// One-shot callback handle for a presented dialog.
///
/// Consumed by whichever action fires first. Dropping it unanswered
/// resolves the dialog as cancelled.
pub struct ModalResponder {
    tx: oneshot::Sender<Decision>,
}

impl ModalResponder {
    pub fn confirm(self) {
        let _ = self.tx.send(Decision::Confirmed);
    }

    pub fn cancel(self) {
        let _ = self.tx.send(Decision::Cancelled);
    }
}

/// Shows a dialog without blocking and answers later through the responder.
pub trait ModalPresenter: Send + Sync {
    fn present(&self, dialog: ModalDialog, responder: ModalResponder);
}

/// Adapts a callback-style [`ModalPresenter`] to an awaitable port.
pub struct ModalConfirm {
    presenter: Arc<dyn ModalPresenter>,
}

impl ModalConfirm {
    pub fn new(presenter: Arc<dyn ModalPresenter>) -> Self {
        Self { presenter }
    }
}

#[async_trait]
impl ConfirmationPort for ModalConfirm {
    fn name(&self) -> &'static str {
        "modal"
    }

    async fn confirm(&self, request: &ConfirmRequest) -> Decision {
        let (tx, rx) = oneshot::channel();
        let dialog = ModalDialog {
            title: request.title.clone(),
            message: request.message.clone(),
            cancel_label: request.cancel_label.clone(),
            confirm_label: request.confirm_label.clone(),
        };

        self.presenter.present(dialog, ModalResponder { tx });
        rx.await.unwrap_or(Decision::Cancelled)
    }
}
