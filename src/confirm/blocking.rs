use std::sync::Arc;

use async_trait::async_trait;

use super::{ConfirmRequest, ConfirmationPort, Decision};

/// A synchronous yes/no question. Implementations may block.
pub trait Prompt: Send + Sync + 'static {
    fn ask(&self, message: &str) -> bool;
}

impl<F> Prompt for F
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    fn ask(&self, message: &str) -> bool {
        self(message)
    }
}

/// Runs a blocking [`Prompt`] on the blocking thread pool.
pub struct BlockingConfirm {
    prompt: Arc<dyn Prompt>,
}

impl BlockingConfirm {
    pub fn new(prompt: Arc<dyn Prompt>) -> Self {
        Self { prompt }
    }
}

#[async_trait]
impl ConfirmationPort for BlockingConfirm {
    fn name(&self) -> &'static str {
        "blocking"
    }

    async fn confirm(&self, request: &ConfirmRequest) -> Decision {
        let prompt = Arc::clone(&self.prompt);
        let message = request.message.clone();

        match tokio::task::spawn_blocking(move || prompt.ask(&message)).await {
            Ok(true) => Decision::Confirmed,
            Ok(false) => Decision::Cancelled,
            Err(e) => {
                tracing::warn!(error = %e, "Confirmation prompt aborted");
                Decision::Cancelled
            }
        }
    }
}
