//! User-visible notifications.

use std::io::Write;

use parking_lot::Mutex;

/// Surface a message to the user outside the normal render path.
pub trait Notifier: Send + Sync {
    fn notify_error(&self, title: &str, message: &str);
    fn notify_info(&self, title: &str, message: &str);
}

/// Writes `[title] message` lines to a terminal stream (stderr by default).
pub struct ConsoleNotifier<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleNotifier<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn emit(&self, marker: &str, title: &str, message: &str) {
        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{marker} [{title}] {message}").and_then(|_| out.flush()) {
            tracing::warn!(error = %e, title, "Failed to write notification");
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn notify_error(&self, title: &str, message: &str) {
        self.emit("✗", title, message);
    }

    fn notify_info(&self, title: &str, message: &str) {
        self.emit("ℹ", title, message);
    }
}
