//! Terminal implementations of the confirmation primitives.

use std::io::{self, BufRead, Write};
use std::thread;

use crate::confirm::{ModalDialog, ModalPresenter, ModalResponder, Prompt};

/// `message [y/N]` on stdout, answer read from stdin.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&self, message: &str) -> bool {
        if let Err(e) = write_question(&mut io::stdout(), message) {
            tracing::warn!(error = %e, "Failed to write confirmation prompt");
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_yes(&answer),
        }
    }
}

/// Prints a two-action dialog and answers from a reader thread, so
/// `present` returns immediately like a native alert.
pub struct TerminalModal;

impl ModalPresenter for TerminalModal {
    fn present(&self, dialog: ModalDialog, responder: ModalResponder) {
        if let Err(e) = write_dialog(&mut io::stdout(), &dialog) {
            tracing::warn!(error = %e, title = %dialog.title, "Failed to write confirmation dialog");
        }

        thread::spawn(move || {
            let mut choice = String::new();
            match io::stdin().lock().read_line(&mut choice) {
                Ok(n) if n > 0 && choice.trim() == "2" => responder.confirm(),
                _ => responder.cancel(),
            }
        });
    }
}

fn write_question(out: &mut impl Write, message: &str) -> io::Result<()> {
    write!(out, "{message} [y/N] ")?;
    out.flush()
}

fn write_dialog(out: &mut impl Write, dialog: &ModalDialog) -> io::Result<()> {
    writeln!(out, "┌ {}", dialog.title)?;
    writeln!(out, "│ {}", dialog.message)?;
    write!(
        out,
        "└ [1] {}   [2] {} > ",
        dialog.cancel_label, dialog.confirm_label
    )?;
    out.flush()
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "c" | "có")
}
