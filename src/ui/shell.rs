//! Line-oriented cart screen.
//!
//! Each input line is parsed into a [`ShellCommand`], applied to the
//! injected [`CartStore`], and the cart is re-rendered.

use std::io::Write;
use std::str::SplitWhitespace;
use std::sync::Arc;

use crate::cart::{CartState, CartStore, CheckoutOutcome, ItemSpec, RemoveOutcome};
use crate::notify::Notifier;
use crate::ui::clear::{ClearOutcome, ClearWorkflow};
use crate::ui::format::CurrencyFormatter;
use crate::ui::messages::Messages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `add <id> <price> <name...>`
    Add(ItemSpec),
    /// `inc <id>`: one more unit of a line already in the cart.
    Increment { id: String },
    /// `dec <id>`
    Decrement { id: String },
    /// `rm <id>`
    Remove { id: String },
    Clear,
    List,
    Checkout,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unknown(String),
    Usage(&'static str),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command"),
            ParseError::Unknown(cmd) => write!(f, "unknown command '{}', try 'help'", cmd),
            ParseError::Usage(usage) => write!(f, "usage: {}", usage),
        }
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
commands:
  add <id> <price> <name...>   add one unit (price in smallest currency unit)
  inc <id>                     one more unit of an item in the cart
  dec <id>                     one less unit; the last unit removes the item
  rm <id>                      remove the item completely
  clear                        remove everything (asks first)
  list                         show the cart
  checkout                     pay for the cart
  help | quit";

fn id_arg(parts: &mut SplitWhitespace<'_>, usage: &'static str) -> Result<String, ParseError> {
    parts
        .next()
        .map(str::to_string)
        .ok_or(ParseError::Usage(usage))
}

/// Whole units, optionally grouped by thousands with one separator:
/// `180000`, `180.000`, `1,250,000`. Anything else (`12.5`, `1.2.3`) is
/// rejected rather than guessed at.
fn parse_price(raw: &str) -> Option<u64> {
    let separator = raw.chars().find(|c| matches!(c, '.' | ','));
    let digits = match separator {
        None => raw.to_string(),
        Some(sep) => {
            let mut groups = raw.split(sep);
            let head = groups.next()?;
            if head.is_empty() || head.len() > 3 {
                return None;
            }
            let mut digits = head.to_string();
            for group in groups {
                if group.len() != 3 {
                    return None;
                }
                digits.push_str(group);
            }
            digits
        }
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Err(ParseError::Empty);
        };

        match cmd {
            "add" => {
                const USAGE: &str = "add <id> <price> <name...>";
                let id = id_arg(&mut parts, USAGE)?;
                let price = parts
                    .next()
                    .and_then(parse_price)
                    .ok_or(ParseError::Usage(USAGE))?;
                let name = parts.collect::<Vec<_>>().join(" ");
                let name = if name.is_empty() { id.clone() } else { name };
                Ok(ShellCommand::Add(ItemSpec::new(id, name, price)))
            }
            "inc" | "+" => Ok(ShellCommand::Increment {
                id: id_arg(&mut parts, "inc <id>")?,
            }),
            "dec" | "-" => Ok(ShellCommand::Decrement {
                id: id_arg(&mut parts, "dec <id>")?,
            }),
            "rm" | "remove" => Ok(ShellCommand::Remove {
                id: id_arg(&mut parts, "rm <id>")?,
            }),
            "clear" => Ok(ShellCommand::Clear),
            "list" | "ls" => Ok(ShellCommand::List),
            "checkout" => Ok(ShellCommand::Checkout),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }

    /// Commands after which the cart should be flushed to the backend.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            ShellCommand::Add(_)
                | ShellCommand::Increment { .. }
                | ShellCommand::Decrement { .. }
                | ShellCommand::Remove { .. }
        )
    }
}

/// Whether the input loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellControl {
    Continue,
    Quit,
}

pub struct Shell<W: Write> {
    store: CartStore,
    workflow: ClearWorkflow,
    notifier: Arc<dyn Notifier>,
    formatter: CurrencyFormatter,
    messages: Messages,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(
        store: CartStore,
        workflow: ClearWorkflow,
        notifier: Arc<dyn Notifier>,
        formatter: CurrencyFormatter,
        messages: Messages,
        out: W,
    ) -> Self {
        Self {
            store,
            workflow,
            notifier,
            formatter,
            messages,
            out,
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Parse and run one input line.
    pub async fn handle_line(&mut self, line: &str) -> std::io::Result<ShellControl> {
        match ShellCommand::parse(line) {
            Ok(command) => self.execute(command).await,
            Err(ParseError::Empty) => Ok(ShellControl::Continue),
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                Ok(ShellControl::Continue)
            }
        }
    }

    pub async fn execute(&mut self, command: ShellCommand) -> std::io::Result<ShellControl> {
        let mutates = command.mutates();

        match command {
            ShellCommand::Add(spec) => self.store.add_to_cart(spec),
            ShellCommand::Increment { id } => {
                match self.store.snapshot().get(&id).map(|item| item.spec()) {
                    Some(spec) => self.store.add_to_cart(spec),
                    None => writeln!(self.out, "{}", self.messages.not_in_cart(&id))?,
                }
            }
            ShellCommand::Decrement { id } => {
                if self.store.remove_one(&id) == RemoveOutcome::NotFound {
                    writeln!(self.out, "{}", self.messages.not_in_cart(&id))?;
                }
            }
            ShellCommand::Remove { id } => {
                if self.store.remove_item_completely(&id) == RemoveOutcome::NotFound {
                    writeln!(self.out, "{}", self.messages.not_in_cart(&id))?;
                }
            }
            ShellCommand::Clear => {
                writeln!(self.out)?;
                self.out.flush()?;
                match self.workflow.run().await {
                    ClearOutcome::Cleared { removed } => {
                        writeln!(self.out, "{}", self.messages.cleared(removed))?
                    }
                    // Failure already went to the notifier.
                    ClearOutcome::Cancelled
                    | ClearOutcome::Failed(_)
                    | ClearOutcome::AlreadyRunning => {}
                }
            }
            ShellCommand::List => {}
            ShellCommand::Checkout => {
                let CheckoutOutcome::NotImplemented { .. } = self.store.checkout();
                let (title, body) = self.messages.checkout_unavailable();
                self.notifier.notify_info(title, body);
                return Ok(ShellControl::Continue);
            }
            ShellCommand::Help => {
                writeln!(self.out, "{}", HELP)?;
                return Ok(ShellControl::Continue);
            }
            ShellCommand::Quit => return Ok(ShellControl::Quit),
        }

        if mutates {
            if let Err(e) = self.store.flush().await {
                tracing::warn!(error = %e, "Failed to persist cart");
            }
        }

        self.render()?;
        Ok(ShellControl::Continue)
    }

    /// Draw the current cart.
    pub fn render(&mut self) -> std::io::Result<()> {
        let text = render_cart(&self.store.snapshot(), &self.formatter, &self.messages);
        write!(self.out, "{}", text)?;
        self.out.flush()
    }
}

/// Text rendering of a cart: one block per line plus the total row.
pub fn render_cart(state: &CartState, formatter: &CurrencyFormatter, messages: &Messages) -> String {
    if state.is_empty() {
        return format!("{}\n", messages.empty_cart());
    }

    let mut out = String::new();
    for item in state.items() {
        out.push_str(&format!(
            "{} [{}]\n  {} {}   x{}   {}\n",
            item.name,
            item.id,
            formatter.format(u128::from(item.price)),
            messages.per_unit(),
            item.quantity,
            formatter.format(item.line_total()),
        ));
    }
    out.push_str(&format!(
        "{}: {}\n",
        messages.total_label(),
        formatter.format(state.total_price())
    ));
    out
}
