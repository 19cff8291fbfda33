use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use cartkit::cart::CartStore;
use cartkit::config::{Config, ConfirmMode, Currency, Locale, StorageKind};
use cartkit::confirm::{select_port, Environment};
use cartkit::logging::init_tracing;
use cartkit::notify::{ConsoleNotifier, Notifier};
use cartkit::storage::{CartBackend, FileBackend, MemoryBackend};
use cartkit::ui::clear::ClearWorkflow;
use cartkit::ui::format::CurrencyFormatter;
use cartkit::ui::messages::Messages;
use cartkit::ui::prompt::{StdinPrompt, TerminalModal};
use cartkit::ui::shell::{Shell, ShellControl, HELP};

/// Terminal shopping cart.
#[derive(Debug, Parser)]
#[command(name = "cartkit", version)]
struct Cli {
    /// Config file (default: <config_dir>/cartkit/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Confirmation primitive for "clear".
    #[arg(long, value_enum)]
    confirm: Option<ConfirmMode>,

    #[arg(long, value_enum)]
    locale: Option<Locale>,

    #[arg(long, value_enum)]
    currency: Option<Currency>,

    #[arg(long, value_enum)]
    storage: Option<StorageKind>,

    /// Cart file when `--storage file`.
    #[arg(long)]
    storage_path: Option<PathBuf>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(mode) = self.confirm {
            config.confirm.mode = mode;
        }
        if let Some(locale) = self.locale {
            config.display.locale = locale;
        }
        if let Some(currency) = self.currency {
            config.display.currency = currency;
        }
        if let Some(kind) = self.storage {
            config.storage.kind = kind;
        }
        if let Some(path) = &self.storage_path {
            config.storage.path = Some(path.clone());
        }
    }
}

fn build_backend(config: &Config) -> Arc<dyn CartBackend> {
    match config.storage.kind {
        StorageKind::Memory => Arc::new(MemoryBackend::new()),
        StorageKind::File => Arc::new(FileBackend::new(config.storage.resolved_path())),
    }
}

async fn read_line() -> io::Result<Option<String>> {
    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        match io::stdin().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    })
    .await
    .map_err(io::Error::other)?
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config_path, loaded) = match &cli.config {
        Some(path) => (path.clone(), Config::load_from(path)),
        None => (Config::config_path(), Config::load()),
    };
    let mut config = loaded.with_context(|| format!("loading {}", config_path.display()))?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    init_tracing(&config.logging.level);

    let store = CartStore::new(build_backend(&config));
    tracing::info!(
        config = %config_path.display(),
        backend = store.backend_name(),
        "Starting cartkit"
    );
    if let Err(e) = store.restore().await {
        tracing::warn!(error = %e, "Could not restore cart, starting empty");
    }

    let messages = Messages::new(config.display.locale);
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier::stderr());
    let port = select_port(
        config.confirm.mode,
        Environment::detect(),
        Arc::new(StdinPrompt),
        Arc::new(TerminalModal),
    );
    let workflow = ClearWorkflow::new(store.clone(), port, Arc::clone(&notifier), messages);

    let mut shell = Shell::new(
        store,
        workflow,
        notifier,
        CurrencyFormatter::new(config.display.currency),
        messages,
        io::stdout(),
    );

    println!("{}", HELP);
    shell.render()?;

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = read_line().await? else {
            break;
        };
        if shell.handle_line(&line).await? == ShellControl::Quit {
            break;
        }
    }

    tracing::info!("Bye");
    Ok(())
}
