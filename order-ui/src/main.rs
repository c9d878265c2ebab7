use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use order_core::PaymentMethod;
use tracing::debug;

use order_ui::config::{GuideConfig, LoggingConfig};
use order_ui::{app, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Counter and WhatsApp order guide.
///
/// Walks the operator from customer lookup through product line and payment
/// method to the pricing rules for the order.
#[derive(Debug, Parser)]
#[command(name = "OrderGuide", version, about)]
struct Cli {
    /// TOML config file. Defaults to `order-guide.toml` if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter (e.g. `debug`, `order_core=trace`). Overrides config and RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Append logs to this file. Overrides config.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the interactive guide (default).
    Run,

    /// Print the surcharge-adjusted total for an amount and payment method.
    Quote {
        /// Base amount, comma as decimal separator (e.g. `50,00`).
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// cash, pix, debit, credit, invoice or delivery.
        method: PaymentMethod,
    },

    /// Print the payment surcharge table.
    Surcharges,
}

// ─── logging ─────────────────────────────────────────────────────────────────

/// Applies level and file settings on top of the default subscriber.
fn configure_logging(
    cli: &Cli,
    config: &LoggingConfig,
) -> anyhow::Result<()> {
    let resolved = config.resolve(
        cli.log_level.as_deref(),
        cli.log_file.as_deref(),
        std::env::var_os("RUST_LOG").is_some(),
    );
    if let Some(level) = &resolved.level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &resolved.file {
        logging::enable_file_logging(path)?;
    }

    logging::set_stdout_enabled(config.stdout)
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    let config = GuideConfig::discover(cli.config.as_deref())
        .context("failed to load configuration")?;
    configure_logging(&cli, &config.logging).context("failed to configure logging")?;
    debug!(?config, "configuration loaded");

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            // The terminal UI owns the screen from here on.
            logging::set_stdout_enabled(false)?;
            let result = app::run_guide();
            logging::disable_file_logging();
            result
        }
        Command::Quote { amount, method } => {
            println!("{}", app::quote(&amount, method));
            Ok(())
        }
        Command::Surcharges => {
            print!("{}", app::surcharge_table());
            Ok(())
        }
    }
}
