//! # Stockroom CLI Library
//!
//! Startup, wiring and dispatch for the `stockroom` binary.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Application Initialization                           │
//! │                                                                         │
//! │  1. Parse arguments (clap, STOCKROOM_* env fallbacks)                  │
//! │     │                                                                   │
//! │  2. Initialize tracing                                                 │
//! │     │  • tracing-subscriber with env filter, writing to stderr         │
//! │     │                                                                   │
//! │  3. Resolve AppConfig                                                  │
//! │     │  • database path, bill directory                                 │
//! │     │                                                                   │
//! │  4. Open database                                                      │
//! │     │  • Create pool, run migrations                                   │
//! │     │                                                                   │
//! │  5. Wire services (ClientService, ProductService, OrderService)        │
//! │     │  • FileBillSink, or MemoryBillSink with --no-bill-files          │
//! │     │                                                                   │
//! │  6. Dispatch the subcommand, print, exit                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

use std::sync::Arc;

use anyhow::{Context, Result};
use stockroom_db::{Database, DbConfig};
use stockroom_service::{BillSink, FileBillSink, MemoryBillSink, Services};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;
use crate::config::AppConfig;
use crate::output::Output;

/// Runs one CLI invocation and returns the process exit code.
///
/// Errors returned here are startup failures; business errors are printed
/// by the command and reported through the exit code.
pub async fn run(cli: Cli) -> Result<i32> {
    let config = AppConfig::resolve(&cli.global)?;
    config.prepare()?;

    info!(
        db = %config.database_path.display(),
        bills = %config.bill_dir.display(),
        "Starting stockroom"
    );

    let db = Database::new(DbConfig::new(&config.database_path))
        .await
        .with_context(|| {
            format!(
                "Could not open database {}",
                config.database_path.display()
            )
        })?;

    let bills: Arc<dyn BillSink> = if config.bills_in_memory {
        Arc::new(MemoryBillSink::new())
    } else {
        Arc::new(FileBillSink::new(&config.bill_dir))
    };
    let services = Services::new(&db, bills);

    let outcome = commands::dispatch(cli.cmd, &services, Output::from_flag(cli.global.json)).await;

    if let Some(text) = &outcome.stdout {
        print_block(text, false);
    }
    if let Some(text) = &outcome.stderr {
        print_block(text, true);
    }

    db.close().await;
    Ok(outcome.exit_code)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_db=debug` - Show every repository call
/// - Default: warnings, plus info from the stockroom crates
///
/// Logs go to stderr so stdout carries only tables and JSON.
pub fn init_tracing() {
    // "stockroom" prefixes every workspace crate target
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stockroom=info,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_block(text: &str, to_stderr: bool) {
    let text = text.trim_end_matches('\n');
    if to_stderr {
        eprintln!("{}", text);
    } else {
        println!("{}", text);
    }
}
