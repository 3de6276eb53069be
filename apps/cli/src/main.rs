//! # Stockroom Entry Point
//!
//! ```text
//! $ stockroom client add "Alice"
//! $ stockroom product add Widget 10
//! $ stockroom order place 1 1 5
//! $ stockroom order list
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use clap::Parser;

use stockroom_cli::args::Cli;
use stockroom_cli::error::INTERNAL_ERROR;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    stockroom_cli::init_tracing();

    let code = match stockroom_cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            INTERNAL_ERROR
        }
    };

    std::process::exit(code);
}
