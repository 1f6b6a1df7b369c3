//! propctl - CLI for propstore databases
//!
//! Reads and writes typed properties in a SQLite property file from the
//! shell. Every command maps onto one store operation; the process exit
//! code reports the resulting status.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    init_tracing();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(error::exit_code(&e));
    }
}

/// Diagnostics go to stderr so command output stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            std::env::var("PROPSTORE_LOG_LEVEL")
                .map_err(|_| ())
                .and_then(|level| EnvFilter::try_new(level).map_err(|_| ()))
        })
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
