//! CLI entry point for casetrace.

mod cli;
mod commands;
mod output;

use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Project .env first, so CASETRACE_* is set before config loads.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::init(cli.output);

    let mut log_config = casetrace_observability::ObservabilityConfig::from_env();
    if cli.verbose {
        log_config = log_config.with_log_level("debug");
    }
    if let Err(e) = casetrace_observability::init(log_config) {
        output::warning(&e.to_string());
    }

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
