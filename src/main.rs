//! AdyaTribe events CLI entry point.
//!
//! Loads configuration, seeds an in-memory event store, and runs one
//! command against it. State is discarded on exit.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use tribe_core::config::AppConfig;
use tribe_core::config::logging::LoggingConfig;

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            output::print_error(&format!("Failed to load configuration: {e}"));
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = run(cli, config).await {
        tracing::debug!(kind = %e.kind, "Command failed");
        output::print_error(&e.message);
        std::process::exit(1);
    }
}

/// Initialize tracing. `RUST_LOG` takes precedence over the configured level.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

async fn run(cli: Cli, config: AppConfig) -> tribe_core::AppResult<()> {
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting tribe-events");
    let ctx = commands::Context::build(&config, cli.seed.as_deref())?;
    cli.execute(&ctx).await
}
