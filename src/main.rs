//! Entry point: set up logging, parse the CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use netball_stats::{cli::NetballStats, commands};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = NetballStats::parse();
    init_logging(app.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(app, &mut out).context("netball-stats command failed")?;

    Ok(())
}
