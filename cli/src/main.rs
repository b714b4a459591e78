//! repro-random CLI entry point

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use repro_random::RandomConfig;
use repro_random_cli::{cli::Cli, commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_configuration(&cli)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::execute(&cli.command, &config, &mut out)
}

/// Setup logging based on verbosity level
///
/// Logs go to stderr so stdout carries only the generated values.
fn setup_logging(verbose: bool) {
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load configuration from file or use defaults
fn load_configuration(cli: &Cli) -> Result<RandomConfig> {
    if let Some(config_path) = &cli.config {
        info!("Loading configuration from: {}", config_path.display());
        Ok(RandomConfig::load_from_file(config_path)?)
    } else {
        Ok(RandomConfig::default())
    }
}
