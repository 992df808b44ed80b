use clap::Parser;
use eyre::Result;

use haven_cli::cli::Cli;
use haven_cli::commands;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Prompts own stdout; diagnostics go to stderr and stay quiet by default.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    commands::run(Cli::parse())
}
