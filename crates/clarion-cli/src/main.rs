//! Clarion CLI - analyze a request before acting on it
use anyhow::Result;
use clap::Parser as _;
use clarion_cli::cli::{Cli, Commands};
use clarion_cli::handlers;
use std::io;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the rendered record
    Registry::default()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clarion_core=warn,clarion_cli=warn".into()),
        )
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Analyze(args) => {
            handlers::handle_analyze(&args, cli.config.as_deref(), io::stdin().lock(), &mut out)?;
        }
        Commands::Config { full } => {
            handlers::handle_config(full, cli.config.as_deref(), &mut out)?;
        }
    }

    Ok(())
}
