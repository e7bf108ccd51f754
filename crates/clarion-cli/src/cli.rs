use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the Clarion CLI
#[derive(Parser, Debug)]
#[command(name = "clarion")]
#[command(version, about = "Check a request for clarity, domain and risk before acting on it", long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file [default: ~/.clarion/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a request and print the optimized prompt
    Analyze(AnalyzeArgs),

    /// Show the effective configuration
    Config {
        /// Print the full configuration as TOML
        #[arg(long)]
        full: bool,
    },
}

/// Arguments for `clarion analyze`
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// The request text, or `-` to read it from stdin
    pub text: String,

    /// Caller context carried into the record untouched
    #[arg(long)]
    pub context: Option<String>,

    /// Print the analysis record as JSON
    #[arg(long)]
    pub json: bool,

    /// Framework context file (overrides the configured path)
    #[arg(long)]
    pub framework: Option<PathBuf>,

    /// Omit the optimized prompt from text output
    #[arg(long)]
    pub no_prompt: bool,
}
