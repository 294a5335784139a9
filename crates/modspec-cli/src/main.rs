//! modspec CLI - spectral analysis of amplitude-modulated signals.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "modspec")]
#[command(author, version, about = "AM signal spectral analysis", long_about = None)]
struct Cli {
    /// Log pipeline stages at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an analysis task
    Run(commands::run::RunArgs),

    /// List factory and user tasks
    Tasks,

    /// Show or validate task configuration
    Config(commands::config::ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Tasks => commands::tasks::run(),
        Commands::Config(args) => commands::config::run(args),
    }
}
