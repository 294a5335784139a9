//! Task configuration commands.

use clap::{Args, Subcommand};
use modspec_config::TaskConfig;
use std::path::PathBuf;

use super::common::resolve_task;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print a task as TOML
    Show {
        /// Task name or path
        #[arg(default_value = "baseline")]
        task: String,
    },

    /// Load and validate a task file
    Validate {
        /// Task file
        path: PathBuf,
    },
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show { task } => show(&task),
        ConfigCommand::Validate { path } => validate(&path),
    }
}

fn show(name: &str) -> anyhow::Result<()> {
    let task = resolve_task(name, None)?;
    let toml = task.to_toml().map_err(|e| anyhow::anyhow!("{}", e))?;
    print!("{toml}");
    Ok(())
}

fn validate(path: &std::path::Path) -> anyhow::Result<()> {
    let task = TaskConfig::load(path).map_err(|e| anyhow::anyhow!("{}", e))?;
    task.validate()
        .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;

    let params = task.parameters();
    println!(
        "{}: OK ({} samples, df = {:.4} Hz)",
        path.display(),
        params.sample_count(),
        params.frequency_resolution()
    );
    Ok(())
}
