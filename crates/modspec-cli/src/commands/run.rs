//! Analysis run command.

use clap::Args;
use modspec_analysis::{CsvExporter, LogDisplay, SignalDisplay};
use modspec_config::{TaskConfig, TransformKind};
use std::path::PathBuf;

use super::common::resolve_task;

#[derive(Args)]
pub struct RunArgs {
    /// Task name or path to a task file
    #[arg(value_name = "TASK", default_value = "baseline")]
    task: String,

    /// Load the task from this TOML file instead
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Modulating frequency in Hz
    #[arg(long)]
    fm: Option<f64>,

    /// Carrier frequency in Hz
    #[arg(long)]
    fc: Option<f64>,

    /// Modulation index
    #[arg(long)]
    index: Option<f64>,

    /// Sampling frequency in Hz
    #[arg(long)]
    sample_rate: Option<f64>,

    /// Duration in seconds
    #[arg(long)]
    duration: Option<f64>,

    /// Number of peaks to extract
    #[arg(long)]
    peaks: Option<usize>,

    /// Use the FFT instead of direct summation
    #[arg(long)]
    fast: bool,

    /// Write continuous.csv, discrete.csv and spectrum.csv to DIR
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Write the report as JSON to PATH
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Skip sampling validation (Nyquist margin, positive duration)
    #[arg(long)]
    no_validate: bool,
}

impl RunArgs {
    fn apply_overrides(&self, task: &mut TaskConfig) {
        if let Some(fm) = self.fm {
            task.signal.modulating_freq = fm;
        }
        if let Some(fc) = self.fc {
            task.signal.carrier_freq = fc;
        }
        if let Some(index) = self.index {
            task.signal.modulation_index = index;
        }
        if let Some(sample_rate) = self.sample_rate {
            task.sampling.sample_rate = sample_rate;
        }
        if let Some(duration) = self.duration {
            task.sampling.duration = duration;
        }
        if let Some(peaks) = self.peaks {
            task.analysis.peak_count = peaks;
        }
        if self.fast {
            task.analysis.transform = TransformKind::Fast;
        }
    }
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let mut task = resolve_task(&args.task, args.config.as_deref())?;
    args.apply_overrides(&mut task);

    if args.no_validate {
        tracing::warn!(task = %task.name, "validation skipped");
    } else {
        task.validate()
            .map_err(|e| anyhow::anyhow!("task '{}' is invalid: {}", task.name, e))?;
    }

    tracing::debug!(task = %task.name, "running analysis");

    let mut display: Box<dyn SignalDisplay> = match &args.export {
        Some(dir) => Box::new(CsvExporter::new(dir.clone())),
        None => Box::new(LogDisplay),
    };

    let report = task
        .pipeline()
        .run(display.as_mut())
        .map_err(|e| anyhow::anyhow!("analysis failed: {}", e))?;

    print!("{report}");

    if let Some(dir) = &args.export {
        println!();
        println!("Exported plot data to {}", dir.display());
    }

    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .map_err(|e| anyhow::anyhow!("failed to write {}: {}", path.display(), e))?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
