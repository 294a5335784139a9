//! Task file format and operations.

use modspec_analysis::{
    AmSignal, AnalysisParameters, AnalysisPipeline, DirectDft, FastDft, SpectrumTransform,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::validation::{ValidationResult, validate_task};

/// Which spectrum transform a task runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    /// Direct O(N^2) summation.
    #[default]
    Direct,
    /// rustfft-backed fast transform.
    Fast,
}

impl TransformKind {
    /// Build the transform this kind names.
    pub fn build(self) -> Box<dyn SpectrumTransform> {
        match self {
            TransformKind::Direct => Box::new(DirectDft),
            TransformKind::Fast => Box::new(FastDft),
        }
    }
}

/// `[sampling]` table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SamplingConfig {
    /// Sampling frequency in Hz (defaults to 100).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: f64,

    /// Duration in seconds (defaults to 4).
    #[serde(default = "default_duration")]
    pub duration: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            duration: default_duration(),
        }
    }
}

/// `[analysis]` table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AnalysisSection {
    /// Number of peaks to extract (defaults to 3).
    #[serde(default = "default_peak_count")]
    pub peak_count: usize,

    /// Points in the continuous-model display signal (defaults to 2000).
    #[serde(default = "default_continuous_points")]
    pub continuous_points: usize,

    /// Spectrum transform (defaults to `direct`).
    #[serde(default)]
    pub transform: TransformKind,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            peak_count: default_peak_count(),
            continuous_points: default_continuous_points(),
            transform: TransformKind::Direct,
        }
    }
}

fn default_sample_rate() -> f64 {
    100.0
}

fn default_duration() -> f64 {
    4.0
}

fn default_peak_count() -> usize {
    modspec_analysis::pipeline::DEFAULT_PEAK_COUNT
}

fn default_continuous_points() -> usize {
    modspec_analysis::pipeline::DEFAULT_CONTINUOUS_POINTS
}

/// A named analysis task.
///
/// Tasks are stored as TOML files. Only `name` and `[signal]` are
/// required; everything else falls back to the defaults above.
///
/// # TOML Format
///
/// ```toml
/// name = "baseline"
/// description = "0.5 Hz tone modulating an 8 Hz carrier"
///
/// [signal]
/// modulating_freq = 0.5
/// carrier_freq = 8.0
/// modulation_index = 0.5
///
/// [sampling]
/// sample_rate = 100.0
/// duration = 4.0
///
/// [analysis]
/// peak_count = 3
/// continuous_points = 2000
/// transform = "direct"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskConfig {
    /// Name of the task.
    pub name: String,

    /// Optional description of the task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Signal under analysis.
    pub signal: AmSignal,

    /// Sampling settings.
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Analysis settings.
    #[serde(default)]
    pub analysis: AnalysisSection,
}

impl TaskConfig {
    /// Create a task with default sampling and analysis settings.
    pub fn new(name: impl Into<String>, signal: AmSignal) -> Self {
        Self {
            name: name.into(),
            description: None,
            signal,
            sampling: SamplingConfig::default(),
            analysis: AnalysisSection::default(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sampling frequency.
    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sampling.sample_rate = sample_rate;
        self
    }

    /// Set the duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.sampling.duration = duration;
        self
    }

    /// Set the number of peaks to extract.
    pub fn with_peak_count(mut self, peak_count: usize) -> Self {
        self.analysis.peak_count = peak_count;
        self
    }

    /// Set the transform.
    pub fn with_transform(mut self, transform: TransformKind) -> Self {
        self.analysis.transform = transform;
        self
    }

    /// Load a task from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let task: TaskConfig = toml::from_str(&content)?;
        Ok(task)
    }

    /// Load a task from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the task to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the task to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check sampling preconditions. See [`validate_task`].
    pub fn validate(&self) -> ValidationResult<()> {
        validate_task(self)
    }

    /// Analysis parameters for this task.
    pub fn parameters(&self) -> AnalysisParameters {
        AnalysisParameters::new(self.signal, self.sampling.sample_rate, self.sampling.duration)
            .with_peak_count(self.analysis.peak_count)
            .with_continuous_points(self.analysis.continuous_points)
    }

    /// Pipeline configured with this task's parameters and transform.
    pub fn pipeline(&self) -> AnalysisPipeline {
        AnalysisPipeline::new(self.parameters()).with_boxed_transform(self.analysis.transform.build())
    }
}
