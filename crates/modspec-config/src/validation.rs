//! Task validation.
//!
//! The analysis pipeline runs whatever it is given; sampling preconditions
//! (positive rate and duration, a non-empty buffer, the Nyquist margin) are
//! checked here, before a task reaches the pipeline.
//!
//! # Example
//!
//! ```rust
//! use modspec_config::{get_factory_task, validate_task};
//!
//! let task = get_factory_task("baseline").unwrap();
//! validate_task(&task).expect("factory tasks are valid");
//! ```

use crate::task::TaskConfig;
use thiserror::Error;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A quantity that must be strictly positive is not.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The value found.
        value: f64,
    },

    /// Sample rate and duration produce zero samples.
    #[error("{sample_rate} Hz over {duration} s yields no samples")]
    EmptySampleBuffer {
        /// Sampling frequency in Hz.
        sample_rate: f64,
        /// Duration in seconds.
        duration: f64,
    },

    /// Sample rate does not exceed twice the highest signal frequency.
    #[error("sample rate {sample_rate} Hz must exceed twice the highest component ({highest_freq} Hz)")]
    NyquistViolation {
        /// Sampling frequency in Hz.
        sample_rate: f64,
        /// Highest frequency in the signal (`fc + fm`).
        highest_freq: f64,
    },

    /// Modulation index is negative or not finite.
    #[error("modulation index must be a non-negative number, got {0}")]
    InvalidModulationIndex(f64),

    /// No peaks requested.
    #[error("peak count must be at least 1")]
    ZeroPeakCount,

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a task, reporting every problem found.
///
/// Returns the single error directly when there is only one, and
/// [`ValidationError::Multiple`] otherwise.
pub fn validate_task(task: &TaskConfig) -> ValidationResult<()> {
    let mut errors = Vec::new();
    let signal = &task.signal;
    let sampling = &task.sampling;

    for (field, value) in [
        ("carrier frequency", signal.carrier_freq),
        ("modulating frequency", signal.modulating_freq),
        ("sample rate", sampling.sample_rate),
        ("duration", sampling.duration),
    ] {
        if let Err(e) = check_positive(field, value) {
            errors.push(e);
        }
    }

    if !signal.modulation_index.is_finite() || signal.modulation_index < 0.0 {
        errors.push(ValidationError::InvalidModulationIndex(
            signal.modulation_index,
        ));
    }

    if task.analysis.peak_count == 0 {
        errors.push(ValidationError::ZeroPeakCount);
    }

    let rate_ok = check_positive("sample rate", sampling.sample_rate).is_ok();
    let duration_ok = check_positive("duration", sampling.duration).is_ok();
    if rate_ok && duration_ok && task.parameters().sample_count() == 0 {
        errors.push(ValidationError::EmptySampleBuffer {
            sample_rate: sampling.sample_rate,
            duration: sampling.duration,
        });
    }

    if rate_ok
        && let Err(e) = check_nyquist(sampling.sample_rate, signal.highest_frequency())
    {
        errors.push(e);
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

/// Check that `sample_rate > 2 * highest_freq`.
pub fn check_nyquist(sample_rate: f64, highest_freq: f64) -> ValidationResult<()> {
    if sample_rate > 2.0 * highest_freq {
        Ok(())
    } else {
        Err(ValidationError::NyquistViolation {
            sample_rate,
            highest_freq,
        })
    }
}

fn check_positive(field: &'static str, value: f64) -> ValidationResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositive { field, value })
    }
}
