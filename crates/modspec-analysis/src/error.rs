//! Error types for analysis operations.

use thiserror::Error;

/// Errors that can abort an analysis run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input buffer is empty or too short for the requested operation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Magnitude and frequency sequences passed to peak extraction differ in length.
    #[error("length mismatch: {magnitudes} magnitudes vs {frequencies} frequencies")]
    LengthMismatch {
        /// Length of the magnitude series.
        magnitudes: usize,
        /// Length of the frequency axis.
        frequencies: usize,
    },

    /// Analysis parameters failed explicit validation.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A display sink failed to consume its data.
    #[error("display sink failed: {0}")]
    Display(#[from] std::io::Error),
}

impl AnalysisError {
    /// Create an invalid input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidInput(reason.into())
    }

    /// Create a configuration error.
    pub fn configuration(reason: impl Into<String>) -> Self {
        AnalysisError::Configuration(reason.into())
    }
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn invalid_input_display() {
        let err = AnalysisError::invalid_input("empty sample buffer");
        assert_eq!(err.to_string(), "invalid input: empty sample buffer");
    }

    #[test]
    fn length_mismatch_display() {
        let err = AnalysisError::LengthMismatch {
            magnitudes: 4,
            frequencies: 3,
        };
        assert_eq!(
            err.to_string(),
            "length mismatch: 4 magnitudes vs 3 frequencies"
        );
    }

    #[test]
    fn configuration_display() {
        let err = AnalysisError::configuration("duration must be positive");
        assert_eq!(
            err.to_string(),
            "configuration error: duration must be positive"
        );
    }

    #[test]
    fn display_error_exposes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock");
        let err = AnalysisError::from(io);
        assert!(matches!(err, AnalysisError::Display(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn plain_variants_have_no_source() {
        assert!(AnalysisError::invalid_input("x").source().is_none());
        assert!(AnalysisError::configuration("x").source().is_none());
    }
}
