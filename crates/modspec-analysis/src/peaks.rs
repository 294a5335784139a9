//! Spectral peak extraction with an exclusion radius.
//!
//! Bins are ranked by magnitude and accepted greedily. A candidate closer
//! than two bin widths to an already-accepted peak is treated as leakage
//! from that peak and skipped, so each true spectral line is reported once.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// A spectral peak: frequency in Hz and normalized magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Normalized magnitude `|X[k]| / N`.
    pub magnitude: f64,
}

impl Peak {
    /// Relative amplitude of the sinusoid behind this peak.
    ///
    /// A sinusoid of amplitude A produces a normalized line of A/2 on each
    /// side of the spectrum, so this is `2 * magnitude`.
    pub fn amplitude(&self) -> f64 {
        2.0 * self.magnitude
    }
}

/// Find the `count` strongest, mutually separated peaks.
///
/// The frequency resolution used for the exclusion radius is
/// `frequencies[1] - frequencies[0]`, so `frequencies` must be uniformly
/// spaced and ascending. Non-uniform axes are not detected.
///
/// Ranking uses a stable sort by descending magnitude: among equal
/// magnitudes the lowest index is considered first. A candidate is
/// rejected when it lies strictly closer than `2 * resolution` to an
/// accepted peak.
///
/// The result is sorted by ascending frequency and holds at most `count`
/// peaks. `count == 0` yields an empty list.
///
/// # Errors
///
/// - [`AnalysisError::LengthMismatch`] if the two slices differ in length
/// - [`AnalysisError::InvalidInput`] if fewer than two bins are given
pub fn extract_peaks(magnitudes: &[f64], frequencies: &[f64], count: usize) -> Result<Vec<Peak>> {
    if magnitudes.len() != frequencies.len() {
        return Err(AnalysisError::LengthMismatch {
            magnitudes: magnitudes.len(),
            frequencies: frequencies.len(),
        });
    }
    if magnitudes.len() < 2 {
        return Err(AnalysisError::invalid_input(format!(
            "peak extraction needs at least 2 bins, got {}",
            magnitudes.len()
        )));
    }

    let resolution = frequencies[1] - frequencies[0];
    let exclusion = 2.0 * resolution;

    let mut ranked: Vec<usize> = (0..magnitudes.len()).collect();
    ranked.sort_by(|&a, &b| magnitudes[b].total_cmp(&magnitudes[a]));

    let mut peaks: Vec<Peak> = Vec::with_capacity(count.min(magnitudes.len()));
    for index in ranked {
        if peaks.len() == count {
            break;
        }

        let frequency = frequencies[index];
        let is_close = peaks
            .iter()
            .any(|p| (frequency - p.frequency).abs() < exclusion);

        if !is_close {
            peaks.push(Peak {
                frequency,
                magnitude: magnitudes[index],
            });
        }
    }

    peaks.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));
    Ok(peaks)
}
