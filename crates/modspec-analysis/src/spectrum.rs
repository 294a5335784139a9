//! Normalized magnitude spectrum and its frequency axis

use crate::error::{AnalysisError, Result};
use rustfft::num_complex::Complex64;

/// Magnitude spectrum paired with its frequency axis.
///
/// `magnitudes[k] = |X[k]| / N` and `frequencies[k] = k * fs / N`. Dividing
/// by N makes a sinusoid of amplitude A show up as a pair of A/2 lines
/// regardless of the buffer length.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeSpectrum {
    /// Normalized magnitude per bin.
    pub magnitudes: Vec<f64>,
    /// Bin frequency in Hz.
    pub frequencies: Vec<f64>,
    /// Sample rate the spectrum was computed at.
    pub sample_rate: f64,
}

impl MagnitudeSpectrum {
    /// Derive the normalized magnitudes and frequency axis from a full
    /// N-bin spectrum.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidInput`] if `coefficients` is empty.
    pub fn from_coefficients(coefficients: &[Complex64], sample_rate: f64) -> Result<Self> {
        let n = coefficients.len();
        if n == 0 {
            return Err(AnalysisError::invalid_input(
                "cannot normalize an empty spectrum",
            ));
        }

        let bin_width = sample_rate / n as f64;
        let magnitudes = coefficients.iter().map(|c| c.norm() / n as f64).collect();
        let frequencies = (0..n).map(|k| k as f64 * bin_width).collect();

        Ok(Self {
            magnitudes,
            frequencies,
            sample_rate,
        })
    }

    /// Number of bins (N).
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// True if the spectrum has no bins.
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Bin spacing `fs / N` in Hz.
    pub fn resolution(&self) -> f64 {
        self.sample_rate / self.len() as f64
    }

    /// First N/2 bins (positive frequencies) as `(magnitudes, frequencies)`.
    pub fn positive_half(&self) -> (&[f64], &[f64]) {
        let half = self.len() / 2;
        (&self.magnitudes[..half], &self.frequencies[..half])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft::dft;
    use std::f64::consts::PI;

    #[test]
    fn test_empty_rejected() {
        assert!(MagnitudeSpectrum::from_coefficients(&[], 100.0).is_err());
    }

    #[test]
    fn test_frequency_axis() {
        let coeffs = vec![Complex64::new(0.0, 0.0); 400];
        let spectrum = MagnitudeSpectrum::from_coefficients(&coeffs, 100.0).unwrap();

        assert_eq!(spectrum.len(), 400);
        assert_eq!(spectrum.resolution(), 0.25);
        assert_eq!(spectrum.frequencies[0], 0.0);
        assert_eq!(spectrum.frequencies[32], 8.0);
        assert_eq!(spectrum.frequencies[399], 99.75);
    }

    #[test]
    fn test_normalized_sine_amplitude() {
        // Amplitude 2 sine on bin 4 of 32 -> normalized magnitude 1.0.
        let n = 32;
        let signal: Vec<f64> = (0..n)
            .map(|i| 2.0 * (2.0 * PI * 4.0 * i as f64 / n as f64).sin())
            .collect();
        let spectrum = MagnitudeSpectrum::from_coefficients(&dft(&signal).unwrap(), n as f64)
            .unwrap();

        assert!((spectrum.magnitudes[4] - 1.0).abs() < 1e-9);
        assert!((spectrum.magnitudes[n - 4] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_positive_half() {
        let coeffs = vec![Complex64::new(1.0, 0.0); 9];
        let spectrum = MagnitudeSpectrum::from_coefficients(&coeffs, 9.0).unwrap();
        let (mags, freqs) = spectrum.positive_half();

        assert_eq!(mags.len(), 4);
        assert_eq!(freqs.len(), 4);
        assert_eq!(freqs[3], 3.0);
    }
}
