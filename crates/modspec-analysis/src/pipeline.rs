//! End-to-end analysis: synthesize, transform, extract peaks, compare.
//!
//! ```text
//! AmSignal --sample--> x[n] --transform--> X[k] --|X|/N--> magnitudes
//!                                                   |
//!                         theory <--compare-- peaks <-- first N/2 bins
//! ```
//!
//! Each stage consumes a fully materialized buffer from the previous one.
//! Nothing is checked against the Nyquist margin while running; call
//! [`AnalysisParameters::validate`] first if the parameters are untrusted.

use crate::dft::{DirectDft, SpectrumTransform};
use crate::display::SignalDisplay;
use crate::error::{AnalysisError, Result};
use crate::peaks::{Peak, extract_peaks};
use crate::signal::{AmSignal, SpectralComponent};
use crate::spectrum::MagnitudeSpectrum;
use serde::Serialize;

/// Default number of peaks to extract: carrier plus two sidebands.
pub const DEFAULT_PEAK_COUNT: usize = 3;

/// Default number of points in the continuous-model display signal.
pub const DEFAULT_CONTINUOUS_POINTS: usize = 2000;

/// Largest sample buffer (and continuous-model buffer) a run will allocate.
pub const MAX_SAMPLE_COUNT: usize = 1 << 24;

/// Immutable parameters of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisParameters {
    /// Signal under analysis.
    pub signal: AmSignal,
    /// Sampling frequency `fs` in Hz.
    pub sample_rate: f64,
    /// Total duration `T` in seconds.
    pub duration: f64,
    /// Number of peaks to extract.
    pub peak_count: usize,
    /// Points in the continuous-model signal handed to the display.
    pub continuous_points: usize,
}

impl AnalysisParameters {
    /// Create parameters with the default peak count and continuous
    /// resolution.
    pub fn new(signal: AmSignal, sample_rate: f64, duration: f64) -> Self {
        Self {
            signal,
            sample_rate,
            duration,
            peak_count: DEFAULT_PEAK_COUNT,
            continuous_points: DEFAULT_CONTINUOUS_POINTS,
        }
    }

    /// Set the number of peaks to extract.
    pub fn with_peak_count(mut self, peak_count: usize) -> Self {
        self.peak_count = peak_count;
        self
    }

    /// Set the number of continuous-model points.
    pub fn with_continuous_points(mut self, points: usize) -> Self {
        self.continuous_points = points;
        self
    }

    /// Sample count `N = floor(fs * T)`. Non-finite or negative products
    /// saturate to 0.
    pub fn sample_count(&self) -> usize {
        (self.sample_rate * self.duration) as usize
    }

    /// Reject parameters whose buffers cannot be materialized: a
    /// non-finite `fs * T`, or more than [`MAX_SAMPLE_COUNT`] sampled or
    /// continuous-model points.
    pub fn check_buffer_sizes(&self) -> Result<()> {
        let product = self.sample_rate * self.duration;
        if !product.is_finite() || product > MAX_SAMPLE_COUNT as f64 {
            return Err(AnalysisError::configuration(format!(
                "{} Hz over {} s exceeds the {} sample limit",
                self.sample_rate, self.duration, MAX_SAMPLE_COUNT
            )));
        }
        if self.continuous_points > MAX_SAMPLE_COUNT {
            return Err(AnalysisError::configuration(format!(
                "{} continuous points exceeds the {} point limit",
                self.continuous_points, MAX_SAMPLE_COUNT
            )));
        }
        Ok(())
    }

    /// Frequency resolution `fs / N` in Hz.
    pub fn frequency_resolution(&self) -> f64 {
        self.sample_rate / self.sample_count() as f64
    }

    /// Check the parameters against the sampling preconditions: positive
    /// rate and duration, at least one sample, and
    /// `fs > 2 * (fc + fm)`.
    ///
    /// [`AnalysisPipeline::run`] does not call this.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate.is_nan() || self.sample_rate <= 0.0 {
            return Err(AnalysisError::configuration(format!(
                "sample rate must be positive, got {}",
                self.sample_rate
            )));
        }
        if self.duration.is_nan() || self.duration <= 0.0 {
            return Err(AnalysisError::configuration(format!(
                "duration must be positive, got {}",
                self.duration
            )));
        }
        self.check_buffer_sizes()?;
        if self.sample_count() == 0 {
            return Err(AnalysisError::configuration(format!(
                "{} Hz over {} s yields no samples",
                self.sample_rate, self.duration
            )));
        }
        let nyquist_rate = 2.0 * self.signal.highest_frequency();
        if self.sample_rate <= nyquist_rate {
            return Err(AnalysisError::configuration(format!(
                "sample rate {} Hz must exceed {} Hz (twice the highest component)",
                self.sample_rate, nyquist_rate
            )));
        }
        Ok(())
    }
}

/// One extracted peak paired with the theoretical component at the same
/// position in ascending-frequency order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentComparison {
    /// Expected frequency in Hz.
    pub theoretical_frequency: f64,
    /// Expected relative amplitude.
    pub theoretical_amplitude: f64,
    /// Frequency of the extracted peak in Hz.
    pub estimated_frequency: f64,
    /// Relative amplitude of the extracted peak (`2 * magnitude`).
    pub estimated_amplitude: f64,
}

impl ComponentComparison {
    /// Pair a peak with a theoretical component.
    pub fn new(theory: SpectralComponent, peak: Peak) -> Self {
        Self {
            theoretical_frequency: theory.frequency,
            theoretical_amplitude: theory.amplitude,
            estimated_frequency: peak.frequency,
            estimated_amplitude: peak.amplitude(),
        }
    }

    /// `|estimated - theoretical|` frequency error in Hz.
    pub fn frequency_error(&self) -> f64 {
        (self.estimated_frequency - self.theoretical_frequency).abs()
    }

    /// Amplitude error relative to the theoretical amplitude.
    pub fn relative_amplitude_error(&self) -> f64 {
        if self.theoretical_amplitude == 0.0 {
            self.estimated_amplitude.abs()
        } else {
            ((self.estimated_amplitude - self.theoretical_amplitude) / self.theoretical_amplitude)
                .abs()
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Parameters the run used.
    pub parameters: AnalysisParameters,
    /// Number of samples N.
    pub sample_count: usize,
    /// Frequency resolution in Hz.
    pub resolution: f64,
    /// Name of the transform that produced the spectrum.
    pub transform: &'static str,
    /// Extracted peaks in ascending frequency.
    pub peaks: Vec<Peak>,
    /// Peak-vs-theory rows; one per peak that has a theoretical counterpart.
    pub comparisons: Vec<ComponentComparison>,
}

/// Analysis pipeline over a configurable spectrum transform.
pub struct AnalysisPipeline {
    params: AnalysisParameters,
    transform: Box<dyn SpectrumTransform>,
}

impl AnalysisPipeline {
    /// Pipeline using the direct DFT.
    pub fn new(params: AnalysisParameters) -> Self {
        Self {
            params,
            transform: Box::new(DirectDft),
        }
    }

    /// Replace the spectrum transform.
    pub fn with_transform(mut self, transform: impl SpectrumTransform + 'static) -> Self {
        self.transform = Box::new(transform);
        self
    }

    /// Replace the spectrum transform with an already boxed one.
    pub fn with_boxed_transform(mut self, transform: Box<dyn SpectrumTransform>) -> Self {
        self.transform = transform;
        self
    }

    /// Run synthesis, transform, peak extraction and comparison, feeding
    /// each intermediate result to `display`.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::InvalidInput`] if the parameters yield no samples
    ///   or fewer than four (peak extraction needs two positive bins)
    /// - [`AnalysisError::Configuration`] if the buffers would exceed
    ///   [`MAX_SAMPLE_COUNT`] or `fs * T` is not finite
    /// - [`AnalysisError::Display`] if the sink fails
    pub fn run(&self, display: &mut dyn SignalDisplay) -> Result<AnalysisReport> {
        let params = &self.params;
        params.check_buffer_sizes()?;
        let signal = params.signal;
        let sample_rate = params.sample_rate;
        let n = params.sample_count();

        tracing::debug!(
            sample_rate,
            sample_count = n,
            duration = params.duration,
            transform = self.transform.name(),
            "starting analysis"
        );

        let continuous = signal.continuous(params.duration, params.continuous_points);
        display.display_continuous(
            &continuous.time,
            &continuous.samples,
            "Original continuous signal x(t)",
            "Time (s)",
            "Amplitude",
        )?;

        let sampled = signal.sample(sample_rate, n);
        display.display_discrete(
            &sampled.time,
            &sampled.samples,
            "Sampled signal x[n]",
            "Time (s)",
            "Amplitude",
        )?;

        let coefficients = self.transform.transform(&sampled.samples)?;
        tracing::debug!(bins = coefficients.len(), "transform complete");

        let spectrum = MagnitudeSpectrum::from_coefficients(&coefficients, sample_rate)?;
        display.display_spectrum(
            &spectrum.frequencies,
            &spectrum.magnitudes,
            "Frequency spectrum (DFT)",
            n,
            sample_rate,
        )?;

        let (magnitudes, frequencies) = spectrum.positive_half();
        let peaks = extract_peaks(magnitudes, frequencies, params.peak_count)?;
        tracing::debug!(found = peaks.len(), requested = params.peak_count, "peaks extracted");

        let comparisons = signal
            .components()
            .into_iter()
            .zip(peaks.iter())
            .map(|(theory, &peak)| ComponentComparison::new(theory, peak))
            .collect();

        Ok(AnalysisReport {
            parameters: *params,
            sample_count: n,
            resolution: spectrum.resolution(),
            transform: self.transform.name(),
            peaks,
            comparisons,
        })
    }
}
