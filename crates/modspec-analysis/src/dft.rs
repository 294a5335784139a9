//! Discrete Fourier Transform by direct summation
//!
//! The default transform evaluates
//!
//! ```text
//! X[k] = sum_{n=0}^{N-1} x[n] * exp(-2*pi*i*k*n/N)
//! ```
//!
//! bin by bin, costing O(N^2) time. Reported values are meant to show the
//! summation definition at work, so the pipeline only uses the FFT when a
//! caller asks for [`FastDft`] explicitly.

use crate::error::{AnalysisError, Result};
use rustfft::FftPlanner;
use rustfft::num_complex::Complex64;
use std::f64::consts::PI;

/// A transform from real samples to complex frequency-domain coefficients.
///
/// Implementations return exactly `samples.len()` coefficients and reject
/// empty input with [`AnalysisError::InvalidInput`].
pub trait SpectrumTransform {
    /// Compute the full N-bin spectrum of `samples`.
    fn transform(&self, samples: &[f64]) -> Result<Vec<Complex64>>;

    /// Short name used in reports and logs.
    fn name(&self) -> &'static str;
}

/// Direct O(N^2) DFT. The default transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectDft;

impl SpectrumTransform for DirectDft {
    fn transform(&self, samples: &[f64]) -> Result<Vec<Complex64>> {
        dft(samples)
    }

    fn name(&self) -> &'static str {
        "direct"
    }
}

/// FFT-backed transform (rustfft). Opt-in only.
///
/// Produces the same coefficients as [`DirectDft`] up to rounding, in
/// O(N log N) time for any N.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FastDft;

impl SpectrumTransform for FastDft {
    fn transform(&self, samples: &[f64]) -> Result<Vec<Complex64>> {
        ensure_non_empty(samples.len())?;

        let mut buffer: Vec<Complex64> = samples
            .iter()
            .map(|&x| Complex64::new(x, 0.0))
            .collect();

        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(buffer.len());
        fft.process(&mut buffer);

        Ok(buffer)
    }

    fn name(&self) -> &'static str {
        "fast"
    }
}

/// Forward DFT of a real sequence by direct summation.
///
/// A single sample yields a one-bin spectrum equal to that sample.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] if `samples` is empty.
pub fn dft(samples: &[f64]) -> Result<Vec<Complex64>> {
    let complex: Vec<Complex64> = samples.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    dft_complex(&complex)
}

/// Forward DFT of a complex sequence by direct summation.
pub fn dft_complex(samples: &[Complex64]) -> Result<Vec<Complex64>> {
    ensure_non_empty(samples.len())?;
    Ok(direct_sum(samples, -1.0))
}

/// Inverse DFT: `x[n] = (1/N) * sum_k X[k] * exp(+2*pi*i*k*n/N)`.
pub fn idft(spectrum: &[Complex64]) -> Result<Vec<Complex64>> {
    ensure_non_empty(spectrum.len())?;

    let scale = 1.0 / spectrum.len() as f64;
    Ok(direct_sum(spectrum, 1.0)
        .into_iter()
        .map(|c| c * scale)
        .collect())
}

/// Inverse DFT keeping only the real part of each reconstructed sample.
pub fn idft_real(spectrum: &[Complex64]) -> Result<Vec<f64>> {
    Ok(idft(spectrum)?.into_iter().map(|c| c.re).collect())
}

/// Double summation shared by the forward (`sign = -1`) and inverse
/// (`sign = +1`) transforms. Caller guarantees a non-empty input.
fn direct_sum(input: &[Complex64], sign: f64) -> Vec<Complex64> {
    let n = input.len();
    let len = n as f64;
    let mut output = Vec::with_capacity(n);

    for k in 0..n {
        let mut sum = Complex64::new(0.0, 0.0);
        for (i, &x) in input.iter().enumerate() {
            let angle = sign * 2.0 * PI * k as f64 * i as f64 / len;
            sum += x * Complex64::cis(angle);
        }
        output.push(sum);
    }

    output
}

fn ensure_non_empty(len: usize) -> Result<()> {
    if len == 0 {
        return Err(AnalysisError::invalid_input(
            "cannot transform an empty sample buffer",
        ));
    }
    Ok(())
}
