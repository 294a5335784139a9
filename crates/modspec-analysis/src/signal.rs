//! Amplitude-modulated test signal synthesis.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Amplitude-modulated sinusoid
/// `x(t) = (1 + m*cos(2*pi*fm*t)) * sin(2*pi*fc*t)`.
///
/// Expanding the product gives three spectral lines: the carrier at `fc`
/// with amplitude 1 and two sidebands at `fc - fm` and `fc + fm` with
/// amplitude `m/2` each. The sideband layout assumes `fc > fm`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmSignal {
    /// Modulating frequency `fm` in Hz.
    pub modulating_freq: f64,
    /// Carrier frequency `fc` in Hz.
    pub carrier_freq: f64,
    /// Modulation index `m`.
    pub modulation_index: f64,
}

/// A theoretical spectral line: frequency in Hz and relative amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralComponent {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Amplitude of the sinusoid at this frequency.
    pub amplitude: f64,
}

/// A signal evaluated on a time axis; `time` and `samples` are paired by index.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledSignal {
    /// Time of each sample in seconds.
    pub time: Vec<f64>,
    /// Signal value at each time.
    pub samples: Vec<f64>,
}

impl SampledSignal {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl AmSignal {
    /// Create an AM signal from modulating frequency, carrier frequency and
    /// modulation index.
    pub fn new(modulating_freq: f64, carrier_freq: f64, modulation_index: f64) -> Self {
        Self {
            modulating_freq,
            carrier_freq,
            modulation_index,
        }
    }

    /// Evaluate the signal at time `t` seconds.
    pub fn value_at(&self, t: f64) -> f64 {
        let envelope = 1.0 + self.modulation_index * (2.0 * PI * self.modulating_freq * t).cos();
        envelope * (2.0 * PI * self.carrier_freq * t).sin()
    }

    /// Highest frequency present in the signal (`fc + fm`).
    pub fn highest_frequency(&self) -> f64 {
        self.carrier_freq + self.modulating_freq
    }

    /// Sample `count` points at `sample_rate`: `t[n] = n / fs`.
    pub fn sample(&self, sample_rate: f64, count: usize) -> SampledSignal {
        let time: Vec<f64> = (0..count).map(|n| n as f64 / sample_rate).collect();
        self.evaluate(time)
    }

    /// Evaluate `points` evenly spaced times over `[0, duration]`, both ends
    /// included. Used for the continuous-model display.
    pub fn continuous(&self, duration: f64, points: usize) -> SampledSignal {
        let time: Vec<f64> = match points {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => {
                let step = duration / (points - 1) as f64;
                (0..points).map(|i| i as f64 * step).collect()
            }
        };
        self.evaluate(time)
    }

    /// Theoretical spectral lines in ascending frequency:
    /// `[(fc - fm, m/2), (fc, 1), (fc + fm, m/2)]`.
    pub fn components(&self) -> [SpectralComponent; 3] {
        let sideband = self.modulation_index / 2.0;
        [
            SpectralComponent {
                frequency: self.carrier_freq - self.modulating_freq,
                amplitude: sideband,
            },
            SpectralComponent {
                frequency: self.carrier_freq,
                amplitude: 1.0,
            },
            SpectralComponent {
                frequency: self.carrier_freq + self.modulating_freq,
                amplitude: sideband,
            },
        ]
    }

    fn evaluate(&self, time: Vec<f64>) -> SampledSignal {
        let samples = time.iter().map(|&t| self.value_at(t)).collect();
        SampledSignal { time, samples }
    }
}
