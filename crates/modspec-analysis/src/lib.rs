//! Modspec Analysis - Direct DFT spectral analysis of AM test signals
//!
//! This crate synthesizes an amplitude-modulated sinusoid, evaluates its
//! spectrum by direct summation, and picks out the dominant spectral lines:
//!
//! - [`signal`] - AM signal synthesis and theoretical spectral components
//! - [`dft`] - Direct DFT (the default) and an opt-in rustfft-backed transform
//! - [`spectrum`] - Normalized magnitude spectrum and frequency axis
//! - [`peaks`] - Peak extraction with an exclusion radius
//! - [`pipeline`] - End-to-end analysis and comparison against theory
//! - [`display`] - Display sinks the pipeline hands its arrays to
//! - [`export`] - CSV export sink
//! - [`report`] - Console report table
//!
//! ## Example Workflow
//!
//! ```rust
//! use modspec_analysis::{AmSignal, AnalysisParameters, AnalysisPipeline, NullDisplay};
//!
//! let params = AnalysisParameters::new(AmSignal::new(0.5, 8.0, 0.5), 100.0, 4.0);
//! let report = AnalysisPipeline::new(params)
//!     .run(&mut NullDisplay)
//!     .unwrap();
//!
//! assert_eq!(report.sample_count, 400);
//! assert_eq!(report.peaks.len(), 3);
//! println!("{report}");
//! ```
//!
//! ## Transform Only
//!
//! ```rust
//! use modspec_analysis::dft::{dft, idft_real};
//!
//! let samples = [1.0, 0.0, -1.0, 0.0];
//! let spectrum = dft(&samples).unwrap();
//! let restored = idft_real(&spectrum).unwrap();
//! assert!((restored[2] + 1.0).abs() < 1e-12);
//! ```

pub mod dft;
pub mod display;
pub mod error;
pub mod export;
pub mod peaks;
pub mod pipeline;
pub mod report;
pub mod signal;
pub mod spectrum;

pub use rustfft::num_complex::Complex64;

// Re-export main types
pub use dft::{DirectDft, FastDft, SpectrumTransform, dft, dft_complex, idft, idft_real};
pub use display::{LogDisplay, NullDisplay, SignalDisplay};
pub use error::{AnalysisError, Result};
pub use export::CsvExporter;
pub use peaks::{Peak, extract_peaks};
pub use pipeline::{AnalysisParameters, AnalysisPipeline, AnalysisReport, ComponentComparison};
pub use signal::{AmSignal, SampledSignal, SpectralComponent};
pub use spectrum::MagnitudeSpectrum;
