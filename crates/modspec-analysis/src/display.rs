//! Display sinks for signals and spectra.
//!
//! The pipeline hands each stage's arrays to a [`SignalDisplay`] and never
//! reads anything back. Plotting front-ends implement this trait; the crate
//! ships a no-op sink, a tracing summary sink, and a CSV exporter
//! ([`crate::export::CsvExporter`]).

use std::io;

/// Consumer of the arrays produced by an analysis run.
pub trait SignalDisplay {
    /// Show a densely evaluated, continuous-model signal.
    fn display_continuous(
        &mut self,
        time: &[f64],
        amplitude: &[f64],
        title: &str,
        x_label: &str,
        y_label: &str,
    ) -> io::Result<()>;

    /// Show a sampled signal as discrete points.
    fn display_discrete(
        &mut self,
        time: &[f64],
        amplitude: &[f64],
        title: &str,
        x_label: &str,
        y_label: &str,
    ) -> io::Result<()>;

    /// Show a magnitude spectrum.
    ///
    /// Receives the full N-bin arrays; sinks show only the first N/2 bins
    /// (see [`positive_bins`]).
    fn display_spectrum(
        &mut self,
        frequencies: &[f64],
        magnitudes: &[f64],
        title: &str,
        sample_count: usize,
        sample_rate: f64,
    ) -> io::Result<()>;
}

/// Number of spectrum bins a sink should show: the first `sample_count / 2`,
/// clamped to the data actually supplied.
pub fn positive_bins(frequencies: &[f64], magnitudes: &[f64], sample_count: usize) -> usize {
    (sample_count / 2).min(frequencies.len()).min(magnitudes.len())
}

/// Display-only bin spacing `fs / N`.
pub fn display_resolution(sample_count: usize, sample_rate: f64) -> f64 {
    if sample_count == 0 {
        0.0
    } else {
        sample_rate / sample_count as f64
    }
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl SignalDisplay for NullDisplay {
    fn display_continuous(&mut self, _: &[f64], _: &[f64], _: &str, _: &str, _: &str) -> io::Result<()> {
        Ok(())
    }

    fn display_discrete(&mut self, _: &[f64], _: &[f64], _: &str, _: &str, _: &str) -> io::Result<()> {
        Ok(())
    }

    fn display_spectrum(&mut self, _: &[f64], _: &[f64], _: &str, _: usize, _: f64) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that logs a one-line summary of each plot through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDisplay;

impl LogDisplay {
    fn log_series(kind: &str, time: &[f64], amplitude: &[f64], title: &str) {
        let (min, max) = amplitude
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &a| {
                (lo.min(a), hi.max(a))
            });
        let span = time.last().copied().unwrap_or(0.0);
        tracing::info!(
            kind,
            title,
            points = amplitude.len(),
            span_s = span,
            min,
            max,
            "signal"
        );
    }
}

impl SignalDisplay for LogDisplay {
    fn display_continuous(
        &mut self,
        time: &[f64],
        amplitude: &[f64],
        title: &str,
        _x_label: &str,
        _y_label: &str,
    ) -> io::Result<()> {
        Self::log_series("continuous", time, amplitude, title);
        Ok(())
    }

    fn display_discrete(
        &mut self,
        time: &[f64],
        amplitude: &[f64],
        title: &str,
        _x_label: &str,
        _y_label: &str,
    ) -> io::Result<()> {
        Self::log_series("discrete", time, amplitude, title);
        Ok(())
    }

    fn display_spectrum(
        &mut self,
        frequencies: &[f64],
        magnitudes: &[f64],
        title: &str,
        sample_count: usize,
        sample_rate: f64,
    ) -> io::Result<()> {
        let half = positive_bins(frequencies, magnitudes, sample_count);
        let (peak_bin, peak_mag) = magnitudes[..half]
            .iter()
            .copied()
            .enumerate()
            .fold((0, 0.0f64), |best, (i, m)| if m > best.1 { (i, m) } else { best });
        let peak_freq = frequencies.get(peak_bin).copied().unwrap_or(0.0);

        tracing::info!(
            title,
            bins = half,
            resolution_hz = display_resolution(sample_count, sample_rate),
            peak_hz = peak_freq,
            peak_magnitude = peak_mag,
            y_limit = peak_mag * 1.1,
            "spectrum"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_bins_clamped() {
        let f = [0.0, 1.0, 2.0, 3.0];
        let m = [1.0, 1.0, 1.0, 1.0];
        assert_eq!(positive_bins(&f, &m, 4), 2);
        assert_eq!(positive_bins(&f, &m, 5), 2);
        assert_eq!(positive_bins(&f, &m, 100), 4);
        assert_eq!(positive_bins(&f, &m[..1], 4), 1);
    }

    #[test]
    fn test_display_resolution() {
        assert_eq!(display_resolution(400, 100.0), 0.25);
        assert_eq!(display_resolution(0, 100.0), 0.0);
    }

    #[test]
    fn test_log_display_accepts_all_stages() {
        let mut sink = LogDisplay;
        let t = [0.0, 0.5, 1.0];
        let a = [0.0, 1.0, -1.0];
        sink.display_continuous(&t, &a, "x(t)", "t", "a").unwrap();
        sink.display_discrete(&t, &a, "x[n]", "t", "a").unwrap();
        sink.display_spectrum(&t, &a, "X", 3, 3.0).unwrap();
        sink.display_spectrum(&[], &[], "empty", 0, 3.0).unwrap();
    }
}
