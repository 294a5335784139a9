//! CSV export of analysis arrays.
//!
//! [`CsvExporter`] is a [`SignalDisplay`] that writes each plot's data to a
//! file in an output directory instead of drawing it, so any plotting tool
//! can pick it up:
//!
//! - `continuous.csv` - `time_s,amplitude`
//! - `discrete.csv` - `n,time_s,amplitude`
//! - `spectrum.csv` - `frequency_hz,magnitude` (positive half only)
//!
//! Every file starts with `#` comment lines carrying the title and axis labels.

use crate::display::{SignalDisplay, display_resolution, positive_bins};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Display sink that writes CSV files into a directory.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl CsvExporter {
    /// Create an exporter writing into `dir`. The directory is created on
    /// first write if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn create(&mut self, name: &str) -> io::Result<BufWriter<File>> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        let file = File::create(&path)?;
        tracing::debug!(path = %path.display(), "writing csv");
        self.written.push(path);
        Ok(BufWriter::new(file))
    }
}

impl SignalDisplay for CsvExporter {
    fn display_continuous(
        &mut self,
        time: &[f64],
        amplitude: &[f64],
        title: &str,
        x_label: &str,
        y_label: &str,
    ) -> io::Result<()> {
        let mut file = self.create("continuous.csv")?;

        writeln!(file, "# {}", title)?;
        writeln!(file, "# x: {}, y: {}", x_label, y_label)?;
        writeln!(file, "time_s,amplitude")?;
        for (t, a) in time.iter().zip(amplitude.iter()) {
            writeln!(file, "{:.6},{:.6}", t, a)?;
        }

        file.flush()
    }

    fn display_discrete(
        &mut self,
        time: &[f64],
        amplitude: &[f64],
        title: &str,
        x_label: &str,
        y_label: &str,
    ) -> io::Result<()> {
        let mut file = self.create("discrete.csv")?;

        writeln!(file, "# {}", title)?;
        writeln!(file, "# x: {}, y: {}", x_label, y_label)?;
        writeln!(file, "n,time_s,amplitude")?;
        for (n, (t, a)) in time.iter().zip(amplitude.iter()).enumerate() {
            writeln!(file, "{},{:.6},{:.6}", n, t, a)?;
        }

        file.flush()
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
        let mut file = self.create("spectrum.csv")?;

        writeln!(
            file,
            "# {} (df = {:.4} Hz)",
            title,
            display_resolution(sample_count, sample_rate)
        )?;
        writeln!(file, "# N = {}, fs = {} Hz", sample_count, sample_rate)?;
        writeln!(file, "frequency_hz,magnitude")?;
        for i in 0..half {
            writeln!(file, "{:.6},{:.6}", frequencies[i], magnitudes[i])?;
        }

        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn data_lines(content: &str) -> Vec<&str> {
        content.lines().filter(|l| !l.starts_with('#')).collect()
    }

    #[test]
    fn test_continuous_csv() {
        let dir = TempDir::new().unwrap();
        let mut exporter = CsvExporter::new(dir.path());

        exporter
            .display_continuous(&[0.0, 0.5], &[0.0, 1.25], "Continuous", "Time (s)", "Amplitude")
            .unwrap();

        let content = std::fs::read_to_string(dir.path().join("continuous.csv")).unwrap();
        assert!(content.starts_with("# Continuous"));
        assert!(content.contains("Time (s)"));
        let lines = data_lines(&content);
        assert_eq!(lines[0], "time_s,amplitude");
        assert_eq!(lines[2], "0.500000,1.250000");
    }

    #[test]
    fn test_discrete_csv_has_index_column() {
        let dir = TempDir::new().unwrap();
        let mut exporter = CsvExporter::new(dir.path());

        exporter
            .display_discrete(&[0.0, 0.01, 0.02], &[0.0, 0.5, 1.0], "Sampled", "t", "x")
            .unwrap();

        let content = std::fs::read_to_string(dir.path().join("discrete.csv")).unwrap();
        let lines = data_lines(&content);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "2,0.020000,1.000000");
    }

    #[test]
    fn test_spectrum_csv_positive_half_only() {
        let dir = TempDir::new().unwrap();
        let mut exporter = CsvExporter::new(dir.path());
        let freqs: Vec<f64> = (0..8).map(|k| k as f64 * 0.25).collect();
        let mags = vec![0.1; 8];

        exporter
            .display_spectrum(&freqs, &mags, "Spectrum", 8, 2.0)
            .unwrap();

        let content = std::fs::read_to_string(dir.path().join("spectrum.csv")).unwrap();
        assert!(content.contains("df = 0.2500 Hz"), "got: {content}");
        let lines = data_lines(&content);
        // Header plus N/2 rows
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "0.750000,0.100000");
    }

    #[test]
    fn test_creates_missing_directory_and_tracks_files() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("run").join("out");
        let mut exporter = CsvExporter::new(&nested);

        exporter
            .display_continuous(&[0.0], &[0.0], "c", "t", "a")
            .unwrap();
        exporter
            .display_spectrum(&[0.0, 1.0], &[0.0, 0.0], "s", 2, 2.0)
            .unwrap();

        assert!(nested.join("continuous.csv").exists());
        assert_eq!(exporter.written().len(), 2);
        assert_eq!(exporter.dir(), nested.as_path());
    }
}
