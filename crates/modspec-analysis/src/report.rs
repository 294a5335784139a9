//! Console report table.
//!
//! `AnalysisReport` renders as a parameter block followed by one row per
//! extracted peak, frequencies and amplitudes to 4 decimals:
//!
//! ```text
//! Theoretical Freq (Hz) | Estimated Freq (Hz) | Estimated Relative Amplitude
//! 7.5000                | 7.5000              | 0.2500 (theoretical: 0.2500)
//! ```

use crate::pipeline::AnalysisReport;
use std::fmt;

const RULE_WIDTH: usize = 65;

impl AnalysisReport {
    /// Parameter block only.
    pub fn parameters_summary(&self) -> String {
        let mut out = String::new();
        out.push_str("--- ANALYSIS PARAMETERS ---\n");
        out.push_str(&format!("Sampling frequency (fs): {} Hz\n", self.parameters.sample_rate));
        out.push_str(&format!("Number of samples (N): {}\n", self.sample_count));
        out.push_str(&format!(
            "Frequency resolution (df = fs/N): {:.4} Hz\n",
            self.resolution
        ));
        out.push_str(&format!("Transform: {}\n", self.transform));
        out
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(f, "{}", self.parameters_summary())?;
        writeln!(f, "--- RESULTS ---")?;
        writeln!(f, "Identified spectral peaks:")?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:<21} | {:<19} | Estimated Relative Amplitude",
            "Theoretical Freq (Hz)", "Estimated Freq (Hz)"
        )?;
        writeln!(f, "{rule}")?;

        for row in &self.comparisons {
            writeln!(
                f,
                "{:<21.4} | {:<19.4} | {:.4} (theoretical: {:.4})",
                row.theoretical_frequency,
                row.estimated_frequency,
                row.estimated_amplitude,
                row.theoretical_amplitude
            )?;
        }
        for peak in self.peaks.iter().skip(self.comparisons.len()) {
            writeln!(
                f,
                "{:<21} | {:<19.4} | {:.4}",
                "-",
                peak.frequency,
                peak.amplitude()
            )?;
        }

        write!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use crate::display::NullDisplay;
    use crate::pipeline::{AnalysisParameters, AnalysisPipeline};
    use crate::signal::AmSignal;

    fn report(peak_count: usize) -> crate::pipeline::AnalysisReport {
        let params = AnalysisParameters::new(AmSignal::new(0.5, 8.0, 0.5), 100.0, 4.0)
            .with_peak_count(peak_count)
            .with_continuous_points(10);
        AnalysisPipeline::new(params).run(&mut NullDisplay).unwrap()
    }

    #[test]
    fn test_parameter_block() {
        let text = report(3).parameters_summary();
        assert!(text.contains("Sampling frequency (fs): 100 Hz"));
        assert!(text.contains("Number of samples (N): 400"));
        assert!(text.contains("0.2500 Hz"));
        assert!(text.contains("Transform: direct"));
    }

    #[test]
    fn test_table_rows() {
        let text = report(3).to_string();
        let rows: Vec<&str> = text
            .lines()
            .filter(|l| l.contains("(theoretical:"))
            .collect();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("7.5000"), "got: {}", rows[0]);
        assert!(rows[1].starts_with("8.0000"), "got: {}", rows[1]);
        assert!(rows[2].starts_with("8.5000"), "got: {}", rows[2]);
        assert!(rows[1].ends_with("1.0000 (theoretical: 1.0000)"), "got: {}", rows[1]);
        assert!(text.ends_with(&"-".repeat(65)));
    }

    #[test]
    fn test_extra_peaks_listed_without_theory() {
        let text = report(4).to_string();
        let extra: Vec<&str> = text.lines().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(extra.len(), 1);
    }
}
