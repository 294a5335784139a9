//! Integration tests for modspec-cli.
//!
//! Tests invoke the built binary and check its console output and the
//! files it writes.

use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper to get the path to the `modspec` binary built by cargo.
fn modspec_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_modspec"))
}

fn run_ok(args: &[&str]) -> String {
    let output = modspec_bin()
        .args(args)
        .output()
        .expect("failed to run modspec");
    assert!(
        output.status.success(),
        "modspec {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn run_err(args: &[&str]) -> Output {
    let output = modspec_bin()
        .args(args)
        .output()
        .expect("failed to run modspec");
    assert!(!output.status.success(), "modspec {args:?} should fail");
    output
}

const UNDERSAMPLED_TASK: &str = r#"
name = "undersampled"

[signal]
modulating_freq = 0.5
carrier_freq = 8.0
modulation_index = 0.5

[sampling]
sample_rate = 12.0
duration = 4.0
"#;

// ---------------------------------------------------------------------------
// `modspec run`
// ---------------------------------------------------------------------------

#[test]
fn cli_run_default_prints_report() {
    let stdout = run_ok(&["run"]);

    assert!(stdout.contains("--- ANALYSIS PARAMETERS ---"));
    assert!(stdout.contains("Number of samples (N): 400"));
    assert!(stdout.contains("0.2500 Hz"));
    assert!(stdout.contains("--- RESULTS ---"));

    for freq in ["7.5000", "8.0000", "8.5000"] {
        assert!(stdout.contains(freq), "report should contain {freq}:\n{stdout}");
    }
    assert!(stdout.contains("1.0000 (theoretical: 1.0000)"), "{stdout}");
    assert!(stdout.contains("0.2500 (theoretical: 0.2500)"), "{stdout}");
}

#[test]
fn cli_run_fast_matches_direct_rows() {
    let direct = run_ok(&["run", "baseline"]);
    let fast = run_ok(&["run", "baseline", "--fast"]);

    assert!(fast.contains("Transform: fast"));
    let rows = |s: &str| -> Vec<String> {
        s.lines()
            .filter(|l| l.contains("(theoretical:"))
            .map(ToString::to_string)
            .collect()
    };
    assert_eq!(rows(&direct), rows(&fast));
}

#[test]
fn cli_run_overrides() {
    let stdout = run_ok(&["run", "--fc", "10", "--fm", "1", "--index", "1"]);
    for freq in ["9.0000", "10.0000", "11.0000"] {
        assert!(stdout.contains(freq), "report should contain {freq}:\n{stdout}");
    }
    assert!(stdout.contains("0.5000 (theoretical: 0.5000)"), "{stdout}");
}

#[test]
fn cli_run_unknown_task_lists_available() {
    let output = run_err(&["run", "no_such_task_98765"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "{stderr}");
    assert!(stderr.contains("baseline"), "{stderr}");
}

#[test]
fn cli_run_rejects_undersampling() {
    let output = run_err(&["run", "--sample-rate", "12"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must exceed twice"), "{stderr}");
}

#[test]
fn cli_run_no_validate_still_runs() {
    let stdout = run_ok(&["run", "--sample-rate", "12", "--no-validate"]);
    assert!(stdout.contains("Number of samples (N): 48"));
}

#[test]
fn cli_run_unbounded_peak_count() {
    let stdout = run_ok(&["run", "--peaks", "18446744073709551615"]);
    assert!(stdout.contains("1.0000 (theoretical: 1.0000)"), "{stdout}");
}

#[test]
fn cli_run_infinite_sample_rate_fails_cleanly() {
    let output = run_err(&["run", "--no-validate", "--sample-rate", "inf"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sample limit"), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");
}

#[test]
fn cli_run_export_and_json() {
    let temp_dir = TempDir::new().unwrap();
    let export_dir = temp_dir.path().join("plots");
    let json_path = temp_dir.path().join("report.json");

    run_ok(&[
        "run",
        "--export",
        export_dir.to_str().unwrap(),
        "--json",
        json_path.to_str().unwrap(),
    ]);

    for name in ["continuous.csv", "discrete.csv", "spectrum.csv"] {
        assert!(export_dir.join(name).is_file(), "{name} should be written");
    }

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["sample_count"], 400);
    assert_eq!(json["transform"], "direct");
    assert_eq!(json["peaks"].as_array().unwrap().len(), 3);
}

#[test]
fn cli_run_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wide.toml");
    std::fs::write(
        &path,
        r#"
name = "wide"

[signal]
modulating_freq = 2.0
carrier_freq = 20.0
modulation_index = 0.8

[sampling]
sample_rate = 200.0
duration = 2.0
"#,
    )
    .unwrap();

    let stdout = run_ok(&["run", "--config", path.to_str().unwrap()]);
    for freq in ["18.0000", "20.0000", "22.0000"] {
        assert!(stdout.contains(freq), "report should contain {freq}:\n{stdout}");
    }
}

// ---------------------------------------------------------------------------
// `modspec tasks` / `modspec config`
// ---------------------------------------------------------------------------

#[test]
fn cli_tasks_lists_factory_tasks() {
    let stdout = run_ok(&["tasks"]);
    assert!(stdout.contains("Factory Tasks"));
    for name in ["baseline", "full-modulation", "wideband", "long-window"] {
        assert!(stdout.contains(name), "tasks listing should contain '{name}'");
    }
}

#[test]
fn cli_config_show_prints_toml() {
    let stdout = run_ok(&["config", "show", "wideband"]);
    assert!(stdout.contains("name = \"wideband\""), "{stdout}");
    assert!(stdout.contains("[signal]"), "{stdout}");
    assert!(stdout.contains("carrier_freq = 20.0"), "{stdout}");
}

#[test]
fn cli_config_validate() {
    let temp_dir = TempDir::new().unwrap();

    let good = temp_dir.path().join("good.toml");
    std::fs::write(&good, UNDERSAMPLED_TASK.replace("12.0", "100.0")).unwrap();
    let stdout = run_ok(&["config", "validate", good.to_str().unwrap()]);
    assert!(stdout.contains("OK (400 samples"), "{stdout}");

    let bad = temp_dir.path().join("bad.toml");
    std::fs::write(&bad, UNDERSAMPLED_TASK).unwrap();
    let output = run_err(&["config", "validate", bad.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must exceed twice"), "{stderr}");
}
