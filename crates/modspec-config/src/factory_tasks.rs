//! Factory tasks bundled with the modspec library.
//!
//! These tasks are always available without external files. `baseline`
//! is the reference configuration the CLI runs when no task is named.

use crate::TaskConfig;

/// Array of factory task names for external access.
pub static FACTORY_TASK_NAMES: &[&str] = &["baseline", "full-modulation", "wideband", "long-window"];

/// TOML content for factory tasks, embedded at compile time.
static FACTORY_TASKS_TOML: &[(&str, &str)] = &[
    ("baseline", BASELINE_TASK),
    ("full-modulation", FULL_MODULATION_TASK),
    ("wideband", WIDEBAND_TASK),
    ("long-window", LONG_WINDOW_TASK),
];

/// 0.5 Hz tone on an 8 Hz carrier; every line lands on a bin.
const BASELINE_TASK: &str = r#"
name = "baseline"
description = "0.5 Hz tone at 50% modulation on an 8 Hz carrier"

[signal]
modulating_freq = 0.5
carrier_freq = 8.0
modulation_index = 0.5

[sampling]
sample_rate = 100.0
duration = 4.0

[analysis]
peak_count = 3
"#;

const FULL_MODULATION_TASK: &str = r#"
name = "full-modulation"
description = "Baseline carrier at 100% modulation; sidebands at half carrier amplitude"

[signal]
modulating_freq = 0.5
carrier_freq = 8.0
modulation_index = 1.0

[sampling]
sample_rate = 100.0
duration = 4.0
"#;

const WIDEBAND_TASK: &str = r#"
name = "wideband"
description = "2 Hz tone on a 20 Hz carrier, sampled at 200 Hz"

[signal]
modulating_freq = 2.0
carrier_freq = 20.0
modulation_index = 0.8

[sampling]
sample_rate = 200.0
duration = 2.0
"#;

/// Same sample count as baseline at half the rate; finer Δf.
const LONG_WINDOW_TASK: &str = r#"
name = "long-window"
description = "Baseline signal over an 8 s window at 50 Hz (0.125 Hz resolution)"

[signal]
modulating_freq = 0.5
carrier_freq = 8.0
modulation_index = 0.5

[sampling]
sample_rate = 50.0
duration = 8.0
"#;

/// Get all factory tasks.
pub fn factory_tasks() -> Vec<TaskConfig> {
    FACTORY_TASKS_TOML
        .iter()
        .filter_map(|(_, toml)| TaskConfig::from_toml(toml).ok())
        .collect()
}

/// Get a factory task by name (case-insensitive).
///
/// # Example
///
/// ```rust
/// use modspec_config::get_factory_task;
///
/// let task = get_factory_task("Baseline").unwrap();
/// assert_eq!(task.signal.carrier_freq, 8.0);
/// ```
pub fn get_factory_task(name: &str) -> Option<TaskConfig> {
    FACTORY_TASKS_TOML
        .iter()
        .find(|(task_name, _)| task_name.eq_ignore_ascii_case(name))
        .and_then(|(_, toml)| TaskConfig::from_toml(toml).ok())
}

/// Get the names of all factory tasks.
pub fn factory_task_names() -> Vec<&'static str> {
    FACTORY_TASKS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Check if a name refers to a factory task (case-insensitive).
pub fn is_factory_task(name: &str) -> bool {
    FACTORY_TASK_NAMES
        .iter()
        .any(|task_name| task_name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_factory_tasks_parse_and_validate() {
        for (name, toml) in FACTORY_TASKS_TOML {
            let task = TaskConfig::from_toml(toml)
                .unwrap_or_else(|e| panic!("factory task '{name}' should parse: {e}"));
            assert_eq!(task.name, *name);
            assert!(task.description.is_some(), "task '{name}' should have a description");
            assert!(task.validate().is_ok(), "task '{name}' should validate");
        }
    }

    #[test]
    fn test_names_match_table() {
        assert_eq!(factory_task_names(), FACTORY_TASK_NAMES.to_vec());
        assert_eq!(factory_tasks().len(), FACTORY_TASK_NAMES.len());
    }

    #[test]
    fn test_get_factory_task() {
        let task = get_factory_task("baseline").expect("baseline should exist");
        assert_eq!(task.parameters().sample_count(), 400);
        assert!((task.parameters().frequency_resolution() - 0.25).abs() < 1e-12);

        assert!(get_factory_task("WIDEBAND").is_some());
        assert!(get_factory_task("nonexistent").is_none());
    }

    #[test]
    fn test_long_window_resolution() {
        let task = get_factory_task("long-window").unwrap();
        assert_eq!(task.parameters().sample_count(), 400);
        assert!((task.parameters().frequency_resolution() - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_is_factory_task() {
        assert!(is_factory_task("baseline"));
        assert!(is_factory_task("Full-Modulation"));
        assert!(!is_factory_task("my_lab"));
    }
}
