//! Analysis task configuration for modspec.
//!
//! A task bundles an AM signal, sampling settings, and analysis settings
//! into a TOML file. This crate loads, saves, and validates tasks, ships a
//! set of factory tasks, and locates user task files.
//!
//! # Example
//!
//! ```rust
//! use modspec_analysis::NullDisplay;
//! use modspec_config::load_task;
//!
//! let task = load_task("baseline").unwrap();
//! task.validate().unwrap();
//!
//! let report = task.pipeline().run(&mut NullDisplay).unwrap();
//! assert_eq!(report.sample_count, 400);
//! ```

mod error;
mod task;

/// Platform-specific paths for user task files.
pub mod paths;

/// Task validation.
pub mod validation;

/// Factory tasks bundled with the library.
pub mod factory_tasks;

pub use error::ConfigError;
pub use factory_tasks::{
    FACTORY_TASK_NAMES, factory_task_names, factory_tasks, get_factory_task, is_factory_task,
};
pub use paths::{find_task, list_user_tasks, task_name_from_path, user_config_dir, user_tasks_dir};
pub use task::{AnalysisSection, SamplingConfig, TaskConfig, TransformKind};
pub use validation::{ValidationError, ValidationResult, check_nyquist, validate_task};

/// Resolve a task by name.
///
/// Lookup order: factory tasks, then user task files, then `name` as a
/// file path.
///
/// # Errors
///
/// [`ConfigError::TaskNotFound`] if nothing matches; read or parse errors
/// from the file that did match.
pub fn load_task(name: &str) -> Result<TaskConfig, ConfigError> {
    if let Some(task) = get_factory_task(name) {
        return Ok(task);
    }

    match find_task(name) {
        Some(path) => TaskConfig::load(path),
        None => Err(ConfigError::TaskNotFound(name.to_string())),
    }
}
