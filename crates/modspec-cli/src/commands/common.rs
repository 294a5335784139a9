//! Shared utilities for CLI commands.

use modspec_config::{
    ConfigError, TaskConfig, factory_task_names, list_user_tasks, load_task, task_name_from_path,
};
use std::path::Path;

/// Load a task from an explicit file, or resolve it by name.
///
/// Unknown names fail with the list of available tasks.
pub fn resolve_task(name: &str, config: Option<&Path>) -> anyhow::Result<TaskConfig> {
    if let Some(path) = config {
        return TaskConfig::load(path).map_err(|e| anyhow::anyhow!("{}", e));
    }

    match load_task(name) {
        Ok(task) => Ok(task),
        Err(ConfigError::TaskNotFound(_)) => {
            anyhow::bail!(
                "Task '{}' not found. Available tasks: {}",
                name,
                available_task_names().join(", ")
            )
        }
        Err(e) => Err(anyhow::anyhow!("{}", e)),
    }
}

/// Factory task names followed by user task names.
pub fn available_task_names() -> Vec<String> {
    let mut names: Vec<String> = factory_task_names()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    names.extend(list_user_tasks().iter().filter_map(|p| task_name_from_path(p)));
    names
}
