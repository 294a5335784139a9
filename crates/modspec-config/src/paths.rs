//! Platform-specific paths for user task files.
//!
//! - **User config**: `~/.config/modspec/` (Linux), `~/Library/Application Support/modspec/` (macOS), `%APPDATA%\modspec\` (Windows)
//! - **User tasks**: `<user config>/tasks/`
//!
//! # Example
//!
//! ```rust,no_run
//! use modspec_config::paths;
//!
//! println!("User tasks: {:?}", paths::user_tasks_dir());
//!
//! if let Some(path) = paths::find_task("lab_3") {
//!     println!("Found task at: {:?}", path);
//! }
//! ```

use std::path::{Path, PathBuf};

const APP_NAME: &str = "modspec";

const TASKS_SUBDIR: &str = "tasks";

/// Returns the user-specific configuration directory.
///
/// Falls back to the current directory if the platform config directory
/// cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the user-specific task directory.
pub fn user_tasks_dir() -> PathBuf {
    user_config_dir().join(TASKS_SUBDIR)
}

/// Find a task file by name.
///
/// `name` may be a path to an existing file, or a task name (with or
/// without `.toml`) looked up in [`user_tasks_dir`].
pub fn find_task(name: &str) -> Option<PathBuf> {
    find_task_in(name, &user_tasks_dir())
}

fn find_task_in(name: &str, dir: &Path) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };

    let candidate = dir.join(filename);
    candidate.is_file().then_some(candidate)
}

/// List task files in the user task directory, sorted by path.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_tasks() -> Vec<PathBuf> {
    list_tasks_in_dir(&user_tasks_dir())
}

fn list_tasks_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut tasks: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    tasks.sort();
    tasks
}

/// Get the task name from a file path (the file stem).
///
/// ```rust
/// use modspec_config::paths::task_name_from_path;
/// use std::path::Path;
///
/// assert_eq!(task_name_from_path(Path::new("/tmp/lab_3.toml")), Some("lab_3".to_string()));
/// ```
pub fn task_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(ToString::to_string)
}
