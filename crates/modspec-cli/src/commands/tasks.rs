//! Task listing command.

use modspec_config::{
    TaskConfig, factory_tasks, list_user_tasks, task_name_from_path, user_tasks_dir,
};

pub fn run() -> anyhow::Result<()> {
    println!("Factory Tasks:");
    println!("==============");
    for task in factory_tasks() {
        let desc = task.description.as_deref().unwrap_or("");
        println!("  {:20} - {}", task.name, desc);
    }
    println!();

    println!("User Tasks ({}):", user_tasks_dir().display());
    println!("===========");
    let user_tasks = list_user_tasks();
    if user_tasks.is_empty() {
        println!("  (none)");
    } else {
        for path in user_tasks {
            let name = task_name_from_path(&path).unwrap_or_else(|| "unknown".to_string());
            match TaskConfig::load(&path) {
                Ok(task) => {
                    let desc = task.description.as_deref().unwrap_or("");
                    println!("  {name:20} - {desc}");
                }
                Err(_) => println!("  {name:20} - (error loading)"),
            }
        }
    }
    println!();

    Ok(())
}
