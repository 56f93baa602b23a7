//! Command implementations for taskpad.
//!
//! Every command goes through the [`TaskController`] and returns the
//! rendered task list afterwards.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, OutputFormat};
use crate::controller::TaskController;
use crate::core::{EditOutcome, Task, TaskStore};
use crate::error::TaskpadError;
use crate::output::format_tasks;

/// Execute list command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn list<S: TaskStore>(
    controller: &TaskController<S>,
    format: OutputFormat,
) -> Result<String, TaskpadError> {
    format_tasks(&controller.tasks(), format)
}

/// Execute add command
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn add<S: TaskStore>(
    controller: &TaskController<S>,
    description: &str,
    format: OutputFormat,
) -> Result<String, TaskpadError> {
    controller.add_task(description)?;
    list(controller, format)
}

/// Execute edit command
///
/// When `description` is `None`, `prompt` is asked for one given the current
/// text. A cancelled prompt leaves the task untouched.
///
/// # Errors
///
/// Returns an error if the task is unknown, prompting fails, or storage fails.
pub fn edit<S, P>(
    controller: &TaskController<S>,
    id: i64,
    description: Option<String>,
    prompt: P,
    format: OutputFormat,
) -> Result<String, TaskpadError>
where
    S: TaskStore,
    P: FnOnce(&str) -> std::io::Result<EditOutcome>,
{
    let task = lookup(controller, id)?;

    let outcome = match description {
        Some(text) => EditOutcome::from_input(Some(&text)),
        None => prompt(&task.description)?,
    };

    if let EditOutcome::Confirmed(text) = outcome {
        controller.edit_task(&task, &text)?;
    }
    list(controller, format)
}

/// Execute toggle command
///
/// # Errors
///
/// Returns an error if the task is unknown or storage fails.
pub fn toggle<S: TaskStore>(
    controller: &TaskController<S>,
    id: i64,
    format: OutputFormat,
) -> Result<String, TaskpadError> {
    let task = lookup(controller, id)?;
    controller.toggle_task_completion(&task)?;
    list(controller, format)
}

/// Execute delete command
///
/// # Errors
///
/// Returns an error if the task is unknown or storage fails.
pub fn delete<S: TaskStore>(
    controller: &TaskController<S>,
    id: i64,
    format: OutputFormat,
) -> Result<String, TaskpadError> {
    let task = lookup(controller, id)?;
    controller.delete_task(&task)?;
    list(controller, format)
}

/// Execute clear command
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn clear<S: TaskStore>(
    controller: &TaskController<S>,
    format: OutputFormat,
) -> Result<String, TaskpadError> {
    controller.delete_all_tasks()?;
    list(controller, format)
}

/// Generate a shell completion script.
///
/// # Errors
///
/// Returns an error if the script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, TaskpadError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "taskpad", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| TaskpadError::Config(format!("Completion script is not UTF-8: {e}")))
}

fn lookup<S: TaskStore>(controller: &TaskController<S>, id: i64) -> Result<Task, TaskpadError> {
    controller.find(id).ok_or(TaskpadError::NotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteTaskStore;

    fn controller() -> TaskController<SqliteTaskStore> {
        TaskController::new(SqliteTaskStore::open_in_memory().unwrap()).unwrap()
    }

    fn no_prompt(_: &str) -> std::io::Result<EditOutcome> {
        panic!("prompt should not be used")
    }

    #[test]
    fn test_add_then_list_json() {
        let controller = controller();
        let out = add(&controller, "Buy milk", OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["description"], "Buy milk");
        assert_eq!(value["items"][0]["isCompleted"], false);
    }

    #[test]
    fn test_edit_with_description() {
        let controller = controller();
        controller.add_task("Buy milk").unwrap();
        let id = controller.tasks()[0].id;

        edit(&controller, id, Some("Buy oat milk".to_string()), no_prompt, OutputFormat::Json)
            .unwrap();

        assert_eq!(controller.tasks()[0].description, "Buy oat milk");
    }

    #[test]
    fn test_edit_prompts_with_current_text() {
        let controller = controller();
        controller.add_task("Buy milk").unwrap();
        let id = controller.tasks()[0].id;

        edit(
            &controller,
            id,
            None,
            |current| {
                assert_eq!(current, "Buy milk");
                Ok(EditOutcome::Confirmed("Buy bread".to_string()))
            },
            OutputFormat::Json,
        )
        .unwrap();

        assert_eq!(controller.tasks()[0].description, "Buy bread");
    }

    #[test]
    fn test_edit_cancelled_prompt_keeps_task() {
        let controller = controller();
        controller.add_task("Buy milk").unwrap();
        let before = controller.tasks();

        edit(
            &controller,
            before[0].id,
            None,
            |_| Ok(EditOutcome::Cancelled),
            OutputFormat::Json,
        )
        .unwrap();

        assert_eq!(controller.tasks(), before);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let controller = controller();

        let err = toggle(&controller, 42, OutputFormat::Json).unwrap_err();
        assert!(matches!(err, TaskpadError::NotFound(42)));

        let err = delete(&controller, 42, OutputFormat::Json).unwrap_err();
        assert!(matches!(err, TaskpadError::NotFound(42)));
    }

    #[test]
    fn test_toggle_delete_clear() {
        let controller = controller();
        controller.add_task("One").unwrap();
        controller.add_task("Two").unwrap();
        let ids: Vec<i64> = controller.tasks().iter().map(|t| t.id).collect();

        toggle(&controller, ids[0], OutputFormat::Json).unwrap();
        assert!(controller.find(ids[0]).unwrap().is_completed);

        delete(&controller, ids[1], OutputFormat::Json).unwrap();
        assert_eq!(controller.tasks().len(), 1);

        let out = clear(&controller, OutputFormat::Json).unwrap();
        assert!(out.contains("\"count\": 0"));
    }

    #[test]
    fn test_completions_mention_commands() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("taskpad"));
        assert!(script.contains("toggle"));
    }
}
