//! JSON output formatting for taskpad.

use serde_json::json;

use crate::core::Task;
use crate::error::TaskpadError;

/// Format the task list as JSON.
///
/// # Errors
///
/// Returns `TaskpadError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task]) -> Result<String, TaskpadError> {
    let output = json!({
        "count": tasks.len(),
        "completed": tasks.iter().filter(|t| t.is_completed).count(),
        "items": tasks,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tasks_json() {
        let tasks = vec![Task {
            id: 5,
            description: "Buy milk".to_string(),
            is_completed: true,
        }];

        let out = format_tasks_json(&tasks).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["completed"], 1);
        assert_eq!(value["items"][0]["id"], 5);
        assert_eq!(value["items"][0]["isCompleted"], true);
    }

    #[test]
    fn test_format_empty_json() {
        let value: serde_json::Value =
            serde_json::from_str(&format_tasks_json(&[]).unwrap()).unwrap();
        assert_eq!(value["count"], 0);
        assert_eq!(value["items"], serde_json::json!([]));
    }
}
