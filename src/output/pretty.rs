use std::fmt::Write;

use colored::Colorize;

use crate::core::Task;

/// Format the task list for a terminal.
///
/// Completed tasks are dimmed and struck through.
pub fn format_tasks_pretty(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return format!(
            "{}\n  {}",
            "No tasks today".bold(),
            "Go take a walk".dimmed()
        );
    }

    let open = tasks.iter().filter(|t| !t.is_completed).count();
    let mut output = format!("Tasks ({} open, {} total)\n", open, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let _ = writeln!(output, "{}", format_task_line(task));
    }

    output
}

fn format_task_line(task: &Task) -> String {
    let id = format!("{:>4}", task.id).dimmed();
    if task.is_completed {
        format!(
            "{id} {} {}",
            "[x]".green(),
            task.description.strikethrough().dimmed()
        )
    } else {
        format!("{id} {} {}", "[ ]".white(), task.description.bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        let out = format_tasks_pretty(&[]);
        assert!(out.contains("No tasks today"));
        assert!(out.contains("Go take a walk"));
    }

    #[test]
    fn test_list_with_tasks() {
        let tasks = vec![
            Task {
                id: 1,
                description: "Buy milk".to_string(),
                is_completed: false,
            },
            Task {
                id: 2,
                description: "Walk dog".to_string(),
                is_completed: true,
            },
        ];

        let out = format_tasks_pretty(&tasks);

        assert!(out.starts_with("Tasks (1 open, 2 total)"));
        assert_eq!(out.lines().count(), 4);
        assert!(out.contains("[ ]"));
        assert!(out.contains("Buy milk"));
        assert!(out.contains("[x]"));
        assert!(out.contains("Walk dog"));
    }
}
