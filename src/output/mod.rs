//! Output formatting for taskpad.
//!
//! Renders task snapshots as colored text or JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::Task;
use crate::error::TaskpadError;

pub use json::format_tasks_json;
pub use pretty::format_tasks_pretty;

/// Format tasks based on output format
///
/// # Errors
///
/// Returns `TaskpadError::Parse` if JSON serialization fails.
pub fn format_tasks(tasks: &[Task], format: OutputFormat) -> Result<String, TaskpadError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks)),
        OutputFormat::Json => format_tasks_json(tasks),
    }
}
