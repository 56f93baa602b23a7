//! Error types for taskpad.

use thiserror::Error;

/// Failure raised by the task store on I/O or constraint violations.
///
/// The controller passes these through untouched.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite call failed.
    #[error("Database error: {0}")]
    Database(String),

    /// An update targeted a row that does not exist.
    #[error("Task {0} does not exist")]
    TaskNotFound(i64),
}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}

/// Application-level error.
#[derive(Debug, Error)]
pub enum TaskpadError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A task id given on the command line is not in the current list.
    #[error("No task with id {0}")]
    NotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}
