//! Persistence interface for tasks.
//!
//! The controller only talks to storage through [`TaskStore`], so tests can
//! swap the SQLite implementation for a mock.

use crate::core::Task;
use crate::error::StorageError;

/// Durable CRUD over the task table.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStore: Send {
    /// Return every stored task in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn list_all(&self) -> Result<Vec<Task>, StorageError>;

    /// Store a new, not yet completed task and return its id.
    ///
    /// Duplicate descriptions are allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert(&self, description: &str) -> Result<i64, StorageError>;

    /// Replace the row matching `task.id` with the given values.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::TaskNotFound`] if no such row exists, or a
    /// database error if the write fails.
    fn update(&self, task: &Task) -> Result<(), StorageError>;

    /// Remove the row with the given id. Missing ids are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete_one(&self, id: i64) -> Result<(), StorageError>;

    /// Remove every row.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete_all(&self) -> Result<(), StorageError>;
}
