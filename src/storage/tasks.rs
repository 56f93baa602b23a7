//! SQLite-backed task store.

use std::path::Path;

use rusqlite::{params, Row};
use tracing::{debug, instrument};

use super::Database;
use crate::core::{Task, TaskStore};
use crate::error::StorageError;

/// Task store over the `tasks` table.
pub struct SqliteTaskStore {
    db: Database,
}

impl SqliteTaskStore {
    /// Open a store backed by the database file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_at(path: &Path) -> Result<Self, StorageError> {
        Ok(Self::with_database(Database::open_at(path)?))
    }

    /// Open a store over a fresh in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self::with_database(Database::open_in_memory()?))
    }

    /// Create a store with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }
}

impl TaskStore for SqliteTaskStore {
    fn list_all(&self) -> Result<Vec<Task>, StorageError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare("SELECT id, description, isCompleted FROM tasks ORDER BY id ASC")
            .map_err(|e| StorageError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], row_to_task)
            .map_err(|e| StorageError::Database(format!("Failed to query tasks: {e}")))?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row?);
        }

        Ok(tasks)
    }

    #[instrument(skip(self))]
    fn insert(&self, description: &str) -> Result<i64, StorageError> {
        let conn = self.db.connection();

        conn.execute(
            "INSERT INTO tasks (description, isCompleted) VALUES (?1, 0)",
            params![description],
        )
        .map_err(|e| StorageError::Database(format!("Failed to insert task: {e}")))?;

        let id = conn.last_insert_rowid();
        debug!(id, "task inserted");
        Ok(id)
    }

    #[instrument(skip(self), fields(id = task.id))]
    fn update(&self, task: &Task) -> Result<(), StorageError> {
        let rows = self
            .db
            .connection()
            .execute(
                "UPDATE tasks SET description = ?1, isCompleted = ?2 WHERE id = ?3",
                params![task.description, task.is_completed, task.id],
            )
            .map_err(|e| StorageError::Database(format!("Failed to update task: {e}")))?;

        if rows == 0 {
            return Err(StorageError::TaskNotFound(task.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    fn delete_one(&self, id: i64) -> Result<(), StorageError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM tasks WHERE id = ?1", [id])
            .map_err(|e| StorageError::Database(format!("Failed to delete task: {e}")))?;

        debug!(rows, "delete finished");
        Ok(())
    }

    #[instrument(skip(self))]
    fn delete_all(&self) -> Result<(), StorageError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM tasks", [])
            .map_err(|e| StorageError::Database(format!("Failed to delete tasks: {e}")))?;

        debug!(rows, "all tasks deleted");
        Ok(())
    }
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        is_completed: row.get(2)?,
    })
}
