//! Observable task list.
//!
//! [`TaskController`] sits between a front end and a [`TaskStore`]. Every
//! mutation goes through to storage first, then the full list is re-read and
//! pushed to subscribers as a replacement value.
//!
//! All operations hold the store lock from the write until the new list has
//! been published, so concurrent callers are serialized and observers never
//! see an older list after a newer one.

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, instrument};

use crate::core::{Task, TaskStore};
use crate::error::StorageError;

/// Bridges a task store to observers of the current task list.
pub struct TaskController<S: TaskStore> {
    store: Mutex<S>,
    tasks: watch::Sender<Vec<Task>>,
}

impl<S: TaskStore> TaskController<S> {
    /// Wrap `store` and load the initial task list.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial read fails.
    pub fn new(store: S) -> Result<Self, StorageError> {
        let initial = store.list_all()?;
        debug!(count = initial.len(), "controller loaded tasks");

        let (tasks, _) = watch::channel(initial);
        Ok(Self {
            store: Mutex::new(store),
            tasks,
        })
    }

    /// Subscribe to full-list replacements.
    ///
    /// The receiver starts out holding the current list, marked as seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Task>> {
        self.tasks.subscribe()
    }

    /// Current snapshot of the task list.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    /// Find a task in the current snapshot.
    #[must_use]
    pub fn find(&self, id: i64) -> Option<Task> {
        self.tasks.borrow().iter().find(|t| t.id == id).cloned()
    }

    /// Re-read the task list from storage and publish it.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub fn refresh(&self) -> Result<(), StorageError> {
        let store = self.store.lock();
        self.publish(&*store)
    }

    /// Add a task. Empty descriptions are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert or the following read fails.
    #[instrument(skip(self))]
    pub fn add_task(&self, description: &str) -> Result<(), StorageError> {
        if description.is_empty() {
            debug!("ignoring empty description");
            return Ok(());
        }

        self.mutate(|store| store.insert(description).map(|_| ()))
    }

    /// Change a task's description, keeping its completion state.
    ///
    /// Blank descriptions are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the task no longer exists or storage fails.
    #[instrument(skip(self, task), fields(id = task.id))]
    pub fn edit_task(&self, task: &Task, new_description: &str) -> Result<(), StorageError> {
        if new_description.trim().is_empty() {
            debug!("ignoring blank description");
            return Ok(());
        }

        let edited = task.with_description(new_description);
        self.mutate(|store| store.update(&edited))
    }

    /// Flip a task's completion flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the task no longer exists or storage fails.
    #[instrument(skip(self, task), fields(id = task.id))]
    pub fn toggle_task_completion(&self, task: &Task) -> Result<(), StorageError> {
        let toggled = task.toggled();
        self.mutate(|store| store.update(&toggled))
    }

    /// Delete a single task. Deleting a task that is already gone is fine.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    #[instrument(skip(self, task), fields(id = task.id))]
    pub fn delete_task(&self, task: &Task) -> Result<(), StorageError> {
        self.mutate(|store| store.delete_one(task.id))
    }

    /// Delete every task.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    #[instrument(skip(self))]
    pub fn delete_all_tasks(&self) -> Result<(), StorageError> {
        self.mutate(|store| store.delete_all())
    }

    /// Give the store back, e.g. to close it explicitly on shutdown.
    pub fn into_store(self) -> S {
        self.store.into_inner()
    }

    fn mutate<F>(&self, op: F) -> Result<(), StorageError>
    where
        F: FnOnce(&S) -> Result<(), StorageError>,
    {
        let store = self.store.lock();
        op(&*store)?;
        self.publish(&*store)
    }

    fn publish(&self, store: &S) -> Result<(), StorageError> {
        let tasks = store.list_all()?;
        debug!(count = tasks.len(), "publishing task list");
        self.tasks.send_replace(tasks);
        Ok(())
    }
}
