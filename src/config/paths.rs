//! Path resolution for taskpad configuration and data files.
//!
//! All taskpad data is stored in `~/.taskpad/`:
//! - `config.yaml` - Main configuration file
//! - `task_db` - SQLite database holding the task table (name configurable)

use std::path::{Path, PathBuf};

use crate::error::TaskpadError;

/// Default storage file name inside the data directory.
pub const DEFAULT_DATABASE_FILE: &str = "task_db";

/// Paths to taskpad configuration and data.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.taskpad/`
    pub root: PathBuf,
    /// Config file: `~/.taskpad/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TaskpadError> {
        let home = std::env::var("HOME").map_err(|_| {
            TaskpadError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".taskpad")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Resolve the database location for a configured file name.
    ///
    /// Relative names live under the root directory; absolute paths are
    /// used as given.
    #[must_use]
    pub fn database(&self, file_name: &str) -> PathBuf {
        let path = Path::new(file_name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TaskpadError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TaskpadError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
