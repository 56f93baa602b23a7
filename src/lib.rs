//! taskpad - a small local task list
//!
//! A SQLite-backed task store wrapped by an observable controller that
//! republishes the full task list after every change, plus a thin CLI host.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use controller::TaskController;
pub use crate::core::{EditOutcome, Task, TaskStore};
pub use error::{StorageError, TaskpadError};
pub use storage::SqliteTaskStore;
