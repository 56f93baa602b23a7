//! Storage layer for taskpad.
//!
//! SQLite-based persistence for the task table.

mod database;
mod migrations;
mod tasks;

pub use database::Database;
pub use tasks::SqliteTaskStore;
