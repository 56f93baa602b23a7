//! Command-line front end for taskpad.

pub mod args;
pub mod commands;
pub mod prompt;

pub use args::{Cli, Commands, OutputFormat};
