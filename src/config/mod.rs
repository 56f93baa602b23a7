//! Configuration management for taskpad.
//!
//! This module handles loading configuration and resolving paths under
//! `~/.taskpad/`.

mod paths;
mod settings;

pub use paths::{Paths, DEFAULT_DATABASE_FILE};
pub use settings::{ColorSetting, Config, GeneralConfig, LogConfig, StorageConfig};
