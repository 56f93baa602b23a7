use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "A small local task list backed by SQLite")]
#[command(long_about = "taskpad - a small local task list

Create, edit, complete and delete short text tasks. Tasks are stored in a
SQLite database under ~/.taskpad/ and every command prints the resulting list.

QUICK START:
  taskpad add \"Buy milk\"     Add a task
  taskpad toggle 1           Mark task 1 done (or not done)
  taskpad edit 1 \"Buy oat milk\"
  taskpad delete 1           Delete task 1
  taskpad clear              Delete every task

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the task database
    ///
    /// Overrides `storage.database_file` from the config file.
    #[arg(long, env = "TASKPAD_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, env = "TASKPAD_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all tasks
    #[command(alias = "ls")]
    List,

    /// Add a task
    ///
    /// Empty descriptions are ignored.
    ///
    /// # Examples
    ///
    ///   taskpad add "Buy milk"
    ///   taskpad a "Call mom"
    #[command(alias = "a")]
    Add {
        /// Task description
        description: String,
    },

    /// Change a task's description
    ///
    /// Without a description, prompts for one with the current text shown.
    /// Entering nothing cancels the edit.
    #[command(alias = "e")]
    Edit {
        /// Task ID
        id: i64,
        /// New description
        description: Option<String>,
    },

    /// Mark a task done, or not done again
    #[command(alias = "t")]
    Toggle {
        /// Task ID
        id: i64,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task ID
        id: i64,
    },

    /// Delete every task
    Clear,

    /// Generate shell completions
    ///
    /// Example: taskpad completions bash > ~/.bash_completion.d/taskpad
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_list_command() {
        let cli = Cli::try_parse_from(["taskpad", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_cli_list_alias() {
        let cli = Cli::try_parse_from(["taskpad", "ls"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_cli_add() {
        let cli = Cli::try_parse_from(["taskpad", "add", "Buy milk"]).unwrap();
        assert!(matches!(cli.command, Commands::Add { description } if description == "Buy milk"));
    }

    #[test]
    fn test_cli_edit_without_description() {
        let cli = Cli::try_parse_from(["taskpad", "edit", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Edit { id: 3, description: None }));
    }

    #[test]
    fn test_cli_edit_with_description() {
        let cli = Cli::try_parse_from(["taskpad", "e", "3", "Buy oat milk"]).unwrap();
        match cli.command {
            Commands::Edit { id, description } => {
                assert_eq!(id, 3);
                assert_eq!(description.as_deref(), Some("Buy oat milk"));
            }
            _ => panic!("expected edit"),
        }
    }

    #[test]
    fn test_cli_toggle_and_delete() {
        let cli = Cli::try_parse_from(["taskpad", "toggle", "7"]).unwrap();
        assert!(matches!(cli.command, Commands::Toggle { id: 7 }));

        let cli = Cli::try_parse_from(["taskpad", "rm", "7"]).unwrap();
        assert!(matches!(cli.command, Commands::Delete { id: 7 }));
    }

    #[test]
    fn test_cli_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["taskpad", "toggle", "abc"]).is_err());
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::try_parse_from(["taskpad", "list"]).unwrap();
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["taskpad", "-o", "json", "list"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_db_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["taskpad", "clear", "--db", "/tmp/t.db"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/t.db")));
        assert!(matches!(cli.command, Commands::Clear));
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["taskpad", "completions", "zsh"]).unwrap();
        assert!(matches!(cli.command, Commands::Completions { shell: Shell::Zsh }));
    }
}
