use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use taskpad::cli::args::{Cli, Commands};
use taskpad::cli::commands;
use taskpad::cli::prompt::prompt_edit;
use taskpad::config::{Config, Paths};
use taskpad::{SqliteTaskStore, TaskController};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        print!("{}", commands::completions(shell)?);
        return Ok(());
    }

    let paths = Paths::new()?;
    let config_file = cli.config.clone().unwrap_or_else(|| paths.config_file.clone());
    let config = Config::load_from_path(&config_file)?;

    init_tracing(&config.log.level);
    config.general.color.apply();

    let db_path = match cli.db {
        Some(path) => path,
        None => {
            paths.ensure_dirs()?;
            paths.database(&config.storage.database_file)
        }
    };
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = {
        let store = open_store(&db_path)?;
        let controller = TaskController::new(store).context("Failed to load tasks")?;
        tracing::debug!(path = %db_path.display(), "controller ready");

        match cli.command {
            Commands::List => commands::list(&controller, format)?,
            Commands::Add { description } => commands::add(&controller, &description, format)?,
            Commands::Edit { id, description } => commands::edit(
                &controller,
                id,
                description,
                |current| prompt_edit(current, io::stdin().lock(), io::stderr()),
                format,
            )?,
            Commands::Toggle { id } => commands::toggle(&controller, id, format)?,
            Commands::Delete { id } => commands::delete(&controller, id, format)?,
            Commands::Clear => commands::clear(&controller, format)?,
            Commands::Completions { shell } => commands::completions(shell)?,
        }
    };

    println!("{output}");
    Ok(())
}

fn open_store(path: &Path) -> Result<SqliteTaskStore> {
    SqliteTaskStore::open_at(path)
        .with_context(|| format!("Failed to open task database at {}", path.display()))
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
