//! dbstart CLI Application
//!
//! Opens the application database once at startup and reports on the
//! connection.

mod args;

use std::env;

use anyhow::{anyhow, Context, Result};
use args::{Args, Commands};
use clap::Parser;
use dbstart_core::{connect_or_exit, database_path, SharedDatabase, FATAL_LOG_TARGET};
use log::{info, LevelFilter};

fn main() -> Result<()> {
    // RUST_LOG controls everything except the fatal startup message.
    env_logger::Builder::from_default_env()
        .filter_module(FATAL_LOG_TARGET, LevelFilter::Error)
        .init();

    let Args { json, command } = Args::parse();

    match command.unwrap_or(Commands::Info) {
        Commands::Info => {
            let db = connect_or_exit();
            info!("dbstart started");
            print_info(db, json)
        }
        Commands::Path => print_path(json),
    }
}

fn print_info(db: &SharedDatabase, json: bool) -> Result<()> {
    let info = db
        .lock()
        .map_err(|_| anyhow!("Database handle lock poisoned"))?
        .info()
        .context("Failed to inspect database")?;

    if json {
        println!("{}", info.to_json().context("Failed to render report")?);
    } else {
        println!("{info}");
    }
    Ok(())
}

fn print_path(json: bool) -> Result<()> {
    let cwd = env::current_dir().context("Failed to resolve working directory")?;
    let path = database_path(&cwd);

    if json {
        println!("{}", serde_json::json!({ "path": path }));
    } else {
        println!("{}", path.display());
    }
    Ok(())
}
