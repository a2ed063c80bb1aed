use clap::{Parser, Subcommand};

/// Open the application database and report on it
///
/// The database always lives in `gorm.db` in the current working directory.
/// It is created when missing. If it cannot be opened, the process logs
/// "Database could not start" and exits with status 1.
#[derive(Parser)]
#[command(version, about, name = "dbstart")]
pub struct Args {
    /// Print reports as JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, `info` runs.
#[derive(Subcommand)]
pub enum Commands {
    /// Open the database and print a connection report
    Info,
    /// Print the database file location without opening it
    Path,
}
