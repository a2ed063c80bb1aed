//! Opening the application database under its fixed file name.

use std::{
    path::{Path, PathBuf},
    process,
};

use log::{debug, error, info};

use crate::{
    db::Database,
    error::{BootstrapError, Result},
    handle,
};

/// File name of the application database. Not configurable.
pub const DATABASE_FILE: &str = "gorm.db";

/// Logged when [`connect_or_exit`] gives up.
pub const FATAL_MESSAGE: &str = "Database could not start";

/// Exit status used by [`connect_or_exit`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// Log target of the [`FATAL_MESSAGE`] record. Hosts keep this target enabled
/// so the message cannot be filtered away.
pub const FATAL_LOG_TARGET: &str = "dbstart_core::fatal";

/// Path of the database file inside `dir`.
pub fn database_path(dir: &Path) -> PathBuf {
    dir.join(DATABASE_FILE)
}

/// Opens [`DATABASE_FILE`] in the current working directory.
///
/// The file is created when missing. Each call opens a new connection; the
/// caller owns it.
///
/// # Errors
///
/// Returns [`BootstrapError::ConnectionOpen`] when the file cannot be opened
/// or does not hold a SQLite database.
///
/// [`BootstrapError::ConnectionOpen`]: crate::BootstrapError::ConnectionOpen
pub fn connect() -> Result<Database> {
    Database::open(DATABASE_FILE)
}

/// Opens [`DATABASE_FILE`] inside `dir`.
///
/// # Errors
///
/// Same as [`connect`].
pub fn connect_in<P: AsRef<Path>>(dir: P) -> Result<Database> {
    Database::open(database_path(dir.as_ref()))
}

/// Opens the database, publishes it process-wide and returns the shared
/// handle. Intended to be called at startup by the outermost frame.
///
/// If a handle is already published it is returned as is, without opening
/// the file again.
///
/// Any failure is logged as [`FATAL_MESSAGE`] and terminates the process with
/// [`FATAL_EXIT_CODE`]. Nothing is returned to the caller on failure.
pub fn connect_or_exit() -> &'static handle::SharedDatabase {
    match connect_once() {
        Ok(shared) => shared,
        Err(e) => {
            debug!("{e}");
            error!(target: FATAL_LOG_TARGET, "{FATAL_MESSAGE}");
            process::exit(FATAL_EXIT_CODE)
        }
    }
}

fn connect_once() -> Result<&'static handle::SharedDatabase> {
    if let Some(shared) = handle::get() {
        debug!("Database already published, reusing handle");
        return Ok(shared);
    }

    match connect().and_then(handle::publish) {
        Ok(shared) => {
            info!("Database ready");
            Ok(shared)
        }
        // Lost a publish race with another thread.
        Err(BootstrapError::AlreadyInitialized) => {
            handle::get().ok_or(BootstrapError::AlreadyInitialized)
        }
        Err(e) => Err(e),
    }
}
