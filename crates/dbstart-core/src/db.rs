//! The owned database handle and its open-and-verify step.

use std::path::{Path, PathBuf};

use log::debug;
use rusqlite::Connection;

use crate::{
    error::{DatabaseResultExt, Result},
    models::ConnectionInfo,
};

/// An open, verified SQLite connection.
///
/// This is the handle the bootstrapper publishes. It owns the underlying
/// [`Connection`]; consumers borrow it through [`Database::connection`] and
/// issue their own queries.
#[derive(Debug)]
pub struct Database {
    connection: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Opens the database file at `path`, creating it when missing.
    ///
    /// SQLite opens lazily, so the file header is only read by the first
    /// statement. The connection is verified here so that a corrupt file or
    /// an unusable path is reported as [`BootstrapError::ConnectionOpen`]
    /// instead of surfacing on first use.
    ///
    /// [`BootstrapError::ConnectionOpen`]: crate::BootstrapError::ConnectionOpen
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening database at {}", path.display());

        let connection = Connection::open(path).open_context(path)?;
        Self::verify(&connection).open_context(path)?;

        Ok(Self {
            connection,
            path: Some(path.to_path_buf()),
        })
    }

    /// Opens a private in-memory database. Used for embedding and tests.
    pub fn open_in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().open_context(Path::new(":memory:"))?;
        Self::verify(&connection).open_context(Path::new(":memory:"))?;

        Ok(Self {
            connection,
            path: None,
        })
    }

    fn verify(connection: &Connection) -> rusqlite::Result<()> {
        connection.execute_batch("PRAGMA foreign_keys = ON")?;
        // Forces SQLite to read the file header.
        connection.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })?;
        Ok(())
    }

    /// The underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Path of the database file, or `None` for an in-memory database.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Collects a [`ConnectionInfo`] report about this connection.
    pub fn info(&self) -> Result<ConnectionInfo> {
        let journal_mode: String = self
            .connection
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .db_context("Failed to read journal mode")?;

        let foreign_keys: bool = self
            .connection
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .db_context("Failed to read foreign key setting")?;

        let table_count: i64 = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master \
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
                [],
                |row| row.get(0),
            )
            .db_context("Failed to count tables")?;

        Ok(ConnectionInfo {
            path: self.path.clone(),
            sqlite_version: rusqlite::version().to_string(),
            journal_mode,
            foreign_keys,
            table_count: u64::try_from(table_count).unwrap_or_default(),
        })
    }
}
