//! Error types for the bootstrapper.

use std::path::PathBuf;

use thiserror::Error;

/// Every way bootstrapping or inspecting the database can fail.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// The database file could not be opened or is not a usable database.
    #[error("Failed to open database at '{path}': {source}")]
    ConnectionOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    /// A handle was already published into process-wide state.
    #[error("Database handle is already initialized")]
    AlreadyInitialized,
    /// A diagnostic query against an open connection failed.
    #[error("Database error: {message}")]
    Query {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl BootstrapError {
    /// Creates a connection-open error for the given path.
    pub fn connection_open(path: impl Into<PathBuf>, source: rusqlite::Error) -> Self {
        Self::ConnectionOpen {
            path: path.into(),
            source,
        }
    }

    /// Creates a query error with a message.
    pub fn query(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Query {
            message: message.into(),
            source,
        }
    }

    /// True when the error came from opening or verifying the database file.
    pub fn is_connection_open(&self) -> bool {
        matches!(self, Self::ConnectionOpen { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors to [`BootstrapError::Query`] with a message.
    fn db_context(self, message: &str) -> Result<T>;

    /// Map database errors to [`BootstrapError::ConnectionOpen`] for `path`.
    fn open_context(self, path: &std::path::Path) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BootstrapError::query(message, e))
    }

    fn open_context(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| BootstrapError::connection_open(path, e))
    }
}

/// Result type alias for bootstrap operations
pub type Result<T> = std::result::Result<T, BootstrapError>;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn sqlite_failure() -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_NOTADB),
            Some("file is not a database".to_string()),
        )
    }

    #[test]
    fn test_open_context_keeps_path() {
        let result: std::result::Result<(), _> = Err(sqlite_failure());
        let err = result.open_context(Path::new("some/dir/gorm.db")).unwrap_err();

        assert!(err.is_connection_open());
        let message = err.to_string();
        assert!(message.contains("some/dir/gorm.db"));
        assert!(message.contains("file is not a database"));
    }

    #[test]
    fn test_db_context_message() {
        let result: std::result::Result<(), _> = Err(sqlite_failure());
        let err = result.db_context("Failed to read journal mode").unwrap_err();

        assert!(!err.is_connection_open());
        assert_eq!(err.to_string(), "Database error: Failed to read journal mode");
    }

    #[test]
    fn test_already_initialized_display() {
        assert_eq!(
            BootstrapError::AlreadyInitialized.to_string(),
            "Database handle is already initialized"
        );
    }
}
