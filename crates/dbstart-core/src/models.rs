//! Report types describing an open connection.

use std::{fmt, path::PathBuf};

use serde::Serialize;

use crate::error::Result;

/// Snapshot of an open connection's settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionInfo {
    /// Database file, `None` for in-memory databases.
    pub path: Option<PathBuf>,
    pub sqlite_version: String,
    pub journal_mode: String,
    pub foreign_keys: bool,
    /// Number of tables excluding SQLite's internal ones.
    pub table_count: u64,
}

impl ConnectionInfo {
    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => writeln!(f, "Database: {}", path.display())?,
            None => writeln!(f, "Database: (in memory)")?,
        }
        writeln!(f, "SQLite version: {}", self.sqlite_version)?;
        writeln!(f, "Journal mode: {}", self.journal_mode)?;
        writeln!(
            f,
            "Foreign keys: {}",
            if self.foreign_keys { "on" } else { "off" }
        )?;
        write!(f, "Tables: {}", self.table_count)
    }
}
