//! Core library for dbstart, a fail-fast SQLite bootstrapper.
//!
//! The application database always lives in a file named
//! [`DATABASE_FILE`] in the working directory. This crate opens it, checks
//! that it really is a SQLite database, and hands back an owned
//! [`Database`].
//!
//! Two entry points cover the two ways a host can react to failure:
//!
//! - [`connect`] returns a [`Result`], leaving the decision to the caller.
//! - [`connect_or_exit`] publishes the handle into the process-wide slot in
//!   [`handle`] and terminates the process with [`FATAL_MESSAGE`] if the
//!   database cannot be opened.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dbstart_core::connect;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = connect()?;
//! db.connection()
//!     .execute_batch("CREATE TABLE IF NOT EXISTS notes (body TEXT)")?;
//! println!("{}", db.info()?);
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod db;
pub mod error;
pub mod handle;
pub mod models;

// Re-export commonly used types
pub use bootstrap::{
    connect, connect_in, connect_or_exit, database_path, DATABASE_FILE, FATAL_EXIT_CODE,
    FATAL_LOG_TARGET, FATAL_MESSAGE,
};
pub use db::Database;
pub use error::{BootstrapError, Result};
pub use handle::SharedDatabase;
pub use models::ConnectionInfo;
