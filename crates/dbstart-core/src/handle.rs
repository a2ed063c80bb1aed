//! Process-wide, write-once slot for the published database handle.
//!
//! Code that can take the handle as a parameter should do so. The slot exists
//! for hosts that need one shared handle reachable from anywhere in the
//! process, and it refuses to be overwritten once set.

use std::sync::{Mutex, OnceLock};

use log::debug;

use crate::{
    db::Database,
    error::{BootstrapError, Result},
};

/// The shared form of the handle. The mutex only makes the connection
/// shareable between threads.
pub type SharedDatabase = Mutex<Database>;

static DATABASE: OnceLock<SharedDatabase> = OnceLock::new();

/// Publishes `db` as the process-wide handle.
///
/// # Errors
///
/// Returns [`BootstrapError::AlreadyInitialized`] if a handle was published
/// before. The earlier handle stays in place and `db` is dropped.
pub fn publish(db: Database) -> Result<&'static SharedDatabase> {
    let mut published = false;
    let shared = DATABASE.get_or_init(|| {
        published = true;
        Mutex::new(db)
    });

    if published {
        debug!("Published process-wide database handle");
        Ok(shared)
    } else {
        Err(BootstrapError::AlreadyInitialized)
    }
}

/// The published handle, if any.
pub fn get() -> Option<&'static SharedDatabase> {
    DATABASE.get()
}

/// Whether a handle has been published.
pub fn is_ready() -> bool {
    DATABASE.get().is_some()
}
