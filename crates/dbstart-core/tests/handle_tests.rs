//! The process-wide slot is global, so its whole lifecycle is exercised in a
//! single test inside this dedicated test binary.

use dbstart_core::{connect_in, handle, BootstrapError, Database};
use tempfile::TempDir;

#[test]
fn test_handle_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    // UNINITIALIZED
    assert!(!handle::is_ready());
    assert!(handle::get().is_none());

    // UNINITIALIZED -> READY
    let db = connect_in(temp_dir.path()).expect("Failed to connect");
    let shared = handle::publish(db).expect("First publish should succeed");
    assert!(handle::is_ready());

    shared
        .lock()
        .expect("Handle lock poisoned")
        .connection()
        .execute_batch("CREATE TABLE marker (id INTEGER)")
        .expect("Failed to create marker table");

    // A second publish is rejected and leaves the first handle in place.
    let second = Database::open_in_memory().expect("Failed to open in-memory database");
    let err = handle::publish(second).unwrap_err();
    assert!(matches!(err, BootstrapError::AlreadyInitialized));

    let current = handle::get().expect("Handle should still be published");
    assert!(std::ptr::eq(current, shared));

    let info = current
        .lock()
        .expect("Handle lock poisoned")
        .info()
        .expect("Failed to read info");
    assert_eq!(info.table_count, 1);
    assert_eq!(
        info.path.as_deref(),
        Some(temp_dir.path().join("gorm.db").as_path())
    );
}
