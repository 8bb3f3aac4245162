// Unit tests for logger module initialization logic
// Tests focus on idempotency and error handling

use crate::logger::{LOG_FILE_NAME, initialize, level_for, open_log_file};

use std::path::PathBuf;

use log::LevelFilter;
use tempfile::TempDir;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: fern's `apply()` errors when a global logger is
/// already set. A second call must not turn into a startup failure.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A valid temporary directory
    let temp_dir = TempDir::new().unwrap();

    // WHEN: Calling initialize twice
    let result1 = initialize(Some(temp_dir.path()), false);
    let result2 = initialize(Some(temp_dir.path()), false);

    // THEN: Both should return Ok and the log file exists
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
    assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
}

/// **VALUE**: Verifies that an unusable log directory is reported, not panicked on.
///
/// **BUG THIS CATCHES**: Would catch if `fern::log_file()` is unwrapped.
#[test]
fn given_invalid_log_dir_when_opening_log_file_then_returns_error() {
    // GIVEN: A path that cannot be a directory
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Opening the log file
    let result = open_log_file(&invalid_dir);

    // THEN: Docdesk error
    let err = result.expect_err("Should return error for invalid log directory");
    assert!(
        format!("{err:?}").contains("Docdesk"),
        "Error should be DocdeskError::Docdesk variant"
    );
}

#[test]
fn given_verbose_flag_when_choosing_level_then_debug_is_used() {
    assert_eq!(level_for(true), LevelFilter::Debug);
    assert!(level_for(false) >= LevelFilter::Info);
}
