//! Logging for the docdesk CLI.
//!
//! Colored output on stderr (stdout is reserved for command output), plus an
//! optional plain log file. Initialization runs once per process.

use crate::error::DocdeskError;

use std::fs::File;
use std::io::stderr;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

/// Log file name.
pub const LOG_FILE_NAME: &str = "docdesk.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Default log level for debug builds.
#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Default log level for release builds.
#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// HTTP stack crates that are only interesting when something breaks.
const QUIET_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest", "rustls"];

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::Debug } else { LOG_LEVEL }
}

/// Initialize the logger.
///
/// Safe to call multiple times: later calls log a warning and return Ok.
///
/// # Arguments
///
/// * `log_dir` - Directory for `docdesk.log`; stderr only when `None`
/// * `verbose` - Force debug level in release builds
///
/// # Errors
///
/// Returns an error if the log file cannot be created or the global logger
/// cannot be installed.
pub fn initialize(log_dir: Option<&Path>, verbose: bool) -> Result<(), DocdeskError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());
    let level = level_for(verbose);

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(log_dir, level);
        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
        }
    });

    result
}

#[track_caller]
pub(crate) fn open_log_file(log_dir: &Path) -> Result<File, DocdeskError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);
    fern::log_file(&log_file_path)
        .map_err(|e| DocdeskError::docdesk(format!("Failed to create log file: {e}")))
}

#[track_caller]
fn initialize_internal(log_dir: Option<&Path>, level: LevelFilter) -> Result<(), DocdeskError> {
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let mut base_dispatch = Dispatch::new().level(level);
    for target in QUIET_TARGETS {
        base_dispatch = base_dispatch.level_for(*target, LevelFilter::Warn);
    }

    let stderr_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(stderr());

    base_dispatch = base_dispatch.chain(stderr_dispatch);

    if let Some(dir) = log_dir {
        let file_dispatch = Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0)
                ))
            })
            .chain(open_log_file(dir)?);

        base_dispatch = base_dispatch.chain(file_dispatch);
    }

    base_dispatch
        .apply()
        .map_err(|e| DocdeskError::docdesk(format!("Failed to initialize logger: {e}")))?;

    Ok(())
}
