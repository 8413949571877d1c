//! Tracing setup
//!
//! The terminal belongs to the UI, so logs only go to a file and only when
//! one is requested. Verbosity follows `RUST_LOG` (default `info`).

use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";
const DEFAULT_FILE_NAME: &str = "commit-widget.log";

/// Open (or create) the log file at `path` for appending
///
/// Fails instead of panicking when the file cannot be opened, e.g. when
/// `path` names a directory.
pub fn file_appender(path: &Path) -> io::Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

    std::fs::create_dir_all(dir)?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(io::Error::other)
}

/// Install a file-backed subscriber writing to `path`
///
/// Keep the returned guard alive for the lifetime of the program so buffered
/// lines are flushed on exit.
pub fn init_file_logging(path: &Path) -> io::Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .try_init()
        .map_err(io::Error::other)?;

    Ok(guard)
}
