//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so logs go to a daily-rolling file under
//! `$CREWGATE_HOME/logs` unless the caller asks for stderr.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Env var holding the log filter directive (e.g. `crewgate_core=debug`).
pub const LOG_ENV: &str = "CREWGATE_LOG";

const LOG_FILE_PREFIX: &str = "crewgate.log";

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Daily-rolling file in the logs directory.
    File,
    /// Standard error (non-interactive commands).
    Stderr,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber.
///
/// The returned guard flushes buffered lines when dropped and must be held
/// for the lifetime of the program.
///
/// # Errors
/// Returns an error if the logs directory cannot be created or a subscriber
/// is already installed.
pub fn init(target: LogTarget) -> Result<WorkerGuard> {
    match target {
        LogTarget::File => init_file(&crate::config::paths::logs_dir()),
        LogTarget::Stderr => {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(writer)
                .with_target(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))?;
            Ok(guard)
        }
    }
}

fn init_file(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))?;
    Ok(guard)
}
