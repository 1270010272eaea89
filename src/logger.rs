//! Logging for folio
//!
//! Two sinks: an in-memory [`Logger`] whose history backs the logs dialog, and an
//! optional `fern` file dispatch behind the `log` facade. The terminal itself is
//! never written to while the UI is running.

use crate::config::LoggingConfig;
use crate::constants::LOG_HISTORY_LIMIT;
use crate::utils::time::LOG_TIME_FORMAT;
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    limit: usize,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_limit(LOG_HISTORY_LIMIT)
    }

    /// Keep at most `limit` entries, dropping the oldest
    pub fn with_limit(limit: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            limit: limit.max(1),
        }
    }

    /// Add a log entry; it is mirrored to the `log` facade at debug level
    pub fn log(&self, message: String) {
        log::debug!("{}", message);

        let timestamp = Local::now().format(LOG_TIME_FORMAT).to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > self.limit {
                let overflow = logs.len() - self.limit;
                logs.drain(..overflow);
            }
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Default location of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("folio").join("folio.log"))
}

/// Build a file dispatch writing timestamped lines to `path`
pub fn build_file_dispatch(path: &Path) -> Result<fern::Dispatch> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                Local::now().format(LOG_TIME_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Warn)
        .level_for("folio", log::LevelFilter::Debug)
        .chain(file))
}

/// Install the global file logger when logging is enabled.
///
/// Returns the log file path, or `None` when logging is disabled.
pub fn init_file_logging(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    build_file_dispatch(&path)?
        .apply()
        .context("Failed to install file logger")?;

    log::info!("Logging to {}", path.display());
    Ok(Some(path))
}
