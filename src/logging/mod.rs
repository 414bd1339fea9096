//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a daily file
//! named `crabbank_<date>.log` in the configured log directory (default:
//! `~/.local/share/crabbank/logs/`). `RUST_LOG` overrides the configured level.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Path of today's log file inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    log_dir.join(format!("crabbank_{}.log", date))
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("crabbank={}", level)))
}

/// Install the global subscriber. Returns the file being written, or `None`
/// when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let path = log_file_path(&log_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
        .with_context(|| "Failed to install log subscriber")?;

    Ok(Some(path))
}

/// Like [`init`], but a log file that cannot be opened only costs the
/// diagnostics; the app still starts.
pub fn init_or_warn(config: &LoggingConfig) -> Option<PathBuf> {
    match init(config) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name_has_date() {
        let path = log_file_path(Path::new("/tmp/logs"));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("crabbank_"));
        assert!(name.ends_with(".log"));
        // crabbank_YYYY-MM-DD.log
        assert_eq!(name.len(), "crabbank_".len() + 10 + ".log".len());
        assert_eq!(path.parent(), Some(Path::new("/tmp/logs")));
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let cfg = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert!(init(&cfg).unwrap().is_none());
    }

    #[test]
    fn test_unwritable_log_dir_does_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        // a regular file where the log directory should be
        let blocker = dir.path().join("logs");
        std::fs::write(&blocker, "not a directory").unwrap();
        let cfg = LoggingConfig {
            enabled: true,
            log_dir: blocker.join("nested").to_string_lossy().into_owned(),
            ..LoggingConfig::default()
        };
        assert!(init(&cfg).is_err());
        assert!(init_or_warn(&cfg).is_none());
    }
}
