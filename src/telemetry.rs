use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, Mode};
use crate::error::{LedgerError, Result};

/// Where log events end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(String),
    Stderr,
    Disabled,
}

/// The terminal widget owns stdout and stderr, so it only logs when a file
/// is configured.
pub fn log_target(config: &AppConfig, mode: Mode) -> LogTarget {
    match (&config.log_file, mode) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Mode::Shell) => LogTarget::Stderr,
        (None, Mode::Tui) => LogTarget::Disabled,
    }
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| LedgerError::Logging(format!("bad log filter '{}': {}", level, e)))
}

/// Installs the global subscriber.
pub fn init(config: &AppConfig, mode: Mode) -> Result<()> {
    let filter = build_filter(&config.log_level)?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match log_target(config, mode) {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::Disabled => return Ok(()),
    };

    installed.map_err(|e| LedgerError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(log_level: &str, log_file: Option<&str>) -> AppConfig {
        AppConfig {
            log_level: log_level.to_string(),
            log_file: log_file.map(str::to_string),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_log_target_per_mode() {
        let no_file = settings("info", None);
        assert_eq!(log_target(&no_file, Mode::Tui), LogTarget::Disabled);
        assert_eq!(log_target(&no_file, Mode::Shell), LogTarget::Stderr);

        let with_file = settings("info", Some("ledger.log"));
        let expected = LogTarget::File("ledger.log".to_string());
        assert_eq!(log_target(&with_file, Mode::Tui), expected);
        assert_eq!(log_target(&with_file, Mode::Shell), expected);
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let result = init(&settings("ledger=loud", None), Mode::Shell);
        assert!(matches!(result, Err(LedgerError::Logging(msg)) if msg.contains("ledger=loud")));
    }

    #[test]
    fn test_tui_without_log_file_installs_nothing() {
        assert!(init(&settings("info", None), Mode::Tui).is_ok());
    }

    #[test]
    fn test_tui_logs_go_to_configured_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("ledger.log");
        let path_str = path.to_str().expect("utf8 path");

        init(&settings("info", Some(path_str)), Mode::Tui).expect("init failed");
        tracing::info!("written to the ledger log file");

        let contents = std::fs::read_to_string(&path).expect("read log");
        assert!(contents.contains("written to the ledger log file"));
    }
}
