use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::io::config_io::ConfigError;
use crate::model::config::LogConfig;

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Batch commands log to stderr
    Stderr,
    /// The TUI owns the terminal, so it logs to `[log] file` or nowhere
    Tui,
}

/// `RUST_LOG` wins over the configured level
fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global tracing subscriber. Calling it twice is harmless.
pub fn init_logging(config: &LogConfig, target: LogTarget) -> Result<(), ConfigError> {
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(config))
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .try_init();
        }
        LogTarget::Tui => {
            let Some(path) = &config.file else {
                return Ok(());
            };
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ConfigError::LogFile {
                    path: path.clone(),
                    source,
                })?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(config))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn tui_without_file_installs_nothing() {
        assert!(init_logging(&LogConfig::default(), LogTarget::Tui).is_ok());
    }

    #[test]
    fn unopenable_log_file_is_reported() {
        let tmp = TempDir::new().unwrap();
        let config = LogConfig {
            level: "debug".into(),
            file: Some(tmp.path().join("missing-dir/tasklist.log")),
        };
        let err = init_logging(&config, LogTarget::Tui).unwrap_err();
        assert!(matches!(err, ConfigError::LogFile { .. }));
    }
}
