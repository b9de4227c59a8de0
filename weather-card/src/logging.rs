//! Tracing setup
//!
//! The terminal belongs to the UI, so logs go to a file or nowhere.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Install the global subscriber when `log_file` is set; no-op otherwise.
///
/// Level comes from `RUST_LOG`, defaulting to `info`.
pub fn init(log_file: Option<&Path>) -> Result<(), ConfigError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ConfigError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    if installed.is_ok() {
        tracing::info!(path = %path.display(), "logging started");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_is_noop() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn test_unwritable_path_reports_error() {
        let err = init(Some(Path::new("/nonexistent-dir/weather.log"))).unwrap_err();
        assert!(matches!(err, ConfigError::LogFile { .. }));
    }
}
