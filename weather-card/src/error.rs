//! Error types
//!
//! `FetchError` is what the card shows to the user. Its `Display` output is the
//! exact on-screen message; the underlying cause is kept for logs only.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single weather lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Provider answered with a non-success status
    #[error("Location not found")]
    NotFound { status: u16 },

    /// Network, TLS, or body decoding failure
    #[error("Error fetching weather")]
    Transport { detail: String },
}

impl FetchError {
    pub(crate) fn transport(err: impl std::fmt::Display) -> Self {
        FetchError::Transport {
            detail: err.to_string(),
        }
    }
}

/// Failure to load or validate the location dataset
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("could not read location data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("location data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("state \"{0}\" appears more than once")]
    DuplicateState(String),

    #[error("district \"{district}\" appears more than once in {state}")]
    DuplicateDistrict { state: String, district: String },

    #[error("location data contains a blank {0} name")]
    BlankName(&'static str),
}

/// A district selection that does not fit the current state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no state selected")]
    NoStateSelected,

    #[error("district \"{district}\" is not part of {state}")]
    UnknownDistrict { state: String, district: String },
}

/// Startup configuration that cannot be honoured
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("unknown state \"{0}\"")]
    UnknownState(String),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages_are_user_facing() {
        assert_eq!(
            FetchError::NotFound { status: 404 }.to_string(),
            "Location not found"
        );
        assert_eq!(
            FetchError::NotFound { status: 500 }.to_string(),
            "Location not found"
        );
        assert_eq!(
            FetchError::transport("connection refused").to_string(),
            "Error fetching weather"
        );
    }
}
