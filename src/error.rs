use std::path::PathBuf;

use thiserror::Error;

/// Error returned by every codec operation.
///
/// Each variant carries a fixed message; the underlying `serde_json` or I/O
/// error is kept as the `source()` for diagnostics.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("error serializing to JSON")]
    Serialization(#[source] serde_json::Error),
    #[error("error deserializing JSON")]
    Deserialization(#[source] serde_json::Error),
    #[error("error parsing JSON into a tree")]
    Parse(#[source] serde_json::Error),
    #[error("error reading JSON from file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse failure family of a [`JsonError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Serialization,
    Deserialization,
    Parse,
    Io,
}

impl JsonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Deserialization(_) => ErrorCategory::Deserialization,
            Self::Parse(_) => ErrorCategory::Parse,
            Self::Io { .. } => ErrorCategory::Io,
        }
    }

    /// The `serde_json` error behind this failure, if any.
    pub fn json_cause(&self) -> Option<&serde_json::Error> {
        match self {
            Self::Serialization(e) | Self::Deserialization(e) | Self::Parse(e) => Some(e),
            Self::Io { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, JsonError>;
