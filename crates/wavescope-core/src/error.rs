//! Error types for wavescope.
//!
//! Missing or empty scan data is never an error: it degrades to an empty view.
//! The only designed failure is a malformed configuration, which is rejected
//! when the settings are read.

use std::path::PathBuf;

use thiserror::Error;

/// A specialized `Result` type for configuration reads.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ── Errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown group_by value {0:?} (expected one of: none, ssid, channel)")]
    UnknownGroupBy(String),
    #[error("unknown sort_by value {0:?} (expected one of: strength, ssid, channel)")]
    UnknownSortBy(String),
    #[error("unknown band value {0:?} (expected one of: all, ghz2, ghz5)")]
    UnknownBand(String),
    #[error("unsupported settings version {0}")]
    UnsupportedVersion(u32),
    #[error("invalid settings TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
