use std::{fmt, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use serde::Serialize;
use thiserror::Error;

/// Coarse classification shared by every library failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidArgument,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected arguments to [`chunk`](crate::seq::chunk) and
/// [`chunk_slices`](crate::seq::chunk_slices).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    #[error("the input sequence cannot be absent")]
    MissingInput,
    #[error("the chunk size cannot be smaller than 1, got {size}")]
    SizeTooSmall { size: isize },
}

impl ChunkError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            ChunkError::MissingInput | ChunkError::SizeTooSmall { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::FileRead { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::InvalidField { path, .. } => path,
        }
    }
}
