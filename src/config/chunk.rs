use std::path::Path;

use serde::Deserialize;

use crate::{lib::errors::ConfigError, seq::MIN_CHUNK_SIZE};

pub const DEFAULT_CHUNK_SIZE: isize = 2;

/// Defaults for the `chunk` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSection {
    pub default_size: isize,
}

impl Default for ChunkSection {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawChunkSection {
    pub default_size: Option<i64>,
}

pub fn parse_chunk_section(
    raw: Option<RawChunkSection>,
    path: &Path,
) -> Result<ChunkSection, ConfigError> {
    let chunk_raw = raw.unwrap_or_default();
    let default_size = match chunk_raw.default_size {
        Some(value) => validate_size(value, path)?,
        None => DEFAULT_CHUNK_SIZE,
    };
    Ok(ChunkSection { default_size })
}

fn validate_size(value: i64, path: &Path) -> Result<isize, ConfigError> {
    match isize::try_from(value) {
        Ok(size) if size >= MIN_CHUNK_SIZE => Ok(size),
        _ => Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "chunk.default_size",
            message: format!("Use a size of at least {MIN_CHUNK_SIZE}, got {value}"),
        }),
    }
}
