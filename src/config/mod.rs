//! Load and validate CLI configuration.
use std::{
    env,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod chunk;
pub mod level;
pub mod output;
pub mod telemetry;

pub use chunk::{parse_chunk_section, ChunkSection, RawChunkSection, DEFAULT_CHUNK_SIZE};
pub use level::{
    parse_telemetry_section, RawTelemetrySection, TelemetrySection, DEFAULT_LOG_LEVEL, LOG_LEVELS,
};
pub use output::{parse_output_section, OutputSection, RawOutputSection};

pub const CONFIG_ENV_KEY: &str = "EMPTYKIT_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "emptykit.toml";

/// Top-level configuration container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub chunk: ChunkSection,
    pub output: OutputSection,
    pub telemetry: TelemetrySection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawCliConfig {
    chunk: Option<RawChunkSection>,
    output: Option<RawOutputSection>,
    telemetry: Option<RawTelemetrySection>,
}

impl CliConfig {
    /// Built-in settings, attributed to `source_path`.
    pub fn defaults(source_path: PathBuf) -> Self {
        Self {
            chunk: ChunkSection::default(),
            output: OutputSection::default(),
            telemetry: TelemetrySection::default(),
            source_path,
        }
    }

    /// Resolve the configuration file: an explicit path first, then
    /// `EMPTYKIT_CONFIG_PATH`, then `emptykit.toml`.
    ///
    /// Only the default file may be missing; named files must exist.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        let (path, from_env) = match env::var(CONFIG_ENV_KEY) {
            Ok(value) if !value.trim().is_empty() => (PathBuf::from(value), true),
            _ => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        telemetry::log_env_source(&path, from_env);
        if !from_env && !path.exists() {
            telemetry::log_defaults(&path);
            return Ok(Self::defaults(path));
        }
        Self::load_from_path(path)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            log_failure(&path, &error, "Failed to read configuration file");
            error
        })?;

        let raw: RawCliConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            log_failure(&path, &error, "Failed to parse configuration file");
            error
        })?;

        Self::from_raw(raw, path.clone()).map_err(|err| {
            log_failure(&path, &err, "Failed to validate configuration file");
            err
        })
    }

    fn from_raw(raw: RawCliConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let chunk = parse_chunk_section(raw.chunk, &path)?;
        let output = parse_output_section(raw.output);
        let telemetry = parse_telemetry_section(raw.telemetry, &path)?;

        Ok(Self {
            chunk,
            output,
            telemetry,
            source_path: path,
        })
    }
}

fn log_failure(path: &Path, error: &ConfigError, message: &'static str) {
    error!(
        target: "emptykit::config",
        path = %path.display(),
        reason = %error,
        "{message}"
    );
}
