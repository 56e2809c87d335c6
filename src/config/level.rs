use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// The `[telemetry]` section: default filter for the stderr log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetrySection {
    pub level: String,
}

impl Default for TelemetrySection {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawTelemetrySection {
    pub level: Option<String>,
}

pub fn parse_telemetry_section(
    raw: Option<RawTelemetrySection>,
    path: &Path,
) -> Result<TelemetrySection, ConfigError> {
    let telemetry_raw = raw.unwrap_or_default();
    let level = match telemetry_raw.level {
        Some(value) => validate_level(&value, path)?,
        None => DEFAULT_LOG_LEVEL.to_string(),
    };
    Ok(TelemetrySection { level })
}

fn validate_level(value: &str, path: &Path) -> Result<String, ConfigError> {
    let level = value.trim().to_ascii_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        return Ok(level);
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "telemetry.level",
        message: format!("Use one of {}", LOG_LEVELS.join(", ")),
    })
}
