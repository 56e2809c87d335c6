use std::path::Path;

use tracing::{debug, info};

use super::{CliConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_env_source(path: &Path, from_env: bool) {
    if from_env {
        info!(
            target: "emptykit::config",
            path = %path.display(),
            "Loading configuration using EMPTYKIT_CONFIG_PATH environment variable"
        );
    } else {
        debug!(
            target: "emptykit::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "EMPTYKIT_CONFIG_PATH not set; using default emptykit.toml"
        );
    }
}

pub fn log_defaults(path: &Path) {
    debug!(
        target: "emptykit::config",
        path = %path.display(),
        "Default configuration file not found; using built-in defaults"
    );
}

pub fn log_loaded(config: &CliConfig) {
    info!(
        target: "emptykit::config",
        path = %config.source_path.display(),
        chunk_default_size = config.chunk.default_size,
        output_pretty = config.output.pretty,
        telemetry_level = %config.telemetry.level,
        "Configuration resolved"
    );
}
