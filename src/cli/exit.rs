//! Mapping of command failures to process exit codes.
use std::process::ExitCode;

use anyhow::Error;
use serde_json::json;

use crate::lib::errors::{ChunkError, ConfigError};

/// Exit status for rejected arguments.
pub const INVALID_ARGUMENT_EXIT: u8 = 2;
/// Exit status for unreadable or invalid configuration.
pub const CONFIG_EXIT: u8 = 3;
const FAILURE_EXIT: u8 = 1;

/// A failed CLI run, ready to be reported on stderr.
#[derive(Debug)]
pub struct CliExit {
    message: String,
    code: u8,
    error_data: Option<serde_json::Value>,
}

impl CliExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        if let Some(chunk) = err.downcast_ref::<ChunkError>() {
            return Self {
                message: chunk.to_string(),
                code: INVALID_ARGUMENT_EXIT,
                error_data: Some(json!({
                    "kind": chunk.kind(),
                    "message": chunk.to_string(),
                })),
            };
        }
        let code = if err.downcast_ref::<ConfigError>().is_some() {
            CONFIG_EXIT
        } else {
            FAILURE_EXIT
        };
        Self {
            message: format!("{err:?}"),
            code,
            error_data: None,
        }
    }

    pub fn report(self) -> ExitCode {
        match &self.error_data {
            Some(data) => eprintln!("{data}"),
            None => eprintln!("{}", self.message),
        }
        ExitCode::from(self.code)
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn error_data(&self) -> Option<&serde_json::Value> {
        self.error_data.as_ref()
    }
}
