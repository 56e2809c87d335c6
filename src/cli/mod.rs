//! CLI command execution over JSON documents.
use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::{json, Value as JsonValue};

use crate::{
    config::CliConfig,
    empty::is_empty,
    reflect::{is_pointer_like, is_string_like, type_of, Reflect},
    seq::{chunk, compact_owned},
};

pub mod args;
pub mod exit;

pub use args::{ChunkArgs, CliArgs, CliCommand, ValueArgs};
pub use exit::CliExit;

/// Execute a command and return its JSON output.
pub fn execute_command(command: CliCommand, config: &CliConfig) -> Result<String> {
    let payload = match command {
        CliCommand::Check(args) => {
            let value = parse_document(&args.json)?;
            json!({
                "empty": is_empty(&value),
                "kind": value.reflect().kind(),
            })
        }
        CliCommand::Chunk(args) => {
            let value = parse_document(&args.json)?;
            let items = match value {
                JsonValue::Null => None,
                JsonValue::Array(items) => Some(items),
                other => bail!("chunk expects a JSON array, got {}", other.reflect().kind()),
            };
            let size = args.size.unwrap_or(config.chunk.default_size);
            let groups = chunk(items, size).context("chunk command rejected its arguments")?;
            serde_json::to_value(groups)?
        }
        CliCommand::Compact(args) => match parse_document(&args.json)? {
            JsonValue::Array(items) => JsonValue::Array(compact_owned(items)),
            other => bail!("compact expects a JSON array, got {}", other.reflect().kind()),
        },
        CliCommand::Kind(args) => {
            let value = parse_document(&args.json)?;
            let ty = type_of(&value);
            json!({
                "kind": ty.kind(),
                "nil": value.reflect().is_nil(),
                "nillable": ty.kind().is_nillable(),
                "pointer_like": is_pointer_like(&value),
                "string_like": is_string_like(&value),
            })
        }
    };

    render(&payload, config.output.pretty)
}

fn parse_document(input: &str) -> Result<JsonValue> {
    serde_json::from_str(input).with_context(|| format!("invalid JSON input: {input}"))
}

fn render(payload: &impl Serialize, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };
    Ok(rendered)
}
