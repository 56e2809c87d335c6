//! CLI argument definitions.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "emptykit",
    author,
    version,
    about = "Inspect JSON values for emptiness, chunk and compact JSON arrays",
    long_about = None
)]
pub struct CliArgs {
    /// Path to emptykit.toml (overrides EMPTYKIT_CONFIG_PATH).
    #[arg(long = "config", global = true)]
    pub config_override: Option<PathBuf>,
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Subcommands; every one reads a JSON document and prints JSON.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Report whether a JSON value is empty, and its kind.
    Check(ValueArgs),
    /// Split a JSON array into fixed-size groups.
    Chunk(ChunkArgs),
    /// Drop empty elements from a JSON array.
    Compact(ValueArgs),
    /// Report the kind of a JSON value and its type predicates.
    Kind(ValueArgs),
}

impl CliCommand {
    pub const fn name(&self) -> &'static str {
        match self {
            CliCommand::Check(_) => "check",
            CliCommand::Chunk(_) => "chunk",
            CliCommand::Compact(_) => "compact",
            CliCommand::Kind(_) => "kind",
        }
    }
}

/// A single JSON document argument.
#[derive(Debug, Clone, Args)]
pub struct ValueArgs {
    /// JSON document, e.g. `[0, 1, ""]`.
    #[arg(value_name = "JSON")]
    pub json: String,
}

/// Arguments for `chunk`.
#[derive(Debug, Clone, Args)]
pub struct ChunkArgs {
    /// Group size (defaults to `chunk.default_size`).
    #[arg(long, allow_negative_numbers = true)]
    pub size: Option<isize>,
    /// JSON array to split, or `null`.
    #[arg(value_name = "JSON")]
    pub json: String,
}
