//! Emptiness checks, sequence chunking/compaction and a small reflection
//! layer for arbitrary Rust values.

extern crate self as emptykit;

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod empty;
mod macros;
pub mod reflect;
pub mod seq;

pub use emptykit_derive::{IsEmpty, Reflect};
pub use empty::{is_empty, IsEmpty};
pub use lib::errors::{ChunkError, ErrorKind};
pub use reflect::{
    is_pointer_like, is_string_like, type_of, value_of, Elements, Kind, Record, Reflect,
    TypeHandle, ValueHandle, ZeroValue,
};
pub use seq::{chunk, chunk_slices, compact, compact_owned};
