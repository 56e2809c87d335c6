//! Sequence helpers: fixed-size partitioning and removal of empty elements.

mod chunk;
mod compact;

pub use chunk::{chunk, chunk_slices, MIN_CHUNK_SIZE};
pub use compact::{compact, compact_owned};
