use std::{collections::HashMap, path::PathBuf};

use emptykit::{IsEmpty, Reflect};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_emptykit");

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(relative).display().to_string()
}

/// Record with one field of every commonly checked kind.
#[derive(Debug, Clone, Default, Reflect, IsEmpty)]
pub struct Sample {
    pub id: i64,
    pub count: u32,
    pub ratio: f64,
    pub name: String,
    pub tags: Vec<String>,
    pub labels: HashMap<String, String>,
    pub parent: Option<Box<Sample>>,
    pub enabled: bool,
}

#[derive(Debug, Default, Reflect, IsEmpty)]
pub struct Wrapper<T> {
    pub inner: T,
    #[reflect(skip)]
    pub cache: Vec<u8>,
}

#[derive(Debug, Default, Reflect, IsEmpty)]
pub struct Pair(pub i32, pub &'static str);

#[derive(Debug, Default, Reflect, IsEmpty)]
pub struct Marker;
