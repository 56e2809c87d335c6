use std::fmt;

use serde::Serialize;

/// Coarse runtime classification of a reflected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Absence marker carrying no value at all.
    #[default]
    Nil,
    Bool,
    Int,
    Uint,
    Float,
    String,
    Slice,
    Array,
    Map,
    Chan,
    Pointer,
    Func,
    Interface,
    UnsafePointer,
    Struct,
    /// Compared against its type's default value.
    Other,
}

impl Kind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Nil => "nil",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Slice => "slice",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Chan => "chan",
            Kind::Pointer => "pointer",
            Kind::Func => "func",
            Kind::Interface => "interface",
            Kind::UnsafePointer => "unsafe_pointer",
            Kind::Struct => "struct",
            Kind::Other => "other",
        }
    }

    /// Kinds whose zero value is an absent reference.
    pub const fn is_nillable(&self) -> bool {
        matches!(
            self,
            Kind::Pointer | Kind::Func | Kind::Interface | Kind::UnsafePointer | Kind::Chan
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
