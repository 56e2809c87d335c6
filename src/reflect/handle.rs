use std::fmt;

use serde::Serialize;

use super::{Field, Kind, Record, Reflect, Value};

/// Reflective handle describing a value's runtime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypeHandle {
    name: &'static str,
    kind: Kind,
}

impl TypeHandle {
    pub const fn new(name: &'static str, kind: Kind) -> Self {
        Self { name, kind }
    }

    /// Fully qualified Rust type name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn kind(&self) -> Kind {
        self.kind
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

impl Reflect for TypeHandle {
    fn reflect(&self) -> Value<'_> {
        Value::Struct(self)
    }

    fn type_of(&self) -> TypeHandle {
        *self
    }
}

impl Record for TypeHandle {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("name", &self.name),
            Field::new("kind", &self.kind),
        ]
    }
}

/// Reflective handle pairing a value's current view with its type.
///
/// Borrows through `&dyn Reflect`, so it is neither `Send` nor `Sync`; use
/// [`TypeHandle`] to carry type information across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueHandle<'a> {
    ty: TypeHandle,
    value: Value<'a>,
}

impl<'a> ValueHandle<'a> {
    pub fn new(ty: TypeHandle, value: Value<'a>) -> Self {
        Self { ty, value }
    }

    pub fn type_handle(&self) -> TypeHandle {
        self.ty
    }

    pub fn value(&self) -> Value<'a> {
        self.value
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    pub fn is_nil(&self) -> bool {
        self.value.is_nil()
    }
}

impl Reflect for ValueHandle<'_> {
    fn reflect(&self) -> Value<'_> {
        self.value
    }

    fn type_of(&self) -> TypeHandle {
        self.ty
    }

    fn value_of(&self) -> ValueHandle<'_> {
        *self
    }
}
