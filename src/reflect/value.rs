//! Reflected value views and the traits that feed them.

use std::{fmt, ptr};

use super::{Kind, Reflect};

/// A user-defined record whose fields can be walked in declaration order.
///
/// Usually derived with `#[derive(Reflect)]`.
pub trait Record {
    fn fields(&self) -> Vec<Field<'_>>;
}

/// One named field of a [`Record`].
#[derive(Clone, Copy)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: &'a dyn Reflect,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: &'a dyn Reflect) -> Self {
        Self { name, value }
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("value", &self.value.reflect())
            .finish()
    }
}

/// Indexed access to the elements of a reflected sequence.
pub trait Elements {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Comparison against the default value of the implementing type.
pub trait ZeroValue {
    fn is_zero_value(&self) -> bool;
}

impl<T: Default + PartialEq> ZeroValue for T {
    fn is_zero_value(&self) -> bool {
        *self == T::default()
    }
}

/// Borrowed, kind-tagged view of a value.
///
/// Every variant maps to exactly one emptiness rule, so dispatch over this
/// enum is total.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    Nil,
    Bool(bool),
    Int(i128),
    Uint(u128),
    Float(f64),
    Str(&'a str),
    /// Ordered elements; `kind` is [`Kind::Slice`] or [`Kind::Array`].
    Seq {
        kind: Kind,
        items: &'a dyn Elements,
    },
    Map {
        len: usize,
    },
    /// Messages currently queued in a channel.
    Chan {
        len: usize,
    },
    /// A reference that may be absent. Present targets are reflected lazily.
    Pointer(Option<&'a dyn Reflect>),
    /// Function, interface box or raw pointer: only presence is observable.
    Handle {
        kind: Kind,
        nil: bool,
    },
    Struct(&'a dyn Record),
    Opaque(&'a dyn ZeroValue),
}

impl<'a> Value<'a> {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::String,
            Value::Seq { kind, .. } => *kind,
            Value::Map { .. } => Kind::Map,
            Value::Chan { .. } => Kind::Chan,
            Value::Pointer(_) => Kind::Pointer,
            Value::Handle { kind, .. } => *kind,
            Value::Struct(_) => Kind::Struct,
            Value::Opaque(_) => Kind::Other,
        }
    }

    /// Length for kinds that have one.
    pub fn length(&self) -> Option<usize> {
        match self {
            Value::Str(text) => Some(text.len()),
            Value::Seq { items, .. } => Some(items.len()),
            Value::Map { len } | Value::Chan { len } => Some(*len),
            _ => None,
        }
    }

    /// True for the absence marker and for absent references.
    pub fn is_nil(&self) -> bool {
        matches!(
            self,
            Value::Nil | Value::Pointer(None) | Value::Handle { nil: true, .. }
        )
    }

    /// The value a present pointer refers to.
    pub fn elem(&self) -> Option<Value<'a>> {
        match *self {
            Value::Pointer(Some(target)) => Some(target.reflect()),
            _ => None,
        }
    }

    /// Fields of a record, in declaration order.
    pub fn fields(&self) -> Option<Vec<Field<'a>>> {
        match *self {
            Value::Struct(record) => Some(record.fields()),
            _ => None,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            Value::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Value::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Value::Uint(value) => f.debug_tuple("Uint").field(value).finish(),
            Value::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Value::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Value::Seq { kind, items } => f
                .debug_struct("Seq")
                .field("kind", kind)
                .field("len", &items.len())
                .finish(),
            Value::Map { len } => f.debug_struct("Map").field("len", len).finish(),
            Value::Chan { len } => f.debug_struct("Chan").field("len", len).finish(),
            Value::Pointer(None) => f.write_str("Pointer(nil)"),
            Value::Pointer(Some(target)) => {
                f.debug_tuple("Pointer").field(&target.reflect()).finish()
            }
            Value::Handle { kind, nil } => f
                .debug_struct("Handle")
                .field("kind", kind)
                .field("nil", nil)
                .finish(),
            Value::Struct(record) => f.debug_tuple("Struct").field(&record.fields()).finish(),
            Value::Opaque(_) => f.write_str("Opaque"),
        }
    }
}

/// Identity comparison: scalars by value (floats by bit pattern), borrowed
/// targets by address.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (
                Value::Seq { kind: ka, items: a },
                Value::Seq { kind: kb, items: b },
            ) => ka == kb && ptr::addr_eq(*a, *b),
            (Value::Map { len: a }, Value::Map { len: b }) => a == b,
            (Value::Chan { len: a }, Value::Chan { len: b }) => a == b,
            (Value::Pointer(None), Value::Pointer(None)) => true,
            (Value::Pointer(Some(a)), Value::Pointer(Some(b))) => ptr::addr_eq(*a, *b),
            (Value::Handle { kind: ka, nil: na }, Value::Handle { kind: kb, nil: nb }) => {
                ka == kb && na == nb
            }
            (Value::Struct(a), Value::Struct(b)) => ptr::addr_eq(*a, *b),
            (Value::Opaque(a), Value::Opaque(b)) => ptr::addr_eq(*a, *b),
            _ => false,
        }
    }
}
