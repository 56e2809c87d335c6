//! Runtime introspection: kind-tagged value views, type/value handles and
//! the predicates built on them.

use std::any::type_name;

mod handle;
mod impls;
mod kind;
mod value;

pub use handle::{TypeHandle, ValueHandle};
pub use kind::Kind;
pub use value::{Elements, Field, Record, Value, ZeroValue};

/// Deepest pointer chain `is_string_like` follows.
pub const MAX_STRING_INDIRECTION: usize = 2;

/// Produces a kind-tagged view of a value.
///
/// `type_of` and `value_of` have working defaults; the handle types override
/// them to return themselves.
pub trait Reflect {
    fn reflect(&self) -> Value<'_>;

    fn type_of(&self) -> TypeHandle {
        TypeHandle::new(type_name::<Self>(), self.reflect().kind())
    }

    fn value_of(&self) -> ValueHandle<'_> {
        ValueHandle::new(self.type_of(), self.reflect())
    }
}

/// Reflective type handle of `value`. A [`TypeHandle`] is returned unchanged.
pub fn type_of<T: Reflect + ?Sized>(value: &T) -> TypeHandle {
    value.type_of()
}

/// Reflective value handle of `value`. A [`ValueHandle`] is returned unchanged.
pub fn value_of<T: Reflect + ?Sized>(value: &T) -> ValueHandle<'_> {
    value.value_of()
}

/// True when `value` is of pointer kind, whether or not the pointer is present.
/// The absence marker is not pointer-like.
pub fn is_pointer_like<T: Reflect + ?Sized>(value: &T) -> bool {
    value.type_of().kind() == Kind::Pointer
}

/// True for strings and for present pointers to strings, following at most
/// [`MAX_STRING_INDIRECTION`] pointers.
///
/// Pointers are followed only when a runtime target is observable. A
/// [`ValueHandle`] carries its value and answers like the value itself. A
/// [`TypeHandle`] has no target to follow, so it is string-like only when
/// the described type is itself of string kind.
pub fn is_string_like<T: Reflect + ?Sized>(value: &T) -> bool {
    match value.type_of().kind() {
        Kind::String => true,
        Kind::Pointer => match value.reflect() {
            Value::Pointer(Some(target)) => string_behind(target, 1),
            _ => false,
        },
        _ => false,
    }
}

fn string_behind(target: &dyn Reflect, depth: usize) -> bool {
    match target.reflect() {
        Value::Str(_) => true,
        Value::Pointer(Some(next)) if depth < MAX_STRING_INDIRECTION => string_behind(next, depth + 1),
        _ => false,
    }
}
