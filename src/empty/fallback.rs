//! Reflective emptiness for kinds without a direct impl.

use std::{rc::Rc, sync::Arc};

use tokio::sync::mpsc::{Receiver, UnboundedReceiver};

use super::IsEmpty;
use crate::reflect::{Elements, Kind, Record, Reflect, TypeHandle, Value, ValueHandle};

/// Emptiness of any reflectable value, decided on its [`Value`] view.
pub fn check_empty_by_reflect<T: Reflect + ?Sized>(value: &T) -> bool {
    check_value(&value.reflect())
}

/// Per-kind emptiness rule.
pub fn check_value(value: &Value<'_>) -> bool {
    match *value {
        Value::Nil => true,
        Value::Bool(flag) => !flag,
        Value::Int(number) => number == 0,
        Value::Uint(number) => number == 0,
        Value::Float(number) => number == 0.0 || number.is_nan(),
        Value::Str(text) => text.is_empty(),
        Value::Struct(record) => is_struct_empty(record),
        Value::Seq { items, .. } => Elements::is_empty(items),
        Value::Map { len } | Value::Chan { len } => len == 0,
        Value::Pointer(_) | Value::Handle { .. } | Value::Opaque(_) => is_zero(value),
    }
}

/// Whether `value` equals the zero value of its type.
///
/// Pointers recurse into their target; functions, interface boxes and raw
/// pointers are zero only when absent.
pub fn is_zero(value: &Value<'_>) -> bool {
    match *value {
        Value::Handle { nil, .. } => nil,
        Value::Chan { .. } => false,
        Value::Pointer(None) => true,
        Value::Pointer(Some(target)) => is_zero(&target.reflect()),
        Value::Struct(record) => is_struct_empty(record),
        Value::Nil => true,
        Value::Bool(flag) => !flag,
        Value::Int(number) => number == 0,
        Value::Uint(number) => number == 0,
        Value::Float(number) => number == 0.0,
        Value::Str(text) => text.is_empty(),
        Value::Seq {
            kind: Kind::Array,
            items,
        } => (0..items.len()).all(|index| match items.get(index) {
            Some(item) => is_zero(&item.reflect()),
            None => true,
        }),
        Value::Seq { items, .. } => Elements::is_empty(items),
        Value::Map { len } => len == 0,
        Value::Opaque(opaque) => opaque.is_zero_value(),
    }
}

/// True when every field, in declaration order, is a zero value.
pub fn is_struct_empty(record: &dyn Record) -> bool {
    record
        .fields()
        .iter()
        .all(|field| is_zero(&field.value.reflect()))
}

impl<T: Reflect> IsEmpty for Option<T> {
    fn is_empty(&self) -> bool {
        check_empty_by_reflect(self)
    }
}

macro_rules! reflect_is_empty {
    ($($ty:ty),* $(,)?) => {$(
        impl<T: Reflect> IsEmpty for $ty {
            fn is_empty(&self) -> bool {
                check_empty_by_reflect(self)
            }
        }
    )*};
}

reflect_is_empty!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<T> IsEmpty for Receiver<T> {
    fn is_empty(&self) -> bool {
        check_empty_by_reflect(self)
    }
}

impl<T> IsEmpty for UnboundedReceiver<T> {
    fn is_empty(&self) -> bool {
        check_empty_by_reflect(self)
    }
}

impl IsEmpty for Box<dyn Reflect + '_> {
    fn is_empty(&self) -> bool {
        check_empty_by_reflect(self)
    }
}

impl<T: ?Sized> IsEmpty for *const T {
    fn is_empty(&self) -> bool {
        check_empty_by_reflect(self)
    }
}

impl<T: ?Sized> IsEmpty for *mut T {
    fn is_empty(&self) -> bool {
        check_empty_by_reflect(self)
    }
}

macro_rules! fn_is_empty {
    ($(($($arg:ident),*)),* $(,)?) => {$(
        impl<R, $($arg),*> IsEmpty for fn($($arg),*) -> R {
            fn is_empty(&self) -> bool {
                check_empty_by_reflect(self)
            }
        }
    )*};
}

fn_is_empty!((), (A), (A, B), (A, B, C), (A, B, C, D));

impl IsEmpty for Value<'_> {
    fn is_empty(&self) -> bool {
        check_value(self)
    }
}

impl IsEmpty for ValueHandle<'_> {
    fn is_empty(&self) -> bool {
        check_value(&self.value())
    }
}

impl IsEmpty for TypeHandle {
    fn is_empty(&self) -> bool {
        check_empty_by_reflect(self)
    }
}
