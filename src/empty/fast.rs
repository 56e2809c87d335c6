//! Direct emptiness checks for common concrete kinds, no reflection involved.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    num::{
        NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
    },
    rc::Rc,
    sync::Arc,
};

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use super::IsEmpty;

impl IsEmpty for () {
    fn is_empty(&self) -> bool {
        true
    }
}

impl IsEmpty for bool {
    fn is_empty(&self) -> bool {
        !*self
    }
}

macro_rules! int_is_empty {
    ($($ty:ty),* $(,)?) => {$(
        impl IsEmpty for $ty {
            fn is_empty(&self) -> bool {
                *self == 0
            }
        }
    )*};
}

int_is_empty!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! nonzero_is_empty {
    ($($ty:ty),* $(,)?) => {$(
        impl IsEmpty for $ty {
            fn is_empty(&self) -> bool {
                false
            }
        }
    )*};
}

nonzero_is_empty!(
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
);

impl IsEmpty for f32 {
    fn is_empty(&self) -> bool {
        *self == 0.0 || self.is_nan()
    }
}

impl IsEmpty for f64 {
    fn is_empty(&self) -> bool {
        *self == 0.0 || self.is_nan()
    }
}

impl IsEmpty for str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

macro_rules! text_is_empty {
    ($($ty:ty),* $(,)?) => {$(
        impl IsEmpty for $ty {
            fn is_empty(&self) -> bool {
                str::is_empty(self)
            }
        }
    )*};
}

text_is_empty!(&str, String, Cow<'_, str>, Box<str>, Rc<str>, Arc<str>);

impl<T> IsEmpty for [T] {
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

macro_rules! seq_is_empty {
    ($($ty:ty => $check:expr),* $(,)?) => {$(
        impl<T> IsEmpty for $ty {
            fn is_empty(&self) -> bool {
                $check(self)
            }
        }
    )*};
}

seq_is_empty!(
    &[T] => <[T]>::is_empty,
    Vec<T> => Vec::is_empty,
    Box<[T]> => <[T]>::is_empty,
    VecDeque<T> => VecDeque::is_empty,
    BTreeSet<T> => BTreeSet::is_empty,
);

impl<T, const N: usize> IsEmpty for [T; N] {
    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T, S> IsEmpty for HashSet<T, S> {
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl IsEmpty for JsonMap<String, JsonValue> {
    fn is_empty(&self) -> bool {
        JsonMap::is_empty(self)
    }
}

impl IsEmpty for JsonValue {
    fn is_empty(&self) -> bool {
        match self {
            JsonValue::Null => true,
            JsonValue::Bool(value) => !*value,
            JsonValue::Number(number) => number_is_zero(number),
            JsonValue::String(text) => text.is_empty(),
            JsonValue::Array(items) => items.is_empty(),
            JsonValue::Object(entries) => entries.is_empty(),
        }
    }
}

fn number_is_zero(number: &Number) -> bool {
    if let Some(value) = number.as_i64() {
        return value == 0;
    }
    if let Some(value) = number.as_u64() {
        return value == 0;
    }
    match number.as_f64() {
        Some(value) => value == 0.0 || value.is_nan(),
        None => true,
    }
}
