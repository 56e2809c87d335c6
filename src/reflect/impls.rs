//! `Reflect` for standard library, `serde_json` and `tokio` channel types.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    marker::PhantomData,
    num::{
        NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
    },
    rc::Rc,
    sync::Arc,
};

use serde_json::{Map as JsonMap, Value as JsonValue};
use tokio::sync::mpsc::{Receiver, UnboundedReceiver};

use super::{Elements, Kind, Reflect, Value};

impl Reflect for () {
    fn reflect(&self) -> Value<'_> {
        Value::Nil
    }
}

impl<T: ?Sized> Reflect for PhantomData<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Nil
    }
}

impl Reflect for bool {
    fn reflect(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

macro_rules! reflect_int {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            fn reflect(&self) -> Value<'_> {
                Value::Int(i128::from(*self))
            }
        }
    )*};
}

macro_rules! reflect_uint {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            fn reflect(&self) -> Value<'_> {
                Value::Uint(u128::from(*self))
            }
        }
    )*};
}

reflect_int!(i8, i16, i32, i64, i128);
reflect_uint!(u8, u16, u32, u64, u128);

impl Reflect for isize {
    fn reflect(&self) -> Value<'_> {
        Value::Int(*self as i128)
    }
}

impl Reflect for usize {
    fn reflect(&self) -> Value<'_> {
        Value::Uint(*self as u128)
    }
}

// `get()` widens losslessly; a non-zero integer never reflects as zero.
macro_rules! reflect_nonzero {
    ($variant:ident($wide:ty) => $($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            fn reflect(&self) -> Value<'_> {
                Value::$variant(self.get() as $wide)
            }
        }
    )*};
}

reflect_nonzero!(
    Int(i128) => NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
);
reflect_nonzero!(
    Uint(u128) => NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
);

impl Reflect for f32 {
    fn reflect(&self) -> Value<'_> {
        Value::Float(f64::from(*self))
    }
}

impl Reflect for f64 {
    fn reflect(&self) -> Value<'_> {
        Value::Float(*self)
    }
}

impl Reflect for &str {
    fn reflect(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Reflect for String {
    fn reflect(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Reflect for Cow<'_, str> {
    fn reflect(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Reflect for Box<str> {
    fn reflect(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Reflect for Rc<str> {
    fn reflect(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Reflect for Arc<str> {
    fn reflect(&self) -> Value<'_> {
        Value::Str(self)
    }
}

macro_rules! slice_elements {
    ($($ty:ty),* $(,)?) => {$(
        impl<T: Reflect> Elements for $ty {
            fn len(&self) -> usize {
                <[T]>::len(self)
            }

            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                <[T]>::get(self, index).map(|item| item as &dyn Reflect)
            }
        }

        impl<T: Reflect> Reflect for $ty {
            fn reflect(&self) -> Value<'_> {
                Value::Seq {
                    kind: Kind::Slice,
                    items: self,
                }
            }
        }
    )*};
}

slice_elements!(&[T], Vec<T>, Box<[T]>);

impl<T: Reflect, const N: usize> Elements for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|item| item as &dyn Reflect)
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Value<'_> {
        Value::Seq {
            kind: Kind::Array,
            items: self,
        }
    }
}

impl<T: Reflect> Elements for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        VecDeque::get(self, index).map(|item| item as &dyn Reflect)
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Seq {
            kind: Kind::Slice,
            items: self,
        }
    }
}

// Sets have no positional access; `get` walks the iteration order.
impl<T: Reflect, S> Elements for HashSet<T, S> {
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.iter().nth(index).map(|item| item as &dyn Reflect)
    }
}

impl<T: Reflect, S> Reflect for HashSet<T, S> {
    fn reflect(&self) -> Value<'_> {
        Value::Seq {
            kind: Kind::Slice,
            items: self,
        }
    }
}

impl<T: Reflect> Elements for BTreeSet<T> {
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.iter().nth(index).map(|item| item as &dyn Reflect)
    }
}

impl<T: Reflect> Reflect for BTreeSet<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Seq {
            kind: Kind::Slice,
            items: self,
        }
    }
}

impl<K, V, S> Reflect for HashMap<K, V, S> {
    fn reflect(&self) -> Value<'_> {
        Value::Map { len: self.len() }
    }
}

impl<K, V> Reflect for BTreeMap<K, V> {
    fn reflect(&self) -> Value<'_> {
        Value::Map { len: self.len() }
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Pointer(self.as_ref().map(|target| target as &dyn Reflect))
    }
}

macro_rules! reflect_pointer {
    ($($ty:ty),* $(,)?) => {$(
        impl<T: Reflect> Reflect for $ty {
            fn reflect(&self) -> Value<'_> {
                let target: &T = self;
                Value::Pointer(Some(target))
            }
        }
    )*};
}

reflect_pointer!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

// Type-erased boxes behave like interface values: only presence is observable.
impl Reflect for Box<dyn Reflect + '_> {
    fn reflect(&self) -> Value<'_> {
        Value::Handle {
            kind: Kind::Interface,
            nil: false,
        }
    }
}

impl<T: ?Sized> Reflect for *const T {
    fn reflect(&self) -> Value<'_> {
        Value::Handle {
            kind: Kind::UnsafePointer,
            nil: self.is_null(),
        }
    }
}

impl<T: ?Sized> Reflect for *mut T {
    fn reflect(&self) -> Value<'_> {
        Value::Handle {
            kind: Kind::UnsafePointer,
            nil: self.is_null(),
        }
    }
}

macro_rules! reflect_fn {
    ($(($($arg:ident),*)),* $(,)?) => {$(
        impl<R, $($arg),*> Reflect for fn($($arg),*) -> R {
            fn reflect(&self) -> Value<'_> {
                Value::Handle {
                    kind: Kind::Func,
                    nil: false,
                }
            }
        }
    )*};
}

reflect_fn!((), (A), (A, B), (A, B, C), (A, B, C, D));

impl<T> Reflect for Receiver<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Chan { len: self.len() }
    }
}

impl<T> Reflect for UnboundedReceiver<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Chan { len: self.len() }
    }
}

impl Reflect for JsonValue {
    fn reflect(&self) -> Value<'_> {
        match self {
            JsonValue::Null => Value::Nil,
            JsonValue::Bool(value) => Value::Bool(*value),
            JsonValue::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Value::Int(i128::from(value))
                } else if let Some(value) = number.as_u64() {
                    Value::Uint(u128::from(value))
                } else {
                    Value::Float(number.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(text) => Value::Str(text),
            JsonValue::Array(items) => Value::Seq {
                kind: Kind::Slice,
                items,
            },
            JsonValue::Object(entries) => Value::Map { len: entries.len() },
        }
    }
}

impl Reflect for JsonMap<String, JsonValue> {
    fn reflect(&self) -> Value<'_> {
        Value::Map { len: self.len() }
    }
}

impl Reflect for Value<'_> {
    fn reflect(&self) -> Value<'_> {
        *self
    }
}

crate::impl_reflect_opaque!(
    char,
    Kind,
    std::time::Duration,
    std::path::PathBuf,
    std::ffi::OsString,
);
