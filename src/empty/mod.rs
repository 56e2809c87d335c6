//! The "is this value empty" predicate.
//!
//! Common concrete kinds answer directly; pointers, channels, records and
//! other reflected values go through [`check_empty_by_reflect`].

mod fallback;
mod fast;

pub use fallback::{check_empty_by_reflect, check_value, is_struct_empty, is_zero};

/// Values that can be judged empty.
///
/// Records get an impl from `#[derive(IsEmpty)]`, which routes through
/// [`check_empty_by_reflect`].
pub trait IsEmpty {
    fn is_empty(&self) -> bool;
}

/// Whether `value` carries no meaningful content.
///
/// Total over every `IsEmpty` type: never fails, never mutates `value`.
pub fn is_empty<T: IsEmpty + ?Sized>(value: &T) -> bool {
    T::is_empty(value)
}
