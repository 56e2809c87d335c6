/// Implements [`Reflect`](crate::Reflect) and [`IsEmpty`](crate::IsEmpty)
/// for types observed only through `Default` + `PartialEq`.
///
/// Such a value reflects as [`Value::Opaque`](crate::reflect::Value::Opaque)
/// and is empty when it equals its default.
///
/// ```
/// #[derive(Debug, Default, PartialEq)]
/// struct Token(u64);
///
/// emptykit::impl_reflect_opaque!(Token);
///
/// assert!(emptykit::is_empty(&Token(0)));
/// assert!(!emptykit::is_empty(&Token(7)));
/// ```
#[macro_export]
macro_rules! impl_reflect_opaque {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Reflect for $ty {
            fn reflect(&self) -> $crate::reflect::Value<'_> {
                $crate::reflect::Value::Opaque(self)
            }
        }

        impl $crate::IsEmpty for $ty {
            fn is_empty(&self) -> bool {
                $crate::empty::check_empty_by_reflect(self)
            }
        }
    )+};
}
