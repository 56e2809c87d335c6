//! Derive macros for `emptykit::Reflect` and `emptykit::IsEmpty`.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod record;

/// Implements `Reflect` and `Record` for a struct.
///
/// Fields are exposed in declaration order. Tuple fields are named by
/// index. `#[reflect(skip)]` hides a field from reflection, so it never
/// counts against emptiness.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn reflect_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match record::expand_reflect(&input) {
        Ok(output) => output.into(),
        Err(e) => e.into_compile_error().into(),
    }
}

/// Implements `IsEmpty` through the reflective fallback. The type must also
/// implement `Reflect`, usually by deriving it.
#[proc_macro_derive(IsEmpty)]
pub fn is_empty_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match record::expand_is_empty(&input) {
        Ok(output) => output.into(),
        Err(e) => e.into_compile_error().into(),
    }
}
