use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_quote, Data, DeriveInput, Error, Field, Fields, Generics, Index, LitStr, Member,
};

struct RecordField {
    label: LitStr,
    member: Member,
}

pub fn expand_reflect(input: &DeriveInput) -> Result<TokenStream2, Error> {
    let fields = collect_fields(input)?;
    let name = &input.ident;
    let generics = bounded_generics(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let entries = fields.iter().map(|RecordField { label, member }| {
        quote! { ::emptykit::reflect::Field::new(#label, &self.#member) }
    });

    Ok(quote! {
        impl #impl_generics ::emptykit::Reflect for #name #ty_generics #where_clause {
            fn reflect(&self) -> ::emptykit::reflect::Value<'_> {
                ::emptykit::reflect::Value::Struct(self)
            }
        }

        impl #impl_generics ::emptykit::Record for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::emptykit::reflect::Field<'_>> {
                ::std::vec![#(#entries),*]
            }
        }
    })
}

pub fn expand_is_empty(input: &DeriveInput) -> Result<TokenStream2, Error> {
    require_struct(input)?;
    let name = &input.ident;
    let generics = bounded_generics(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::emptykit::IsEmpty for #name #ty_generics #where_clause {
            fn is_empty(&self) -> bool {
                ::emptykit::empty::check_empty_by_reflect(self)
            }
        }
    })
}

fn require_struct(input: &DeriveInput) -> Result<&Fields, Error> {
    match &input.data {
        Data::Struct(data) => Ok(&data.fields),
        Data::Enum(_) | Data::Union(_) => Err(Error::new_spanned(
            &input.ident,
            "emptykit derives only support structs",
        )),
    }
}

fn collect_fields(input: &DeriveInput) -> Result<Vec<RecordField>, Error> {
    let mut output = Vec::new();

    for (index, field) in require_struct(input)?.iter().enumerate() {
        if is_skipped(field)? {
            continue;
        }

        let (label, member) = match &field.ident {
            Some(ident) => (
                LitStr::new(&ident.to_string(), ident.span()),
                Member::Named(ident.clone()),
            ),
            None => (
                LitStr::new(&index.to_string(), proc_macro2::Span::call_site()),
                Member::Unnamed(Index::from(index)),
            ),
        };

        output.push(RecordField { label, member });
    }

    Ok(output)
}

fn is_skipped(field: &Field) -> Result<bool, Error> {
    let mut skip = false;

    for attr in &field.attrs {
        if !attr.path().is_ident("reflect") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unknown reflect attribute, expected `skip`"))
            }
        })?;
    }

    Ok(skip)
}

fn bounded_generics(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<_> = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();

    let where_clause = generics.make_where_clause();
    for ident in params {
        where_clause
            .predicates
            .push(parse_quote!(#ident: ::emptykit::Reflect));
    }

    generics
}
