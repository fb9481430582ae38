use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput};

use crate::common::{display_name, TagArgs};

/// #[derive(Tag)] implements `::tola_strong::Tag` with the tag's display name.
///
/// Tags are usually uninhabited enums; structs are accepted so that
/// generic or unit tags also work. Unions are rejected.
pub fn expand_derive_tag(input: DeriveInput) -> syn::Result<TokenStream2> {
    if let Data::Union(data) = &input.data {
        return Err(syn::Error::new(
            data.union_token.span,
            "Tag cannot be derived for unions",
        ));
    }

    let args = TagArgs::from_attrs(&input.attrs)?;
    let name = match args.name {
        Some(lit) => lit.value(),
        None => display_name(&input.ident),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tola_strong::Tag for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
        }
    })
}
