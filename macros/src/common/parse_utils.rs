//! Common parsing utilities
//!
//! Helper attribute parsing for `#[derive(Tag)]`.

use syn::{Attribute, Ident, LitStr};

// =============================================================================
// Helper Attribute: `#[tag(name = "...")]`
// =============================================================================

/// Options collected from `#[tag(...)]` attributes.
#[derive(Default)]
pub struct TagArgs {
    pub name: Option<LitStr>,
}

impl TagArgs {
    /// Collect options from every `#[tag(...)]` on the item.
    ///
    /// Unknown keys and repeated `name` are errors.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut args = TagArgs::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("tag")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    if args.name.is_some() {
                        return Err(meta.error("duplicate `name`"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "tag name must not be empty"));
                    }
                    args.name = Some(lit);
                    Ok(())
                } else {
                    Err(meta.error("unsupported tag attribute, expected `name`"))
                }
            })?;
        }
        Ok(args)
    }
}

// =============================================================================
// Name Derivation
// =============================================================================

/// Display name for a tag type: the identifier without a trailing `Tag`.
///
/// A bare `Tag` keeps its name.
pub fn display_name(ident: &Ident) -> String {
    let full = ident.to_string();
    let full = full.strip_prefix("r#").unwrap_or(&full).to_string();
    match full.strip_suffix("Tag") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => full,
    }
}
