//! Procedural macros for tola-strong
//!
//! | Macro            | Target      | Purpose                              |
//! |------------------|-------------|--------------------------------------|
//! | `#[derive(Tag)]` | struct/enum | Mark a type as a strong-type tag     |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Tag)]
//! enum MetresTag {}
//!
//! type Metres = tola_strong::Quantity<f64, MetresTag>;
//!
//! // Debug renders as `Metres(2.5)`
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// Derive Macros
// =============================================================================

/// Derive macro for strong-type tags.
///
/// The display name is the type name with a trailing `Tag` removed:
/// `DayTag` is shown as `Day`, `Celsius` stays `Celsius`.
///
/// # Usage
/// ```ignore
/// #[derive(Tag)]
/// enum DayTag {}
///
/// #[derive(Tag)]
/// #[tag(name = "metres")]
/// enum LengthTag {}
/// ```
#[proc_macro_derive(Tag, attributes(tag))]
pub fn derive_tag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_tag(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
