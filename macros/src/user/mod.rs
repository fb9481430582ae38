//! User-facing macro implementations
//!
//! | Macro            | Usage         | Purpose                  |
//! |------------------|---------------|--------------------------|
//! | `#[derive(Tag)]` | on struct/enum | Define a strong-type tag |

mod tag;

pub use tag::expand_derive_tag;
