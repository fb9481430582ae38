//! # Layer 0: Primitives
//!
//! Building blocks shared by every strong type:
//! - `tag.rs`: the `Tag` trait and `SubTag` for subtypes.
//! - `policy.rs`: default-construction policies (`NoDefault`, `Natural`, custom).
//! - `position.rs`: `Displace`, the position types an `Address` can wrap.

pub mod tag;
pub mod policy;
pub mod position;

pub use tag::{Tag, SubTag};
pub use policy::{DefaultValue, NoDefault, Natural};
pub use position::Displace;
