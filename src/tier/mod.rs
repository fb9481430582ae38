//! # Layer 1: Capability Tiers
//!
//! A tier is a marker type selecting which operator families a strong
//! type receives. Each family is one sealed trait; a tier opts into a
//! family by implementing it, and the operator impls in `ops` are
//! written once per family against that trait.
//!
//! ```text
//!                      Plain
//!                    /       \
//!              Equality      Logical
//!            /    |    \
//!      Boolean   Bits   Ordered
//!                      /   |    \
//!               Numeric  Offset  Address<O>
//!                  |
//!              Quantity (minus self-multiplication)
//! ```
//!
//! Families are supertraits of each other along the lattice, so a tier
//! can never expose an operator without the ones below it.

pub mod family;
pub mod markers;

pub use family::{
    Tier,
    Equate, Order, Truth, Logic, Bitwise,
    Additive, Arithmetic, Multiplicative, Scalable,
};
pub use markers::{
    Plain, Boolean, Logical, Equality, Bits, Ordered,
    Numeric, Quantity, Offset, Address, Positional,
};

mod sealed {
    pub trait Sealed {}
}
