//! Tier markers.
//!
//! Zero-sized, never instantiated. Each implements exactly the families
//! listed in its row of the capability table.

use core::marker::PhantomData;

use super::family::*;
use super::sealed::Sealed;

macro_rules! define_tier {
    ($(#[$meta:meta])* $name:ident: $($family:ident),*) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub enum $name {}

        impl Sealed for $name {}
        impl Tier for $name {
            const NAME: &'static str = stringify!($name);
        }
        $(impl $family for $name {})*
    };
}

define_tier!(
    /// Accessor only, no operators.
    Plain:
);
define_tier!(
    /// Equality and explicit conversion to `bool`.
    Boolean: Equate, Truth
);
define_tier!(
    /// `!`, `and`, `or`.
    Logical: Logic
);
define_tier!(
    /// `==`, `!=`.
    Equality: Equate
);
define_tier!(
    /// Equality and bitwise operators.
    Bits: Equate, Bitwise
);
define_tier!(
    /// Equality and ordering.
    Ordered: Equate, Order
);
define_tier!(
    /// Ordering and full arithmetic.
    Numeric: Equate, Order, Additive, Arithmetic, Multiplicative
);
define_tier!(
    /// Arithmetic that keeps its dimension: no `q * q`, scaling by the raw scalar.
    Quantity: Equate, Order, Additive, Arithmetic, Scalable
);
define_tier!(
    /// Distance between two addresses; closed under `+` and `-`.
    Offset: Equate, Order, Additive
);

/// A position displaced by offsets with underlying type `O`.
///
/// `address - address` is an offset, `address ± offset` is an address,
/// `offset + address` is an address. `address + address` and
/// `offset - address` do not exist.
pub struct Address<O>(PhantomData<fn() -> O>);

impl<O: 'static> Sealed for Address<O> {}
impl<O: 'static> Tier for Address<O> {
    const NAME: &'static str = "Address";
}
impl<O: 'static> Equate for Address<O> {}
impl<O: 'static> Order for Address<O> {}

/// Tiers that model positions, exposing the offset representation.
pub trait Positional: Tier {
    type Offset;
}

impl<O: 'static> Positional for Address<O> {
    type Offset = O;
}
