//! Operator families.
//!
//! One trait per family. The traits carry no items: they only gate the
//! blanket operator impls in `crate::ops`.

use super::sealed::Sealed;

/// Base of every tier. Sealed: the set of tiers is closed.
pub trait Tier: Sealed + 'static {
    /// Human-readable tier name.
    const NAME: &'static str;
}

/// `==` and `!=`.
#[diagnostic::on_unimplemented(
    message = "the `{Self}` tier does not support equality comparison",
    note = "use a tier built on `Equality` (Equality, Bits, Ordered, Numeric, ...)"
)]
pub trait Equate: Tier {}

/// `<`, `>`, `<=`, `>=`.
#[diagnostic::on_unimplemented(
    message = "the `{Self}` tier does not support ordering",
    note = "use a tier built on `Ordered` (Ordered, Numeric, Quantity, Offset, Address)"
)]
pub trait Order: Equate {}

/// Explicit conversion to `bool`.
#[diagnostic::on_unimplemented(
    message = "the `{Self}` tier does not convert to `bool`",
    note = "only the `Boolean` tier converts to `bool`"
)]
pub trait Truth: Equate {}

/// `!`, `and`, `or` on the wrapped value.
#[diagnostic::on_unimplemented(
    message = "the `{Self}` tier does not support logical operators",
    note = "only the `Logical` tier supports `!`, `and` and `or`"
)]
pub trait Logic: Tier {}

/// `&`, `|`, `^`, `<<`, `>>` and their compound forms.
#[diagnostic::on_unimplemented(
    message = "the `{Self}` tier does not support bitwise operators",
    note = "only the `Bits` tier supports bitwise operators"
)]
pub trait Bitwise: Equate {}

/// `+` and `-` closed over one strong type.
#[diagnostic::on_unimplemented(
    message = "the `{Self}` tier cannot add or subtract two values of the same type",
    note = "addresses are displaced by offsets: `address + offset`, `address - address -> offset`"
)]
pub trait Additive: Order {}

/// Negation, increment/decrement and remainder.
#[diagnostic::on_unimplemented(
    message = "the `{Self}` tier does not support arithmetic",
    note = "use the `Numeric` or `Quantity` tier"
)]
pub trait Arithmetic: Additive {}

/// `*` and `/` between two values of the same type.
#[diagnostic::on_unimplemented(
    message = "the `{Self}` tier cannot multiply or divide two values of the same type",
    note = "quantities scale by their underlying scalar: `quantity * scalar`, `quantity / quantity -> scalar`"
)]
pub trait Multiplicative: Arithmetic {}

/// `*` and `/` by the raw underlying scalar.
#[diagnostic::on_unimplemented(
    message = "the `{Self}` tier cannot be scaled by a raw scalar",
    note = "only the `Quantity` tier scales by its underlying type"
)]
pub trait Scalable: Arithmetic {}
