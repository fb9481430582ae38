//! Tier aliases.
//!
//! One alias per tier over `Strong<T, G, K, D>`, parameters in the order
//! value type(s), tag, policy. The policy defaults to `Natural`.

use crate::primitives::{Natural, NoDefault, SubTag};
use crate::strong::{Strong, StrongType};
use crate::tier::{self, Positional};

/// Accessor only.
pub type Plain<T, G, D = Natural> = Strong<T, G, tier::Plain, D>;

/// Wrapped `bool` with equality and explicit conversion to `bool`.
pub type Boolean<G, D = Natural> = Strong<bool, G, tier::Boolean, D>;

/// `!`, `and`, `or`.
pub type Logical<T, G, D = Natural> = Strong<T, G, tier::Logical, D>;

/// `==`, `!=`.
pub type Equality<T, G, D = Natural> = Strong<T, G, tier::Equality, D>;

/// Equality and bitwise operators.
pub type Bits<T, G, D = Natural> = Strong<T, G, tier::Bits, D>;

/// Equality and ordering.
pub type Ordered<T, G, D = Natural> = Strong<T, G, tier::Ordered, D>;

/// Ordering and full arithmetic.
pub type Numeric<T, G, D = Natural> = Strong<T, G, tier::Numeric, D>;

/// Arithmetic without self-multiplication; scales by `T`.
pub type Quantity<T, G, D = Natural> = Strong<T, G, tier::Quantity, D>;

/// Distance between addresses with tag `G`.
pub type Offset<O, G, D = Natural> = Strong<O, G, tier::Offset, D>;

/// Position with underlying type `T`, displaced by `Offset<O, G>`.
pub type Address<T, O, G, D = Natural> = Strong<T, G, tier::Address<O>, D>;

/// The offset type of an address type.
///
/// ```
/// use tola_strong::{define_type, OffsetOf};
///
/// define_type!(Cursor: Address<usize, usize>);
///
/// let moved = Cursor::new(4) + OffsetOf::<Cursor>::new(3);
/// assert_eq!(moved - Cursor::new(4), OffsetOf::<Cursor>::new(3));
/// ```
pub type OffsetOf<A> = Offset<
    <<A as StrongType>::Tier as Positional>::Offset,
    <A as StrongType>::Tag,
>;

/// A distinct strong type with the underlying type and tier of the
/// parent strong type `P`.
pub type Subtype<P, G, D = NoDefault> = Strong<
    <P as StrongType>::Value,
    SubTag<P, G>,
    <P as StrongType>::Tier,
    D,
>;
