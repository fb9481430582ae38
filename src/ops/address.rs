//! Addresses and offsets.
//!
//! An address is a position, an offset the distance between two
//! positions. Offsets form their own `Additive` strong type sharing the
//! address's tag; addresses only combine with offsets.
//!
//! The position moves through [`Displace`], so the offset type may differ
//! from the position type: `Address<u32, i64>` or
//! `Address<*const T, isize>` work as well as `Address<usize, usize>`.
//!
//! | expression            | result      |
//! |-----------------------|-------------|
//! | `offset ± offset`     | offset      |
//! | `address - address`   | offset      |
//! | `address ± offset`    | address     |
//! | `offset + address`    | address     |
//! | `address + address`   | not defined |
//! | `offset - address`    | not defined |
//!
//! ```compile_fail
//! use tola_strong::Address;
//!
//! enum CursorTag {}
//! type Cursor = Address<usize, usize, CursorTag>;
//!
//! let nonsense = Cursor::new(4) + Cursor::new(8);
//! ```
//!
//! ```compile_fail
//! use tola_strong::{Address, Offset};
//!
//! enum CursorTag {}
//! type Cursor = Address<usize, usize, CursorTag>;
//! type Step = Offset<usize, CursorTag>;
//!
//! let nonsense = Step::new(4) - Cursor::new(8);
//! ```

use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::Strong;
use crate::primitives::{Displace, Natural};
use crate::tier;

/// The offset type displacing addresses with tag `G`.
type OffsetFor<O, G> = Strong<O, G, tier::Offset, Natural>;

impl<T: Displace<O>, O, G, D> AddAssign<OffsetFor<O, G>> for Strong<T, G, tier::Address<O>, D> {
    #[inline]
    fn add_assign(&mut self, rhs: OffsetFor<O, G>) {
        self.get_mut().displace(rhs.into_value());
    }
}

impl<T: Displace<O>, O, G, D> SubAssign<OffsetFor<O, G>> for Strong<T, G, tier::Address<O>, D> {
    #[inline]
    fn sub_assign(&mut self, rhs: OffsetFor<O, G>) {
        self.get_mut().retreat(rhs.into_value());
    }
}

impl<T: Displace<O>, O, G, D> Add<OffsetFor<O, G>> for Strong<T, G, tier::Address<O>, D> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: OffsetFor<O, G>) -> Self {
        self += rhs;
        self
    }
}

impl<T: Displace<O>, O, G, D> Sub<OffsetFor<O, G>> for Strong<T, G, tier::Address<O>, D> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: OffsetFor<O, G>) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Displace<O>, O, G, D> Add<Strong<T, G, tier::Address<O>, D>> for OffsetFor<O, G> {
    type Output = Strong<T, G, tier::Address<O>, D>;

    #[inline]
    fn add(self, mut rhs: Strong<T, G, tier::Address<O>, D>) -> Self::Output {
        rhs += self;
        rhs
    }
}

impl<T: Displace<O>, O, G, D> Sub for Strong<T, G, tier::Address<O>, D> {
    type Output = OffsetFor<O, G>;

    #[inline]
    fn sub(self, rhs: Self) -> OffsetFor<O, G> {
        Strong::new(self.into_value().distance(rhs.into_value()))
    }
}
