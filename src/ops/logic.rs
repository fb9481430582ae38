//! Logical and boolean families.
//!
//! `&&` and `||` cannot be overloaded, so `Logic` tiers expose `and` and
//! `or` methods instead. Both convert the wrapped values to `bool`,
//! combine them with the native short-circuit operators and wrap the
//! result again.

use core::ops::Not;

use crate::Strong;
use crate::tier::{Logic, Truth};

// =============================================================================
// Logic: ! and or
// =============================================================================

impl<T: Not<Output = T>, G, K: Logic, D> Not for Strong<T, G, K, D> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(Not::not)
    }
}

impl<T, G, K: Logic, D> Strong<T, G, K, D>
where
    T: Into<bool> + From<bool>,
{
    /// Logical and of the wrapped values.
    #[inline]
    pub fn and(self, other: Self) -> Self {
        Self::new(T::from(self.into_value().into() && other.into_value().into()))
    }

    /// Logical or of the wrapped values.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        Self::new(T::from(self.into_value().into() || other.into_value().into()))
    }
}

// =============================================================================
// Truth: explicit conversion to bool
// =============================================================================

impl<G, K: Truth, D> Strong<bool, G, K, D> {
    /// The wrapped flag.
    #[inline]
    pub const fn is_true(&self) -> bool {
        *self.get()
    }
}

impl<G, K: Truth, D> From<Strong<bool, G, K, D>> for bool {
    #[inline]
    fn from(value: Strong<bool, G, K, D>) -> bool {
        value.into_value()
    }
}
