//! Arithmetic families: `Additive`, `Arithmetic`, `Multiplicative`.

use core::ops::{AddAssign, MulAssign, Neg, SubAssign};

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Zero};

use crate::Strong;
use crate::tier::{Additive, Arithmetic, Multiplicative};

// =============================================================================
// Additive: + - closed over one type
// =============================================================================

binary_from_compound!(Additive, Self, Add::add, AddAssign::add_assign);
binary_from_compound!(Additive, Self, Sub::sub, SubAssign::sub_assign);

impl<T, G, K: Additive, D> Strong<T, G, K, D> {
    /// `self + rhs`, or `None` if the underlying addition overflows.
    #[inline]
    pub fn checked_add(&self, rhs: &Self) -> Option<Self>
    where
        T: CheckedAdd,
    {
        self.get().checked_add(rhs.get()).map(Self::new)
    }

    /// `self - rhs`, or `None` if the underlying subtraction overflows.
    #[inline]
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self>
    where
        T: CheckedSub,
    {
        self.get().checked_sub(rhs.get()).map(Self::new)
    }
}

impl<T: Zero + AddAssign, G, K: Additive, D> Zero for Strong<T, G, K, D> {
    #[inline]
    fn zero() -> Self {
        Self::new(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.get().is_zero()
    }
}

// =============================================================================
// Arithmetic: negation, stepping, remainder
// =============================================================================

binary_from_compound!(Arithmetic, Self, Rem::rem, RemAssign::rem_assign);

impl<T: Neg<Output = T>, G, K: Arithmetic, D> Neg for Strong<T, G, K, D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

impl<T, G, K: Arithmetic, D> Strong<T, G, K, D> {
    /// Unary plus: the value itself.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    /// Pre-increment: add one in place and return the updated value.
    #[inline]
    pub fn increment(&mut self) -> &mut Self
    where
        T: One + AddAssign,
    {
        *self.get_mut() += T::one();
        self
    }

    /// Pre-decrement: subtract one in place and return the updated value.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self
    where
        T: One + SubAssign,
    {
        *self.get_mut() -= T::one();
        self
    }

    /// Post-increment: add one in place and return the previous value.
    #[inline]
    pub fn post_increment(&mut self) -> Self
    where
        T: One + AddAssign + Clone,
    {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// Post-decrement: subtract one in place and return the previous value.
    #[inline]
    pub fn post_decrement(&mut self) -> Self
    where
        T: One + SubAssign + Clone,
    {
        let previous = self.clone();
        self.decrement();
        previous
    }
}

// =============================================================================
// Multiplicative: * / closed over one type
// =============================================================================

binary_from_compound!(Multiplicative, Self, Mul::mul, MulAssign::mul_assign);
binary_from_compound!(Multiplicative, Self, Div::div, DivAssign::div_assign);

impl<T, G, K: Multiplicative, D> Strong<T, G, K, D> {
    /// `self * rhs`, or `None` if the underlying multiplication overflows.
    #[inline]
    pub fn checked_mul(&self, rhs: &Self) -> Option<Self>
    where
        T: CheckedMul,
    {
        self.get().checked_mul(rhs.get()).map(Self::new)
    }

    /// `self / rhs`, or `None` on division by zero or overflow.
    #[inline]
    pub fn checked_div(&self, rhs: &Self) -> Option<Self>
    where
        T: CheckedDiv,
    {
        self.get().checked_div(rhs.get()).map(Self::new)
    }
}

impl<T: One + MulAssign, G, K: Multiplicative, D> One for Strong<T, G, K, D> {
    #[inline]
    fn one() -> Self {
        Self::new(T::one())
    }
}
