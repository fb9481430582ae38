//! # Layer 3: Operators
//!
//! One module per operator family. Every impl is gated on the family
//! trait of the tier parameter, so a strong type receives exactly the
//! operators its tier opts into.
//!
//! Binary operators are never written by hand: `binary_from_compound!`
//! derives `a op b` from `a op= b` on a moved copy of `a`, which keeps the
//! two forms consistent and leaves only the compound form per family.

/// Implement a compound-assignment operator on the wrapped value and
/// derive the binary operator from it.
///
/// `Rhs` forms:
/// - `Self`: both operands are the same strong type.
/// - `T`: the right operand is the raw underlying value.
/// - any other type: forwarded as is to `T`'s compound operator.
macro_rules! binary_from_compound {
    ($family:ident, Self, $Op:ident :: $op:ident, $OpAssign:ident :: $op_assign:ident) => {
        impl<T: core::ops::$OpAssign, G, K: $crate::tier::$family, D> core::ops::$OpAssign
            for $crate::Strong<T, G, K, D>
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                core::ops::$OpAssign::$op_assign(self.get_mut(), rhs.into_value());
            }
        }

        impl<T: core::ops::$OpAssign, G, K: $crate::tier::$family, D> core::ops::$Op
            for $crate::Strong<T, G, K, D>
        {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: Self) -> Self {
                core::ops::$OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }
    };
    ($family:ident, T, $Op:ident :: $op:ident, $OpAssign:ident :: $op_assign:ident) => {
        impl<T: core::ops::$OpAssign, G, K: $crate::tier::$family, D> core::ops::$OpAssign<T>
            for $crate::Strong<T, G, K, D>
        {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                core::ops::$OpAssign::$op_assign(self.get_mut(), rhs);
            }
        }

        impl<T: core::ops::$OpAssign, G, K: $crate::tier::$family, D> core::ops::$Op<T>
            for $crate::Strong<T, G, K, D>
        {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: T) -> Self {
                core::ops::$OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }
    };
    ($family:ident, $Rhs:ty, $Op:ident :: $op:ident, $OpAssign:ident :: $op_assign:ident) => {
        impl<T: core::ops::$OpAssign<$Rhs>, G, K: $crate::tier::$family, D> core::ops::$OpAssign<$Rhs>
            for $crate::Strong<T, G, K, D>
        {
            #[inline]
            fn $op_assign(&mut self, rhs: $Rhs) {
                core::ops::$OpAssign::$op_assign(self.get_mut(), rhs);
            }
        }

        impl<T: core::ops::$OpAssign<$Rhs>, G, K: $crate::tier::$family, D> core::ops::$Op<$Rhs>
            for $crate::Strong<T, G, K, D>
        {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: $Rhs) -> Self {
                core::ops::$OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }
    };
}

pub mod compare;
pub mod arith;
pub mod bits;
pub mod logic;
pub mod quantity;
pub mod address;
