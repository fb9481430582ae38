//! Quantities: arithmetic that keeps its dimension.
//!
//! | expression           | result      |
//! |----------------------|-------------|
//! | `q + q`, `q - q`     | quantity    |
//! | `q * t`, `t * q`     | quantity    |
//! | `q / t`              | quantity    |
//! | `q / q`              | raw `t`     |
//! | `q * q`              | not defined |
//!
//! ```compile_fail
//! use tola_strong::Quantity;
//!
//! enum MetresTag {}
//! type Metres = Quantity<i32, MetresTag>;
//!
//! let area = Metres::new(3) * Metres::new(4);
//! ```

use core::ops::Div;

use crate::Strong;
use crate::tier::{self, Scalable};

binary_from_compound!(Scalable, T, Mul::mul, MulAssign::mul_assign);
binary_from_compound!(Scalable, T, Div::div, DivAssign::div_assign);

// Like quantities cancel to the raw scalar.
impl<T: Div<Output = T>, G, D> Div for Strong<T, G, tier::Quantity, D> {
    type Output = T;

    #[inline]
    fn div(self, rhs: Self) -> T {
        self.into_value() / rhs.into_value()
    }
}

/// `scalar * quantity` for the primitive numeric types.
///
/// A blanket `impl<T> Mul<Strong<T, ..>> for T` would put an uncovered
/// type parameter in `Self` position, so the left-scalar form is spelled
/// out per primitive.
macro_rules! impl_scalar_lhs {
    ($($t:ty),* $(,)?) => {
        $(
            impl<G, K: Scalable, D> core::ops::Mul<Strong<$t, G, K, D>> for $t {
                type Output = Strong<$t, G, K, D>;

                #[inline]
                fn mul(self, rhs: Strong<$t, G, K, D>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);
