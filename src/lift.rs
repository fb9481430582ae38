//! Lifting functions on the underlying type to strong types.
//!
//! ```
//! use tola_strong::{define_function, define_type, lift};
//!
//! define_type!(pub Integer: Numeric<i32>);
//! define_function!(pub fn abs(Integer) = i32::abs);
//!
//! assert_eq!(abs(Integer::new(-7)), Integer::new(7));
//!
//! let square = lift::<Integer, _>(|v| v * v);
//! assert_eq!(square(Integer::new(-3)), Integer::new(9));
//! ```

use crate::StrongType;

/// Turn `fn(T) -> T` into `fn(S) -> S` for a strong type `S` over `T`.
#[inline]
pub fn lift<S, F>(f: F) -> impl Fn(S) -> S
where
    S: StrongType,
    F: Fn(S::Value) -> S::Value,
{
    move |strong| S::from_value(f(strong.into_value()))
}

/// Define a named function on a strong type by forwarding to a function
/// on its underlying type.
///
/// ```
/// use tola_strong::{define_function, define_type};
///
/// define_type!(Scalar: Numeric<f64>);
/// define_function!(fn sqrt(Scalar) = f64::sqrt);
///
/// assert_eq!(sqrt(Scalar::new(9.0)).into_value(), 3.0);
/// ```
#[macro_export]
macro_rules! define_function {
    ($(#[$meta:meta])* $vis:vis fn $name:ident ( $ty:ty ) = $func:expr $(;)?) => {
        $(#[$meta])*
        #[inline]
        $vis fn $name(value: $ty) -> $ty {
            <$ty as $crate::StrongType>::from_value(($func)(
                <$ty as $crate::StrongType>::into_value(value),
            ))
        }
    };
}
