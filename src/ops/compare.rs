//! Equality and ordering.
//!
//! Every comparison is derived from the underlying `==` and `<` only:
//!
//! | operator | derived as     |
//! |----------|----------------|
//! | `x != y` | `!(x == y)`    |
//! | `x > y`  | `y < x`        |
//! | `x <= y` | `!(y < x)`     |
//! | `x >= y` | `!(x < y)`     |

use core::cmp::Ordering;

use crate::Strong;
use crate::tier::{Equate, Order};

impl<T: PartialEq, G, K: Equate, D> PartialEq for Strong<T, G, K, D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }

    #[allow(clippy::partialeq_ne_impl)]
    #[inline]
    fn ne(&self, other: &Self) -> bool {
        !(self == other)
    }
}

impl<T: Eq, G, K: Equate, D> Eq for Strong<T, G, K, D> {}

/// Order two values using only `<` and `==` of the underlying type.
#[inline]
fn derived_order<T: PartialOrd>(x: &T, y: &T) -> Option<Ordering> {
    if x < y {
        Some(Ordering::Less)
    } else if y < x {
        Some(Ordering::Greater)
    } else if x == y {
        Some(Ordering::Equal)
    } else {
        None
    }
}

/// Ordering built from the underlying `<` alone.
///
/// `<=` is `!(y < x)` and `>=` is `!(x < y)`. For totally ordered `T`
/// this agrees with `T`'s own operators. For partially ordered `T` it
/// does not: with `f64::NAN`, `partial_cmp` is `None` and `<` is false
/// both ways, yet `<=` and `>=` are both true. Generic code that relies
/// on `a <= b` meaning `a < b || a == b` should use an integer or other
/// totally ordered `T`, or compare through `partial_cmp`.
///
/// ```
/// use tola_strong::{Ordered, Tag};
///
/// #[derive(Tag)]
/// enum ScoreTag {}
/// type Score = Ordered<f64, ScoreTag>;
///
/// let (nan, one) = (Score::new(f64::NAN), Score::new(1.0));
/// assert_eq!(nan.partial_cmp(&one), None);
/// assert!(nan <= one && nan >= one);
/// assert!(!(f64::NAN <= 1.0));
/// ```
impl<T: PartialOrd, G, K: Order, D> PartialOrd for Strong<T, G, K, D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        derived_order(self.get(), other.get())
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.get() < other.get()
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        other.get() < self.get()
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        !(other.get() < self.get())
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        !(self.get() < other.get())
    }
}

impl<T: Ord, G, K: Order, D> Ord for Strong<T, G, K, D> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        if self.get() < other.get() {
            Ordering::Less
        } else if other.get() < self.get() {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
