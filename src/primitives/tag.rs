//! Tags: marker types that give a strong type its nominal identity.
//!
//! A tag is normally an uninhabited enum. It never exists at runtime;
//! two strong types with the same representation but different tags are
//! different types to the compiler.

use core::fmt;
use core::marker::PhantomData;

/// Marker identifying the semantic domain of a strong type.
///
/// Usually implemented with `#[derive(Tag)]`:
///
/// ```
/// use tola_strong::{Ordered, Tag};
///
/// #[derive(Tag)]
/// enum DayTag {}
///
/// type Day = Ordered<i32, DayTag>;
///
/// assert_eq!(format!("{:?}", Day::new(21)), "Day(21)");
/// ```
///
/// Implement it by hand to change how values render with `Display`:
///
/// ```
/// use core::fmt;
/// use tola_strong::{Numeric, Tag};
///
/// enum MetresTag {}
///
/// impl Tag for MetresTag {
///     const NAME: &'static str = "Metres";
///
///     fn fmt_value<T: fmt::Display + ?Sized>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{value} m")
///     }
/// }
///
/// type Metres = Numeric<f64, MetresTag>;
///
/// assert_eq!(Metres::new(2.5).to_string(), "2.5 m");
/// ```
pub trait Tag {
    /// Name used by `Debug`.
    const NAME: &'static str;

    /// Render a wrapped value for `Display`.
    #[inline]
    fn fmt_value<T: fmt::Display + ?Sized>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(value, f)
    }
}

/// Tag of a subtype: the parent strong type `P` refined by the tag `G`.
///
/// Distinct for every `G`, so two subtypes of the same parent never
/// unify with each other or with the parent.
pub struct SubTag<P, G>(PhantomData<fn() -> (P, G)>);

impl<P, G: Tag> Tag for SubTag<P, G> {
    const NAME: &'static str = G::NAME;

    #[inline]
    fn fmt_value<T: fmt::Display + ?Sized>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        G::fmt_value(value, f)
    }
}
