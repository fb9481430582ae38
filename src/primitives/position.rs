//! Positions: what an `Address` tier can wrap.
//!
//! A position moves by an offset and measures the offset between two
//! positions. The offset type may differ from the position type:
//!
//! | position           | offset            | arithmetic                         |
//! |--------------------|-------------------|------------------------------------|
//! | integer `I`        | `I`               | the integer's own `+=`, `-=`, `-`  |
//! | unsigned `U`       | signed `S`        | wrapping, modulo `U`/`S` width     |
//! | `*const T`, `*mut T` | `isize` (elements) | `wrapping_offset`, address difference |

use core::mem;

/// A position displaced by offsets of type `O`.
///
/// For every position `p` and offset `o`:
/// `p.displace(o)` then `p.retreat(o)` restores `p`, and
/// `q.distance(p) == o` where `q` is `p` displaced by `o`.
///
/// Implement it for custom position types to use them in an `Address`:
///
/// ```
/// use tola_strong::{Address, Displace, OffsetOf, Tag};
///
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// struct Column(u16);
///
/// impl Displace<i32> for Column {
///     fn displace(&mut self, offset: i32) {
///         self.0 = (i32::from(self.0) + offset) as u16;
///     }
///
///     fn retreat(&mut self, offset: i32) {
///         self.0 = (i32::from(self.0) - offset) as u16;
///     }
///
///     fn distance(self, origin: Self) -> i32 {
///         i32::from(self.0) - i32::from(origin.0)
///     }
/// }
///
/// #[derive(Tag)]
/// enum CursorTag {}
/// type Cursor = Address<Column, i32, CursorTag>;
///
/// let start = Cursor::new(Column(4));
/// let end = start + OffsetOf::<Cursor>::new(6);
/// assert_eq!(end.into_value(), Column(10));
/// assert_eq!(end - start, OffsetOf::<Cursor>::new(6));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be displaced by `{O}`",
    note = "addresses need a position type implementing `Displace<Offset>`"
)]
pub trait Displace<O> {
    /// Move forward by `offset`.
    fn displace(&mut self, offset: O);

    /// Move back by `offset`.
    fn retreat(&mut self, offset: O);

    /// The offset that moves `origin` to `self`.
    fn distance(self, origin: Self) -> O;
}

// =============================================================================
// Integers: offset of the same type
// =============================================================================

macro_rules! impl_displace_same {
    ($($t:ty),* $(,)?) => {
        $(
            impl Displace<$t> for $t {
                #[inline]
                fn displace(&mut self, offset: $t) {
                    *self += offset;
                }

                #[inline]
                fn retreat(&mut self, offset: $t) {
                    *self -= offset;
                }

                #[inline]
                fn distance(self, origin: Self) -> $t {
                    self - origin
                }
            }
        )*
    };
}

impl_displace_same!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
);

// =============================================================================
// Unsigned positions: signed offsets
// =============================================================================

// Computed in i128 and truncated back: wraps like `wrapping_add_signed`.
macro_rules! impl_displace_signed {
    ($u:ty => $($s:ty),*) => {
        $(
            impl Displace<$s> for $u {
                #[inline]
                fn displace(&mut self, offset: $s) {
                    *self = (*self as i128).wrapping_add(offset as i128) as $u;
                }

                #[inline]
                fn retreat(&mut self, offset: $s) {
                    *self = (*self as i128).wrapping_sub(offset as i128) as $u;
                }

                #[inline]
                fn distance(self, origin: Self) -> $s {
                    (self as i128).wrapping_sub(origin as i128) as $s
                }
            }
        )*
    };
}

impl_displace_signed!(u8 => i8, i16, i32, i64, isize);
impl_displace_signed!(u16 => i8, i16, i32, i64, isize);
impl_displace_signed!(u32 => i8, i16, i32, i64, isize);
impl_displace_signed!(u64 => i8, i16, i32, i64, isize);
impl_displace_signed!(usize => i8, i16, i32, i64, isize);

impl Displace<i128> for u128 {
    #[inline]
    fn displace(&mut self, offset: i128) {
        *self = self.wrapping_add_signed(offset);
    }

    #[inline]
    fn retreat(&mut self, offset: i128) {
        *self = self.wrapping_add_signed(offset.wrapping_neg());
    }

    #[inline]
    fn distance(self, origin: Self) -> i128 {
        self.wrapping_sub(origin) as i128
    }
}

// =============================================================================
// Raw pointers: offsets in elements
// =============================================================================

/// Element distance between two addresses. Zero-sized elements have no
/// distance.
#[inline]
fn element_distance<T>(to: usize, from: usize) -> isize {
    match mem::size_of::<T>() {
        0 => 0,
        size => (to.wrapping_sub(from) as isize) / size as isize,
    }
}

impl<T> Displace<isize> for *const T {
    #[inline]
    fn displace(&mut self, offset: isize) {
        *self = self.wrapping_offset(offset);
    }

    #[inline]
    fn retreat(&mut self, offset: isize) {
        *self = self.wrapping_offset(offset.wrapping_neg());
    }

    #[inline]
    fn distance(self, origin: Self) -> isize {
        element_distance::<T>(self.addr(), origin.addr())
    }
}

impl<T> Displace<isize> for *mut T {
    #[inline]
    fn displace(&mut self, offset: isize) {
        *self = self.wrapping_offset(offset);
    }

    #[inline]
    fn retreat(&mut self, offset: isize) {
        *self = self.wrapping_offset(offset.wrapping_neg());
    }

    #[inline]
    fn distance(self, origin: Self) -> isize {
        element_distance::<T>(self.addr(), origin.addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_type_integers() {
        let mut p = 10u32;
        p.displace(5u32);
        assert_eq!(p, 15);
        p.retreat(7u32);
        assert_eq!(p, 8);
        assert_eq!(8i64.distance(11), -3);
    }

    #[test]
    fn test_unsigned_with_signed_offset() {
        let mut p = 10u32;
        p.displace(-4i64);
        assert_eq!(p, 6);
        p.retreat(-4i64);
        assert_eq!(p, 10);
        assert_eq!(Displace::<i64>::distance(3u32, 9), -6);
        assert_eq!(Displace::<i8>::distance(200u8, 100), 100);
    }

    #[test]
    fn test_u128_wraps() {
        let mut p = 1u128;
        p.displace(-2i128);
        assert_eq!(p, u128::MAX);
        p.retreat(-2i128);
        assert_eq!(p, 1);
        assert_eq!(Displace::<i128>::distance(1u128, 4), -3);
    }

    #[test]
    fn test_pointers_count_elements() {
        let buf = [0u32; 8];
        let base = buf.as_ptr();
        let mut p = base;
        p.displace(5);
        assert_eq!(p, base.wrapping_add(5));
        assert_eq!(p.distance(base), 5);
        assert_eq!(base.distance(p), -5);
        p.retreat(5);
        assert_eq!(p, base);
    }

    #[test]
    fn test_mut_pointers() {
        let mut buf = [0u16; 4];
        let base = buf.as_mut_ptr();
        let mut p = base;
        p.displace(3);
        assert_eq!(p.distance(base), 3);
    }

    #[test]
    fn test_zero_sized_elements() {
        let units = [(); 4];
        let base = units.as_ptr();
        let mut p = base;
        p.displace(2);
        assert_eq!(p.distance(base), 0);
    }
}
