//! Operator surface of each tier.
//!
//! Positive checks use the operators directly; absent operators are
//! checked with `implements!`.

use core::ops::{
    Add, AddAssign, BitAnd, BitOr, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, Shl, Sub,
    SubAssign,
};

use tola_strong::{define_type, implements, OffsetOf};

define_type! {
    Label: Plain<i32>;
    Flag: Boolean;
    Toggle: Logical<bool>;
    Id: Equality<u64>;
    Mask: Bits<u8>;
    Rank: Ordered<i32>;
    Count: Numeric<i64>;
    Metres: Quantity<f64>;
    Steps: Offset<i64>;
    Cursor: Address<i64, i64>;
    Row: Address<u32, i64>;
    Pointer: Address<*const u8, isize>;
}

// =============================================================================
// Plain
// =============================================================================

#[test]
fn test_plain_has_accessors_only() {
    assert_eq!(*Label::new(5).get(), 5);
    assert!(!implements!(Label: PartialEq));
    assert!(!implements!(Label: PartialOrd));
    assert!(!implements!(Label: Add));
    assert!(!implements!(Label: Not));
}

// =============================================================================
// Boolean / Logical
// =============================================================================

#[test]
fn test_boolean() {
    let on = Flag::new(true);
    assert!(on == Flag::new(true));
    assert!(on != Flag::new(false));
    assert!(bool::from(on));
    assert!(on.is_true());
    assert!(!implements!(Flag: Not));
    assert!(!implements!(Flag: PartialOrd));
}

#[test]
fn test_logical() {
    let yes = Toggle::new(true);
    let no = Toggle::new(false);
    assert!((!no).into_value());
    assert!(!yes.and(no).into_value());
    assert!(yes.or(no).into_value());
    assert!(!implements!(Toggle: PartialEq));
}

// =============================================================================
// Equality / Bits
// =============================================================================

#[test]
fn test_equality() {
    assert!(Id::new(7) == Id::new(7));
    assert!(Id::new(7) != Id::new(9));
    assert!(!implements!(Id: PartialOrd));
    assert!(!implements!(Id: Add));
}

#[test]
fn test_bits() {
    let a = Mask::new(0b1100);
    let b = Mask::new(0b1010);
    assert_eq!(a & b, Mask::new(0b1000));
    assert_eq!(a | b, Mask::new(0b1110));
    assert_eq!(a ^ b, Mask::new(0b0110));
    assert_eq!(a >> 2, Mask::new(0b0011));
    assert!(implements!(Mask: Shl<u32>));
    assert!(!implements!(Mask: PartialOrd));
    assert!(!implements!(Mask: Add));
}

// =============================================================================
// Ordered / Numeric
// =============================================================================

#[test]
fn test_ordered() {
    assert!(Rank::new(1) < Rank::new(2));
    assert!(Rank::new(2) >= Rank::new(2));
    assert_eq!(Rank::new(3).max(Rank::new(8)), Rank::new(8));
    assert!(!implements!(Rank: Add));
    assert!(!implements!(Rank: BitAnd));
}

#[test]
fn test_numeric() {
    let x = Count::new(12);
    let y = Count::new(5);
    assert_eq!(x + y, Count::new(17));
    assert_eq!(x - y, Count::new(7));
    assert_eq!(x * y, Count::new(60));
    assert_eq!(x / y, Count::new(2));
    assert_eq!(x % y, Count::new(2));
    assert_eq!(-x, Count::new(-12));
    assert_eq!(x.pos(), x);
    assert!(y < x);
    assert!(!implements!(Count: BitOr));
    assert!(!implements!(Count: Add<i64>));
}

#[test]
fn test_numeric_compound() {
    let mut c = Count::new(10);
    c += Count::new(5);
    c -= Count::new(3);
    c *= Count::new(2);
    c /= Count::new(4);
    c %= Count::new(4);
    assert_eq!(c, Count::new(2));
}

#[test]
fn test_stepping() {
    let mut c = Count::new(0);
    c.increment().increment();
    assert_eq!(c.post_decrement(), Count::new(2));
    assert_eq!(c, Count::new(1));
}

// =============================================================================
// Quantity
// =============================================================================

#[test]
fn test_quantity() {
    let q = Metres::new(1.5);
    assert_eq!(q + q, Metres::new(3.0));
    assert_eq!(q * 2.0, Metres::new(3.0));
    assert_eq!(2.0 * q, Metres::new(3.0));
    assert_eq!(q / 3.0, Metres::new(0.5));
    assert_eq!(Metres::new(3.0) / q, 2.0);
    assert_eq!(-q, Metres::new(-1.5));
    assert!(implements!(Metres: Mul<f64>));
    assert!(implements!(Metres: MulAssign<f64>));
    assert!(!implements!(Metres: Mul<Metres>));
    assert!(!implements!(Metres: MulAssign<Metres>));
    assert!(implements!(Metres: Rem));
}

#[test]
fn test_quantity_does_not_divide_into_itself() {
    assert!(implements!(Metres: Div<f64, Output = Metres> + DivAssign<f64>));
    assert!(implements!(Metres: Div<Metres, Output = f64>));
    assert!(!implements!(Metres: Div<Metres, Output = Metres>));
    assert!(!implements!(Metres: DivAssign<Metres>));
}

// =============================================================================
// Offset / Address
// =============================================================================

#[test]
fn test_offset() {
    assert_eq!(Steps::new(2) + Steps::new(3), Steps::new(5));
    assert!(Steps::new(2) < Steps::new(3));
    assert!(!implements!(Steps: Mul));
    assert!(!implements!(Steps: Neg));
}

#[test]
fn test_address() {
    let start = Cursor::new(10);
    let step = OffsetOf::<Cursor>::new(4);
    assert_eq!(start + step, Cursor::new(14));
    assert_eq!(step + start, Cursor::new(14));
    assert_eq!(start - step, Cursor::new(6));
    assert_eq!(Cursor::new(14) - start, step);
    assert!(start < Cursor::new(11));

    assert!(implements!(Cursor: AddAssign<OffsetOf<Cursor>>));
    assert!(implements!(Cursor: SubAssign<OffsetOf<Cursor>>));
    assert!(!implements!(Cursor: Add<Cursor>));
    assert!(!implements!(Cursor: AddAssign<Cursor>));
    assert!(!implements!(OffsetOf<Cursor>: Sub<Cursor>));
    assert!(!implements!(Cursor: Mul));
    assert!(!implements!(Cursor: Div));
}

#[test]
fn test_address_with_distinct_offset_type() {
    assert!(implements!(Row: Add<OffsetOf<Row>, Output = Row> + Sub<OffsetOf<Row>, Output = Row>));
    assert!(implements!(Row: Sub<Row, Output = OffsetOf<Row>>));
    assert!(implements!(Row: AddAssign<OffsetOf<Row>> + SubAssign<OffsetOf<Row>>));
    assert!(implements!(OffsetOf<Row>: Add<Row, Output = Row>));
    assert!(!implements!(Row: Add<Row>));

    assert!(implements!(Pointer: Add<OffsetOf<Pointer>> + Sub<Pointer, Output = OffsetOf<Pointer>>));
    assert!(!implements!(Pointer: Add<Pointer>));
    assert!(!implements!(OffsetOf<Pointer>: Sub<Pointer>));
}

#[test]
fn test_offsets_belong_to_one_tag() {
    // `Steps` has its own tag, so it cannot move a `Cursor`.
    assert!(!implements!(Cursor: Add<Steps>));
}

// =============================================================================
// Tier Inclusion
// =============================================================================

#[test]
fn test_tier_inclusion() {
    // Ordered tiers compare for equality
    assert!(implements!(Rank: PartialEq));
    assert!(implements!(Count: PartialEq));
    assert!(implements!(Cursor: Eq));

    // Numeric and Quantity are ordered
    assert!(implements!(Count: Ord));
    assert!(implements!(Metres: PartialOrd));

    // Quantity keeps the additive part of Numeric
    assert!(implements!(Metres: Sub));
    assert!(implements!(Count: Rem));
}
