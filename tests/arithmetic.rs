//! Arithmetic laws: binary operators agree with their compound forms,
//! quantities keep their dimension, addresses move by offsets.

use tola_strong::{define_type, define_type_default, OffsetOf};

define_type! {
    Count: Numeric<i32>;
    Metres: Quantity<i32>;
    Line: Address<u32, i64>;
    Page: Address<i64, i64>;
    Word: Address<*const u32, isize>;
}

define_type_default!(Balance: Numeric<i64>);

// =============================================================================
// Binary From Compound
// =============================================================================

#[test]
fn test_binary_equals_compound_on_copy() {
    for (a, b) in [(17, 5), (-4, 9), (0, 1)] {
        let (x, y) = (Count::new(a), Count::new(b));

        let mut sum = x;
        sum += y;
        assert_eq!(x + y, sum);

        let mut diff = x;
        diff -= y;
        assert_eq!(x - y, diff);

        let mut prod = x;
        prod *= y;
        assert_eq!(x * y, prod);

        let mut quot = x;
        quot /= y;
        assert_eq!(x / y, quot);

        let mut rem = x;
        rem %= y;
        assert_eq!(x % y, rem);

        // Operands are untouched
        assert_eq!(x, Count::new(a));
        assert_eq!(y, Count::new(b));
    }
}

#[test]
fn test_checked_overflow() {
    assert_eq!(Count::new(i32::MAX).checked_add(&Count::new(1)), None);
    assert_eq!(Count::new(i32::MIN).checked_sub(&Count::new(1)), None);
    assert_eq!(Count::new(4).checked_sub(&Count::new(1)), Some(Count::new(3)));
}

#[test]
fn test_sum_from_zero() {
    use num_traits::Zero;

    let total = [3, 4, 5]
        .into_iter()
        .map(Balance::new)
        .fold(Balance::zero(), |acc, b| acc + b);
    assert_eq!(total, Balance::new(12));
    assert_eq!(Balance::default(), Balance::zero());
}

// =============================================================================
// Quantity Laws
// =============================================================================

#[test]
fn test_quantity_scaling() {
    let q = Metres::new(7);
    assert_eq!(q * 3, Metres::new(21));
    assert_eq!(3 * q, Metres::new(21));
    assert_eq!(Metres::new(21) / 7, Metres::new(3));
}

#[test]
fn test_quantity_ratio_is_raw() {
    let ratio: i32 = Metres::new(21) / Metres::new(7);
    assert_eq!(ratio, 3);
}

#[test]
fn test_quantity_stays_additive() {
    let mut q = Metres::new(10);
    q -= Metres::new(4);
    q += Metres::new(1);
    assert_eq!(q, Metres::new(7));
    assert_eq!(q % Metres::new(4), Metres::new(3));
}

// =============================================================================
// Address / Offset Laws
// =============================================================================

#[test]
fn test_round_trip() {
    let a = Page::new(40);
    for o in [-7, 0, 12] {
        let o = OffsetOf::<Page>::new(o);
        assert_eq!((a + o) - o, a);
        assert_eq!((a + o) - a, o);
        assert_eq!(o + a, a + o);
    }
}

#[test]
fn test_self_distance_is_zero() {
    let a = Page::new(40);
    assert_eq!(a - a, OffsetOf::<Page>::new(0));
    assert_eq!(a - a, OffsetOf::<Page>::default());
}

#[test]
fn test_address_compound() {
    let mut p = Page::new(1);
    p += OffsetOf::<Page>::new(10);
    p -= OffsetOf::<Page>::new(3);
    assert_eq!(p, Page::new(8));
}

#[test]
fn test_unsigned_position_signed_offset() {
    // u32 positions, i64 distances
    let line = Line::new(9);
    for o in [-4, 0, 7] {
        let o = OffsetOf::<Line>::new(o);
        assert_eq!((line + o) - o, line);
        assert_eq!((line + o) - line, o);
        assert_eq!(o + line, line + o);
    }
    assert_eq!(line + OffsetOf::<Line>::new(-4), Line::new(5));
    assert_eq!(Line::new(3) - line, OffsetOf::<Line>::new(-6));
    assert_eq!(line - line, OffsetOf::<Line>::default());

    let mut cursor = line;
    cursor -= OffsetOf::<Line>::new(2);
    cursor += OffsetOf::<Line>::new(-1);
    assert_eq!(cursor, Line::new(6));
}

#[test]
fn test_pointer_position() {
    let words = [10u32, 20, 30, 40, 50];
    let base = Word::new(words.as_ptr());
    let o = OffsetOf::<Word>::new(3);

    let third = base + o;
    // SAFETY: `third` points at element 3 of `words`.
    assert_eq!(unsafe { *third.into_value() }, 40);
    assert_eq!(third - base, o);
    assert_eq!(base - third, OffsetOf::<Word>::new(-3));
    assert_eq!((base + o) - o, base);
    assert_eq!(o + base, third);
    assert_eq!(base - base, OffsetOf::<Word>::new(0));
    assert!(base < third);
}
