//! Lifting functions on the underlying type.

use tola_strong::{define_function, define_subtype, define_type, lift};

define_type! {
    pub Integer: Numeric<i32>;
    pub Scalar: Quantity<f64>;
    pub Word: Equality<String>;
}

define_subtype!(pub Day: Integer);

define_function!(fn abs(Integer) = i32::abs);
define_function!(
    /// Square root of the magnitude.
    fn sqrt(Scalar) = f64::sqrt
);
define_function!(fn shout(Word) = |w: String| w.to_uppercase());
define_function!(fn next_day(Day) = |d: i32| d + 1);

#[test]
fn test_named_functions() {
    assert_eq!(abs(Integer::new(-7)), Integer::new(7));
    assert_eq!(sqrt(Scalar::new(16.0)), Scalar::new(4.0));
    assert_eq!(shout(Word::new("hi".into())), Word::new("HI".into()));
    assert_eq!(next_day(Day::new(20)), Day::new(21));
}

#[test]
fn test_lift_closure() {
    let clamp = lift::<Integer, _>(|v| v.clamp(0, 10));
    assert_eq!(clamp(Integer::new(42)), Integer::new(10));
    assert_eq!(clamp(Integer::new(-1)), Integer::new(0));
}

#[test]
fn test_lift_function_pointer() {
    let neg = lift::<Integer, _>(i32::wrapping_neg);
    assert_eq!(neg(Integer::new(5)), Integer::new(-5));
}

#[test]
fn test_lift_keeps_subtype() {
    let double = lift::<Day, _>(|v| v * 2);
    let d: Day = double(Day::new(4));
    assert_eq!(d, Day::new(8));
}

#[test]
fn test_map_method() {
    let halved = Scalar::new(9.0).map(|v| v / 2.0);
    assert_eq!(halved, Scalar::new(4.5));
}
