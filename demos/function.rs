//! Lifting functions of the underlying type.
//!
//! Run with `cargo run --example function`.

use tola_strong::{define_function, define_type, lift};

define_type! {
    pub Celsius: Numeric<f64>;
    pub Metres: Quantity<f64>;
}

define_function!(pub fn floor(Celsius) = f64::floor);
define_function!(pub fn sqrt(Metres) = f64::sqrt);

fn main() {
    let t = Celsius::new(21.7);
    println!("floor({t}) = {}", floor(t));
    println!("sqrt(16 m) = {}", sqrt(Metres::new(16.0)));

    let clamp = lift::<Celsius, _>(|v| v.clamp(-40.0, 40.0));
    println!("clamp(90) = {}", clamp(Celsius::new(90.0)));

    let doubled = Metres::new(2.5) * 2.0;
    println!("2.5 m * 2 = {doubled}");
}
