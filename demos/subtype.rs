//! Subtypes of a shared parent.
//!
//! Run with `cargo run --example subtype`.

use tola_strong::{define_subtype, define_type};

define_type!(pub Integer: Numeric<i32>);

define_subtype! {
    pub Width: Integer;
    pub Height: Integer;
}

fn area(width: Width, height: Height) -> Integer {
    width.upcast() * height.upcast()
}

fn main() {
    let w = Width::new(4) + Width::new(1);
    let h = Height::new(3);

    println!("{w:?} x {h:?} = {:?}", area(w, h));

    let half = Width::from_parent(Integer::new(10) / Integer::new(2));
    println!("half: {half}");

    // `w == h` and `area(h, w)` do not compile.
}
