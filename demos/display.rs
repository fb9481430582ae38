//! Debug and Display for strong types.
//!
//! Run with `cargo run --example display`.

use std::collections::HashMap;
use std::fmt;

use tola_strong::{define_type, Address, OffsetOf, Tag};

define_type! {
    pub Word: Equality<String>;
}

/// Renders values with a unit suffix.
pub enum KelvinTag {}

impl Tag for KelvinTag {
    const NAME: &'static str = "Kelvin";

    fn fmt_value<T: fmt::Display + ?Sized>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(value, f)?;
        f.write_str(" K")
    }
}

type Kelvin = tola_strong::Quantity<f64, KelvinTag>;

#[derive(Tag)]
#[tag(name = "Line")]
pub enum LineNumberTag {}

type Line = Address<usize, usize, LineNumberTag>;

fn main() {
    let t = Kelvin::new(273.15);
    println!("{t}");
    println!("{t:.0}");
    println!("{t:?}");

    let mut counts: HashMap<Word, usize> = HashMap::new();
    for w in "the cat saw the dog".split(' ') {
        *counts.entry(Word::new(w.to_string())).or_default() += 1;
    }
    println!("the: {}", counts[&Word::new("the".to_string())]);

    let start = Line::new(10);
    let end = start + OffsetOf::<Line>::new(5);
    println!("{start:?} .. {end:?} spans {:>3} lines", end - start);
}
