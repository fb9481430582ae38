//! Calendar dates from distinct strong types.
//!
//! Run with `cargo run --example date`.

use tola_strong::define_type;

define_type! {
    /// Calendar year.
    pub Year: Ordered<i32>;
    /// Month of the year, 1 to 12.
    pub Month: Ordered<u8>;
    /// Day of the month.
    pub Day: Ordered<u8>;
}

#[derive(Debug, PartialEq, PartialOrd)]
struct Date {
    year: Year,
    month: Month,
    day: Day,
}

impl Date {
    fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }
}

fn main() {
    let release = Date::new(Year::new(2019), Month::new(6), Day::new(28));
    let review = Date::new(Year::new(2019), Month::new(7), Day::new(24));

    println!("{release:?}");
    println!("{review:?}");
    println!("release < review: {}", release < review);

    // Date::new(Day::new(28), Month::new(6), Year::new(2019)) does not compile.
}
