//! Default-construction policies.
//!
//! Run with `cargo run --example custom_default`.

use tola_strong::{default_policy, define_type, define_type_default};

default_policy! {
    /// Marks an index that has not been assigned yet.
    pub Unset: usize = usize::MAX;
    pub Origin: i64 = -1;
}

define_type! {
    /// Must always be given explicitly.
    pub Port: Equality<u16>;
}

define_type_default! {
    pub Hits: Numeric<u64>;
    pub Slot: Equality<usize> = Unset;
    pub Row: Ordered<i64> = Origin;
}

fn main() {
    let port = Port::new(8080);
    println!("port:  {port}");

    println!("hits:  {:?}", Hits::default());
    println!("slot:  {:?}", Slot::default());
    println!("row:   {:?}", Row::default());

    let slot = Slot::default();
    if slot == Slot::new(usize::MAX) {
        println!("slot is unset");
    }

    // Port::default() does not compile: `Port` uses `NoDefault`.
}
