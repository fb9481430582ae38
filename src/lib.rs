#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, forwards to num-traits/std

//! # tola-strong
//!
//! Strong typedefs with compile-time capability tiers.
//!
//! **Distinct nominal types over shared representations.**
//!
//! ## Architecture
//!
//! A strong type wraps one value and carries three type-level parameters:
//!
//! ```text
//! Strong<T, Tag, Tier, Policy>
//!        |   |     |     |
//!      value |  operator  Default?
//!        identity   set
//! ```
//!
//! Two strong types with the same `T` but different tags never mix. The
//! tier decides which operators exist; anything it leaves out is a
//! compile error, not a runtime check.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Tag, SubTag, default policies, Displace positions              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Tiers                                                   |
//! |  - Tier markers, one sealed trait per operator family             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Strong<T, G, K, D>                                      |
//! |  - Accessors, Clone/Copy/Default/Hash/Debug/Display               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Operators                                               |
//! |  - compare, arith, bits, logic, quantity, address                 |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4: Sugar                                                   |
//! |  - define_type!, define_subtype!, define_function!, implements!   |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Tiers
//!
//! | Tier       | Operators                                                    |
//! |------------|--------------------------------------------------------------|
//! | `Plain`    | accessors only                                               |
//! | `Boolean`  | `==`, `!=`, `bool::from`                                     |
//! | `Logical`  | `!`, `and`, `or`                                             |
//! | `Equality` | `==`, `!=`                                                   |
//! | `Bits`     | equality, `& \| ^ << >>` and compound forms                  |
//! | `Ordered`  | equality, `< > <= >=`                                        |
//! | `Numeric`  | ordering, unary `-`, stepping, `+ - * / %` and compound forms |
//! | `Quantity` | numeric without `q * q`; `q * t`, `t * q`, `q / t`, `q / q -> t` |
//! | `Offset`   | ordering, `+ -` between offsets                              |
//! | `Address`  | ordering, `a - a -> offset`, `a ± offset`, `offset + a`      |
//!
//! ## Quick Start
//!
//! ```
//! use tola_strong::define_type;
//!
//! define_type! {
//!     pub Day: Ordered<i32>;
//!     pub Year: Ordered<i32>;
//! }
//!
//! #[derive(Debug, PartialEq, PartialOrd)]
//! struct Date {
//!     year: Year,
//!     month: u8,
//!     day: Day,
//! }
//!
//! impl Date {
//!     fn new(year: Year, month: u8, day: Day) -> Self {
//!         Self { year, month, day }
//!     }
//! }
//!
//! let earlier = Date::new(Year::new(2019), 6, Day::new(28));
//! let later = Date::new(Year::new(2019), 7, Day::new(24));
//! assert!(earlier < later);
//! ```
//!
//! Swapped or raw arguments are rejected by the compiler:
//!
//! ```compile_fail
//! use tola_strong::define_type;
//!
//! define_type! {
//!     pub Day: Ordered<i32>;
//!     pub Year: Ordered<i32>;
//! }
//!
//! fn date(year: Year, month: u8, day: Day) {}
//!
//! date(Day::new(28), 6, Year::new(2019));
//! ```
//!
//! ```compile_fail
//! use tola_strong::define_type;
//!
//! define_type! {
//!     pub Day: Ordered<i32>;
//!     pub Year: Ordered<i32>;
//! }
//!
//! fn date(year: Year, month: u8, day: Day) {}
//!
//! date(2019, 6, 28);
//! ```

// Allow `::tola_strong` to work inside the crate itself
extern crate self as tola_strong;

// Re-export paste for the declaration macros
pub use paste;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Tiers
// =============================================================================
pub mod tier;

// =============================================================================
// Layer 2: The Strong Wrapper
// =============================================================================
pub mod strong;
pub mod aliases;

// =============================================================================
// Layer 3: Operators
// =============================================================================
pub mod ops;

// =============================================================================
// Layer 4: Sugar
// =============================================================================
pub mod lift;
pub mod detect;
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{DefaultValue, Displace, NoDefault, Natural, SubTag, Tag};
pub use strong::{Strong, StrongType, to_value};
pub use aliases::{
    Plain, Boolean, Logical, Equality, Bits, Ordered,
    Numeric, Quantity, Offset, Address, OffsetOf, Subtype,
};
pub use lift::lift;

// Re-export proc-macros
pub use macros::Tag;

/// Common items for declaring and using strong types.
pub mod prelude {
    pub use crate::{
        Strong, StrongType, Tag, DefaultValue, NoDefault, Natural, Displace,
        Plain, Boolean, Logical, Equality, Bits, Ordered,
        Numeric, Quantity, Offset, Address, OffsetOf, Subtype,
        lift, to_value,
    };
    pub use crate::tier::Tier;
    // Note: define_type!, define_subtype!, define_function!, default_policy!
    // and implements! are #[macro_export] so they're at crate root
}
