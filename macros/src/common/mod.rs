// Common utilities shared by the derive macros
//
// This module contains:
// - parse_utils: `#[tag(...)]` attribute parsing and name derivation

mod parse_utils;

pub use parse_utils::*;
