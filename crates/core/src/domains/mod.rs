//! Built-in adapters for standard types.
//!
//! - `String` — bit-strings (or any text), split at every character boundary
//! - `i64` — positive integers under addition
//!
//! [`Text`] wraps a string that was checked non-empty up front.

pub mod addition;
pub mod string;

pub use string::{Splits, Text};
