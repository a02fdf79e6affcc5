//! Market
//!
//! A province's demand is met by producers, cheapest first. Quantities are
//! integers that may be "not a number"; invalid input propagates through every
//! derived figure instead of raising an error.

pub mod producer;
pub mod province;
pub mod quantity;
pub mod snapshot;
