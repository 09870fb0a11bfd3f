//! Calendar feature extraction.
//!
//! The model only ever sees four integer features per timestamp. They are read
//! straight off the timestamp, so extraction is pure and order-preserving.

pub mod extract;

pub use extract::*;
