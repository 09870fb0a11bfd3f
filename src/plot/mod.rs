//! Terminal plots for the non-interactive CLI.

pub mod ascii;

pub use ascii::*;
