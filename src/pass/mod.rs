//! Password generation.

pub mod charset;
mod generate;

pub use generate::{entropy_bits, generate, generate_for, strength_label};
