//! Utility modules for rpimon.

pub mod number;

pub use number::{count_or, leading_real, parse_token, real_or};
