//! Parsers for board sensors and external utilities.

pub mod parser;

pub use parser::{parse_df, parse_thermal_zone, parse_vcgencmd_temp};
