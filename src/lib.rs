//! rpimon - on-demand host telemetry for Raspberry Pi class devices.
//!
//! This library provides:
//! - `collector` - source capabilities, parsers and the snapshot collector
//! - `model` - typed, serializable readings
//! - `util` - numeric coercion helpers shared by the parsers

pub mod collector;
pub mod model;
pub mod util;
