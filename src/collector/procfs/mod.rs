//! Parsers for the Linux `/proc` filesystem.
//!
//! This module provides parsers for reading host statistics from the
//! `/proc` virtual filesystem.

pub mod parser;

pub use parser::{
    parse_cpu_state, parse_cpuinfo, parse_loadavg, parse_meminfo, parse_net_dev, parse_uptime,
};
