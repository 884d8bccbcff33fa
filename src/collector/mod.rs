//! Host telemetry collector for Linux single-board computers.
//!
//! This module provides infrastructure for reading host metrics from the
//! Linux `/proc` and `/sys` filesystems and from board utilities, with
//! support for mocking for testing off-device.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Collector                           │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐  │
//! │  │     procfs::parser       │  │     device::parser       │  │
//! │  │  - /proc/cpuinfo         │  │  - thermal_zone0/temp    │  │
//! │  │  - /proc/uptime, stat    │  │  - vcgencmd measure_temp │  │
//! │  │  - /proc/meminfo,loadavg │  │  - df                    │  │
//! │  │  - /proc/net/dev         │  │                          │  │
//! │  └────────────┬─────────────┘  └────────────┬─────────────┘  │
//! │        ┌──────▼──────┐              ┌───────▼───────┐        │
//! │        │  FileSystem │ (trait)      │ CommandRunner │ (trait)│
//! │        └──────┬──────┘              └───────┬───────┘        │
//! └───────────────┼─────────────────────────────┼────────────────┘
//!          ┌──────┴──────┐               ┌──────┴──────┐
//!     RealFs / MockFs                RealRunner / MockRunner
//! ```
//!
//! # Usage
//!
//! ## Production (Linux)
//!
//! ```ignore
//! use rpimon::collector::{Collector, RealFs, RealRunner};
//!
//! let collector = Collector::new(RealFs::new(), RealRunner::new());
//! let snapshot = collector.collect_snapshot();
//! ```
//!
//! ## Testing (with MockFs)
//!
//! ```
//! use rpimon::collector::{Collector, MockFs, MockRunner};
//!
//! let collector = Collector::new(MockFs::raspberry_pi(), MockRunner::raspberry_pi());
//! let snapshot = collector.collect_snapshot();
//! assert_eq!(snapshot.core.count, 4);
//! assert!(snapshot.disk.is_some());
//! ```

#[allow(clippy::module_inception)]
mod collector;
pub mod config;
pub mod device;
pub mod mock;
pub mod procfs;
pub mod traits;

pub use collector::Collector;
pub use config::SourcePaths;
pub use mock::{MockFs, MockRunner};
pub use traits::{CollectError, CommandRunner, CommandSpec, FileSystem, RealFs, RealRunner};
