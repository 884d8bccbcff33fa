//! Per-source host records.
//!
//! Each struct is the typed result of exactly one parser. Serialized field
//! names match the JSON contract consumed downstream, so renames here are
//! breaking changes.

use std::collections::BTreeMap;

use serde::Serialize;

/// CPU identity from `/proc/cpuinfo`.
#[derive(Clone, Serialize, Debug, Default, PartialEq, Eq)]
pub struct CoreInfo {
    /// Number of `model name` entries (one per logical processor).
    pub count: usize,
    /// Board serial number; empty when the kernel does not report one.
    pub serial: String,
    /// Board revision code; empty when the kernel does not report one.
    pub revision: String,
}

/// Time since boot from `/proc/uptime`.
///
/// `idle` is summed across all cores and may exceed `total`.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct Uptime {
    /// Seconds since boot (NaN when unreadable).
    pub total: f64,
    /// Cumulative idle seconds across cores (NaN when unreadable).
    pub idle: f64,
}

/// SoC temperatures in degrees Celsius.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct Temperature {
    /// Thermal zone 0 reading.
    pub cpu: f64,
    /// GPU reading reported by `vcgencmd measure_temp`.
    pub gpu: f64,
}

/// Aggregate CPU time accounting from the first line of `/proc/stat`.
///
/// Values are jiffies. `None` marks a counter the kernel did not report
/// (older kernels stop before `steal`/`guest`).
#[derive(Clone, Serialize, Debug, Default, PartialEq, Eq)]
pub struct CpuState {
    pub user: Option<u64>,
    pub nice: Option<u64>,
    pub system: Option<u64>,
    pub idle: Option<u64>,
    pub iowait: Option<u64>,
    pub irq: Option<u64>,
    pub softirq: Option<u64>,
    pub steal: Option<u64>,
    pub guest: Option<u64>,
    #[serde(rename = "guestNice")]
    pub guest_nice: Option<u64>,
}

/// `/proc/meminfo` table: statistic name to value in kB.
pub type MemoryInfo = BTreeMap<String, u64>;

/// Load averages from `/proc/loadavg`, keyed by window length in minutes.
#[derive(Clone, Copy, Serialize, Debug, Default, PartialEq)]
pub struct LoadAverage {
    #[serde(rename = "1")]
    pub one: f64,
    #[serde(rename = "5")]
    pub five: f64,
    #[serde(rename = "15")]
    pub fifteen: f64,
}

/// Byte counters of a single network interface.
#[derive(Clone, Copy, Serialize, Debug, Default, PartialEq, Eq)]
pub struct NetworkCounters {
    /// Bytes received.
    pub received: u64,
    /// Bytes transmitted.
    pub transmit: u64,
}

/// `/proc/net/dev` table: interface name to byte counters.
pub type NetworkInfo = BTreeMap<String, NetworkCounters>;

/// Usage of the filesystem mounted at `/`, in the units `df` reports
/// (1K blocks by default).
#[derive(Clone, Copy, Serialize, Debug, Default, PartialEq, Eq)]
pub struct DiskInfo {
    pub total: Option<u64>,
    pub used: Option<u64>,
    pub free: Option<u64>,
}
