//! Data models produced by the collector.

mod snapshot;
mod system;

pub use snapshot::Snapshot;
pub use system::{
    CoreInfo, CpuState, DiskInfo, LoadAverage, MemoryInfo, NetworkCounters, NetworkInfo,
    Temperature, Uptime,
};
