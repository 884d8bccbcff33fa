//! Aggregated point-in-time host snapshot.

use serde::Serialize;

use super::system::{
    CoreInfo, CpuState, DiskInfo, LoadAverage, MemoryInfo, NetworkInfo, Temperature, Uptime,
};

/// A complete reading of every monitored source.
///
/// All fields are always present. Sources that could not be read show up as
/// sentinel values (NaN, `None`, empty tables, empty strings) rather than
/// being dropped, so consumers can rely on the shape.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct Snapshot {
    pub core: CoreInfo,
    pub uptime: Uptime,
    pub temperature: Temperature,
    pub stat: CpuState,
    pub memory: MemoryInfo,
    #[serde(rename = "loadAvg")]
    pub load_avg: LoadAverage,
    pub net: NetworkInfo,
    /// `None` when no filesystem is mounted at `/`.
    pub disk: Option<DiskInfo>,
}

impl Snapshot {
    /// Returns a one-line description suitable for logging.
    ///
    /// # Example output
    /// ```text
    /// 4 cores, up 12345s, cpu 48.3°C, gpu 49.1°C, load 0.50 0.75 1.00, mem 2456780/3884292 kB avail, 2 ifaces, disk 400/1000 used
    /// ```
    pub fn summary(&self) -> String {
        let mem = match (
            self.memory.get("MemAvailable"),
            self.memory.get("MemTotal"),
        ) {
            (Some(avail), Some(total)) => format!("{avail}/{total} kB avail"),
            _ => format!("{} entries", self.memory.len()),
        };

        let disk = match self.disk {
            Some(DiskInfo {
                total: Some(total),
                used: Some(used),
                ..
            }) => format!("{used}/{total} used"),
            Some(_) => "unparsed".to_string(),
            None => "no root mount".to_string(),
        };

        format!(
            "{} cores, up {}s, cpu {}°C, gpu {}°C, load {:.2} {:.2} {:.2}, mem {mem}, {} ifaces, disk {disk}",
            self.core.count,
            fmt_real(self.uptime.total, 0),
            fmt_real(self.temperature.cpu, 1),
            fmt_real(self.temperature.gpu, 1),
            self.load_avg.one,
            self.load_avg.five,
            self.load_avg.fifteen,
            self.net.len(),
        )
    }
}

fn fmt_real(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{value:.precision$}")
    }
}
