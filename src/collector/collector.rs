//! Main collector that reads every source and assembles a `Snapshot`.
//!
//! The `Collector` struct owns the two host capabilities and the source
//! locations, and exposes one getter per reading plus `collect_snapshot`.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, trace};

use crate::collector::config::SourcePaths;
use crate::collector::device::{parse_df, parse_thermal_zone, parse_vcgencmd_temp};
use crate::collector::procfs::{
    parse_cpu_state, parse_cpuinfo, parse_loadavg, parse_meminfo, parse_net_dev, parse_uptime,
};
use crate::collector::traits::{CommandRunner, CommandSpec, FileSystem};
use crate::model::{
    CoreInfo, CpuState, DiskInfo, LoadAverage, MemoryInfo, NetworkInfo, Snapshot, Temperature,
    Uptime,
};

/// Gathers host telemetry from `/proc`, `/sys` and the board utilities.
///
/// Holds no mutable state: every call re-reads its source, so a single
/// collector can be shared and polled repeatedly.
pub struct Collector<F: FileSystem, R: CommandRunner> {
    fs: F,
    runner: R,
    paths: SourcePaths,
}

impl<F: FileSystem, R: CommandRunner> Collector<F, R> {
    /// Creates a collector reading the default source locations.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `runner` - Command runner implementation (real or mock)
    pub fn new(fs: F, runner: R) -> Self {
        Self::with_paths(fs, runner, SourcePaths::default())
    }

    /// Creates a collector reading the given source locations.
    pub fn with_paths(fs: F, runner: R, paths: SourcePaths) -> Self {
        Self { fs, runner, paths }
    }

    /// Returns the source locations in use.
    pub fn paths(&self) -> &SourcePaths {
        &self.paths
    }

    /// Reads CPU identity from `/proc/cpuinfo`.
    pub fn core_info(&self) -> CoreInfo {
        let info = parse_cpuinfo(&self.read_text(&self.paths.cpuinfo));
        debug!(
            cores = info.count,
            has_serial = !info.serial.is_empty(),
            has_revision = !info.revision.is_empty(),
            "parsed cpuinfo"
        );
        info
    }

    /// Reads time since boot from `/proc/uptime`.
    pub fn uptime(&self) -> Uptime {
        let uptime = parse_uptime(&self.read_text(&self.paths.uptime));
        debug!(total = uptime.total, idle = uptime.idle, "parsed uptime");
        uptime
    }

    /// Reads the SoC temperature from the thermal zone, in °C.
    pub fn cpu_temperature(&self) -> f64 {
        let temp = parse_thermal_zone(&self.read_text(&self.paths.thermal_zone));
        debug!(cpu = temp, "parsed thermal zone");
        temp
    }

    /// Reads the GPU temperature through `vcgencmd`, in °C.
    pub fn gpu_temperature(&self) -> f64 {
        let temp = parse_vcgencmd_temp(&self.run_command(&self.paths.gpu_temp_command));
        debug!(gpu = temp, "parsed gpu temperature");
        temp
    }

    /// Reads both temperatures.
    pub fn temperature(&self) -> Temperature {
        Temperature {
            cpu: self.cpu_temperature(),
            gpu: self.gpu_temperature(),
        }
    }

    /// Reads aggregate CPU time counters from `/proc/stat`.
    pub fn cpu_state(&self) -> CpuState {
        let state = parse_cpu_state(&self.read_text(&self.paths.stat));
        debug!(user = ?state.user, idle = ?state.idle, "parsed cpu state");
        state
    }

    /// Reads the memory statistics table from `/proc/meminfo`.
    pub fn memory_info(&self) -> MemoryInfo {
        let memory = parse_meminfo(&self.read_text(&self.paths.meminfo));
        debug!(entries = memory.len(), "parsed meminfo");
        memory
    }

    /// Reads load averages from `/proc/loadavg`.
    pub fn load_average(&self) -> LoadAverage {
        let load = parse_loadavg(&self.read_text(&self.paths.loadavg));
        debug!(one = load.one, five = load.five, fifteen = load.fifteen, "parsed loadavg");
        load
    }

    /// Reads per-interface byte counters from `/proc/net/dev`.
    pub fn network_info(&self) -> NetworkInfo {
        let net = parse_net_dev(&self.read_text(&self.paths.net_dev));
        debug!(interfaces = net.len(), "parsed net/dev");
        net
    }

    /// Reads root filesystem usage from `df`.
    ///
    /// Returns `None` when no filesystem is mounted at `/`.
    pub fn disk_info(&self) -> Option<DiskInfo> {
        let disk = parse_df(&self.run_command(&self.paths.disk_command));
        debug!(root_mounted = disk.is_some(), "parsed df");
        disk
    }

    /// Collects every reading into a single snapshot.
    ///
    /// Never fails: each reading is taken independently, and a missing source
    /// only shows up as that reading's sentinel values.
    pub fn collect_snapshot(&self) -> Snapshot {
        let start = Instant::now();

        let snapshot = Snapshot {
            core: self.core_info(),
            uptime: self.uptime(),
            temperature: self.temperature(),
            stat: self.cpu_state(),
            memory: self.memory_info(),
            load_avg: self.load_average(),
            net: self.network_info(),
            disk: self.disk_info(),
        };

        debug!(
            elapsed_us = start.elapsed().as_micros() as u64,
            cores = snapshot.core.count,
            memory_entries = snapshot.memory.len(),
            interfaces = snapshot.net.len(),
            root_mounted = snapshot.disk.is_some(),
            "snapshot collected"
        );

        snapshot
    }

    /// Reads a source file, treating any failure as empty content.
    fn read_text(&self, path: &Path) -> String {
        match self.fs.read_to_string(path) {
            Ok(content) => {
                trace!(path = %path.display(), bytes = content.len(), "read source");
                content
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "source unavailable, using empty content");
                String::new()
            }
        }
    }

    /// Runs a source command, treating any failure as empty output.
    fn run_command(&self, command: &CommandSpec) -> String {
        match self.runner.run(command) {
            Ok(stdout) => {
                trace!(command = %command, bytes = stdout.len(), "ran source command");
                stdout
            }
            Err(e) => {
                debug!(command = %command, error = %e, "source command failed, using empty output");
                String::new()
            }
        }
    }
}
