//! Source locations read by the collector.

use std::path::PathBuf;

use crate::collector::traits::CommandSpec;

/// Default `/proc` mount point.
pub const DEFAULT_PROC_PATH: &str = "/proc";

/// Default `/sys` mount point.
pub const DEFAULT_SYS_PATH: &str = "/sys";

/// Default VideoCore utility shipped with Raspberry Pi OS.
pub const DEFAULT_VCGENCMD: &str = "/opt/vc/bin/vcgencmd";

/// Where each reading comes from.
///
/// Relocating `/proc` and `/sys` is useful inside containers that bind-mount
/// the host's pseudo filesystems elsewhere, and for fixture-driven tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub cpuinfo: PathBuf,
    pub uptime: PathBuf,
    pub stat: PathBuf,
    pub meminfo: PathBuf,
    pub loadavg: PathBuf,
    pub net_dev: PathBuf,
    /// Thermal zone reporting millidegrees Celsius.
    pub thermal_zone: PathBuf,
    /// Command printing `temp=NN.N'C`.
    pub gpu_temp_command: CommandSpec,
    /// Command printing a `df`-style usage table.
    pub disk_command: CommandSpec,
}

impl SourcePaths {
    /// Builds paths under the given `/proc` and `/sys` mount points.
    ///
    /// # Arguments
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    /// * `sys_path` - Base path to sysfs (usually "/sys")
    pub fn with_roots(proc_path: impl Into<PathBuf>, sys_path: impl Into<PathBuf>) -> Self {
        let proc_path = proc_path.into();
        let sys_path = sys_path.into();

        Self {
            cpuinfo: proc_path.join("cpuinfo"),
            uptime: proc_path.join("uptime"),
            stat: proc_path.join("stat"),
            meminfo: proc_path.join("meminfo"),
            loadavg: proc_path.join("loadavg"),
            net_dev: proc_path.join("net/dev"),
            thermal_zone: sys_path.join("class/thermal/thermal_zone0/temp"),
            gpu_temp_command: CommandSpec::new(DEFAULT_VCGENCMD, ["measure_temp"]),
            disk_command: CommandSpec::new("df", Vec::<String>::new()),
        }
    }

    /// Replaces the GPU temperature command.
    pub fn with_gpu_temp_command(mut self, command: CommandSpec) -> Self {
        self.gpu_temp_command = command;
        self
    }

    /// Replaces the disk usage command.
    pub fn with_disk_command(mut self, command: CommandSpec) -> Self {
        self.disk_command = command;
        self
    }
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self::with_roots(DEFAULT_PROC_PATH, DEFAULT_SYS_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_paths() {
        let paths = SourcePaths::default();
        assert_eq!(paths.cpuinfo, Path::new("/proc/cpuinfo"));
        assert_eq!(paths.net_dev, Path::new("/proc/net/dev"));
        assert_eq!(
            paths.thermal_zone,
            Path::new("/sys/class/thermal/thermal_zone0/temp")
        );
        assert_eq!(
            paths.gpu_temp_command.to_string(),
            "/opt/vc/bin/vcgencmd measure_temp"
        );
        assert_eq!(paths.disk_command.to_string(), "df");
    }

    #[test]
    fn test_relocated_roots() {
        let paths = SourcePaths::with_roots("/host/proc", "/host/sys");
        assert_eq!(paths.meminfo, Path::new("/host/proc/meminfo"));
        assert_eq!(paths.loadavg, Path::new("/host/proc/loadavg"));
        assert_eq!(
            paths.thermal_zone,
            Path::new("/host/sys/class/thermal/thermal_zone0/temp")
        );
    }

    #[test]
    fn test_command_overrides() {
        let paths = SourcePaths::default()
            .with_gpu_temp_command(CommandSpec::new("vcgencmd", ["measure_temp"]))
            .with_disk_command(CommandSpec::new("df", ["-k"]));
        assert_eq!(paths.gpu_temp_command.program, "vcgencmd");
        assert_eq!(paths.disk_command.to_string(), "df -k");
    }
}
