//! Pre-built mock scenarios for testing.
//!
//! These scenarios provide realistic `/proc`, `/sys` and command output
//! states for the hosts rpimon is expected to run on.

use super::filesystem::MockFs;
use super::runner::MockRunner;
use crate::collector::config::SourcePaths;

impl MockFs {
    /// Creates a Raspberry Pi 4 Model B running a 32-bit kernel.
    ///
    /// Every source the collector reads is present at its default location.
    pub fn raspberry_pi() -> Self {
        let mut fs = Self::new();

        fs.add_file(
            "/proc/cpuinfo",
            "\
processor\t: 0
model name\t: ARMv7 Processor rev 3 (v7l)
BogoMIPS\t: 108.00
Features\t: half thumb fastmult vfp edsp neon vfpv3 tls vfpv4 idiva idivt vfpd32 lpae evtstrm crc32
CPU implementer\t: 0x41
CPU architecture: 7
CPU variant\t: 0x0
CPU part\t: 0xd08
CPU revision\t: 3

processor\t: 1
model name\t: ARMv7 Processor rev 3 (v7l)
BogoMIPS\t: 108.00
CPU revision\t: 3

processor\t: 2
model name\t: ARMv7 Processor rev 3 (v7l)
BogoMIPS\t: 108.00
CPU revision\t: 3

processor\t: 3
model name\t: ARMv7 Processor rev 3 (v7l)
BogoMIPS\t: 108.00
CPU revision\t: 3

Hardware\t: BCM2711
Revision\t: c03111
Serial\t\t: 10000000abcdef01
Model\t\t: Raspberry Pi 4 Model B Rev 1.1
",
        );
        fs.add_file("/proc/uptime", "12345.67 45678.90\n");
        fs.add_file(
            "/proc/stat",
            "\
cpu  10000 500 3000 80000 1000 200 100 0 0 0
cpu0 2500 125 750 20000 250 50 25 0 0 0
cpu1 2500 125 750 20000 250 50 25 0 0 0
cpu2 2500 125 750 20000 250 50 25 0 0 0
cpu3 2500 125 750 20000 250 50 25 0 0 0
intr 1000000 50 0 0 0 0 0 0 0 1 0 0 0 100 0 0 1000
ctxt 500000
btime 1700000000
processes 10000
procs_running 2
procs_blocked 0
",
        );
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:        3884292 kB
MemFree:          218456 kB
MemAvailable:    2456780 kB
Buffers:          123456 kB
Cached:          1987654 kB
SwapCached:            0 kB
Active:          1234567 kB
Inactive:         876543 kB
SwapTotal:        102396 kB
SwapFree:         102396 kB
CmaTotal:         262144 kB
CmaFree:          231880 kB
",
        );
        fs.add_file("/proc/loadavg", "0.50 0.75 1.00 3/512 12345\n");
        fs.add_file(
            "/proc/net/dev",
            "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo:   52144     612    0    0    0     0          0         0    52144     612    0    0    0     0       0          0
  eth0: 987654321   654321    5   10    0     0          0       100 123456789   456789    2    5    0     0       0          0
 wlan0:       0       0    0    0    0     0          0         0        0       0    0    0    0     0       0          0
",
        );
        fs.add_file("/sys/class/thermal/thermal_zone0/temp", "48312\n");

        fs
    }

    /// Creates a generic x86 container: `/proc` is mounted but the board
    /// specific sources (thermal zone, serial, revision) are missing.
    pub fn generic_container() -> Self {
        let mut fs = Self::raspberry_pi();
        fs.add_file(
            "/proc/cpuinfo",
            "\
processor\t: 0
vendor_id\t: GenuineIntel
model name\t: Intel(R) Xeon(R) CPU @ 2.20GHz

processor\t: 1
vendor_id\t: GenuineIntel
model name\t: Intel(R) Xeon(R) CPU @ 2.20GHz
",
        );
        fs.remove_file("/sys/class/thermal/thermal_zone0/temp");
        fs
    }
}

impl MockRunner {
    /// Creates the command outputs of a Raspberry Pi 4 with the default
    /// [`SourcePaths`] commands.
    pub fn raspberry_pi() -> Self {
        let paths = SourcePaths::default();
        let mut runner = Self::new();

        runner.add_output(&paths.gpu_temp_command, "temp=49.1'C\n");
        runner.add_output(
            &paths.disk_command,
            "\
Filesystem     1K-blocks    Used Available Use% Mounted on
/dev/root       30450624 6145236  23020852  22% /
devtmpfs         1827880       0   1827880   0% /dev
tmpfs            1959960       0   1959960   0% /dev/shm
/dev/mmcblk0p1    258095   49395    208700  20% /boot
",
        );

        runner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::traits::{CommandRunner, FileSystem};

    #[test]
    fn test_raspberry_pi_has_all_sources() {
        let fs = MockFs::raspberry_pi();
        let paths = SourcePaths::default();

        for path in [
            &paths.cpuinfo,
            &paths.uptime,
            &paths.stat,
            &paths.meminfo,
            &paths.loadavg,
            &paths.net_dev,
            &paths.thermal_zone,
        ] {
            assert!(fs.read_to_string(path).is_ok(), "missing {}", path.display());
        }

        let runner = MockRunner::raspberry_pi();
        assert!(runner.run(&paths.gpu_temp_command).is_ok());
        assert!(runner.run(&paths.disk_command).is_ok());
    }

    #[test]
    fn test_generic_container_has_no_thermal_zone() {
        let fs = MockFs::generic_container();
        let paths = SourcePaths::default();

        assert!(fs.read_to_string(&paths.thermal_zone).is_err());
        assert!(fs.read_to_string(&paths.meminfo).is_ok());
    }
}
