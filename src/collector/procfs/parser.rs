//! Parsers for `/proc` filesystem files.
//!
//! These are pure functions that parse the content of various `/proc` files
//! into structured data. They never fail: malformed input degrades into the
//! per-field sentinel documented on each function.

use crate::model::{
    CoreInfo, CpuState, LoadAverage, MemoryInfo, NetworkCounters, NetworkInfo, Uptime,
};
use crate::util::{count_or, parse_token, real_or};

// ============ CPU Info Parser ============

/// Parses `/proc/cpuinfo` content.
///
/// - `count` is the number of lines starting with `model name` followed by a
///   colon (case-insensitive, optional whitespace before the colon).
/// - `serial` and `revision` come from the first matching line, trimmed, and
///   are empty when absent. x86 kernels report neither.
pub fn parse_cpuinfo(content: &str) -> CoreInfo {
    let mut info = CoreInfo::default();
    let mut serial = None;
    let mut revision = None;

    for line in content.lines() {
        if field_value(line, "model name").is_some() {
            info.count += 1;
        }
        if serial.is_none() {
            serial = field_value(line, "serial");
        }
        if revision.is_none() {
            revision = field_value(line, "revision");
        }
    }

    info.serial = serial.unwrap_or_default().to_string();
    info.revision = revision.unwrap_or_default().to_string();
    info
}

/// Matches `<label>\s*:\s*<value>` at the start of `line`, label compared
/// ASCII case-insensitively. Returns the trimmed value.
fn field_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let head = line.get(..label.len())?;
    if !head.eq_ignore_ascii_case(label) {
        return None;
    }
    let rest = line[label.len()..].trim_start();
    rest.strip_prefix(':').map(str::trim)
}

// ============ Uptime Parser ============

/// Parses `/proc/uptime` content.
///
/// Format: `12345.67 45678.90` (seconds since boot, idle seconds summed over
/// all cores), separated by a single space. A missing or malformed figure
/// is NaN.
pub fn parse_uptime(content: &str) -> Uptime {
    let mut parts = content.split(' ');
    Uptime {
        total: real_or(parts.next(), f64::NAN),
        idle: real_or(parts.next(), f64::NAN),
    }
}

// ============ CPU State Parser ============

/// Parses the aggregate `cpu` line of `/proc/stat`.
///
/// Only the first line is read. Format:
/// `cpu  user nice system idle iowait irq softirq steal guest guest_nice`
///
/// Counters missing from the line (older kernels) or not integers are `None`.
pub fn parse_cpu_state(content: &str) -> CpuState {
    let first = content.lines().next().unwrap_or("");
    let parts: Vec<&str> = first.split_whitespace().skip(1).collect();

    let get_val = |idx: usize| -> Option<u64> { parse_token(parts.get(idx).copied()) };

    CpuState {
        user: get_val(0),
        nice: get_val(1),
        system: get_val(2),
        idle: get_val(3),
        iowait: get_val(4),
        irq: get_val(5),
        softirq: get_val(6),
        steal: get_val(7),
        guest: get_val(8),
        guest_nice: get_val(9),
    }
}

// ============ Memory Info Parser ============

/// Parses `/proc/meminfo` content into a name -> kB table.
///
/// Every line of the form `Label:   123 kB` contributes an entry; the unit
/// suffix is ignored and later duplicates overwrite earlier ones. Lines
/// without a `: <digits>` part are skipped. A value too large for `u64`
/// becomes 0.
pub fn parse_meminfo(content: &str) -> MemoryInfo {
    let mut info = MemoryInfo::new();

    for line in content.lines() {
        if let Some((label, digits)) = split_label_digits(line) {
            info.insert(label.to_string(), count_or(Some(digits), 0));
        }
    }

    info
}

/// Splits `line` at the first colon that is followed by optional whitespace
/// and a digit. Returns the label (trailing whitespace removed) and the run
/// of digits after the colon.
fn split_label_digits(line: &str) -> Option<(&str, &str)> {
    for (pos, _) in line.match_indices(':') {
        let rest = line[pos + 1..].trim_start();
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len > 0 {
            return Some((line[..pos].trim_end(), &rest[..len]));
        }
    }
    None
}

// ============ Load Average Parser ============

/// Parses `/proc/loadavg` content.
///
/// Format: `0.50 0.75 1.00 3/512 12345`. Only the first three
/// whitespace-separated fields are used; any that fail to parse are 0.
pub fn parse_loadavg(content: &str) -> LoadAverage {
    let mut parts = content.split_whitespace();
    LoadAverage {
        one: real_or(parts.next(), 0.0),
        five: real_or(parts.next(), 0.0),
        fifteen: real_or(parts.next(), 0.0),
    }
}

// ============ Network Device Stats Parser ============

/// Parses `/proc/net/dev` content.
///
/// Format:
/// Inter-|   Receive                                                |  Transmit
///  face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
///    lo: 1234567     1234    0    0    0     0          0         0  1234567     1234    0    0    0     0       0          0
///
/// The first two lines are headers. A data line needs an interface name, a
/// colon, then at least nine numeric columns: receive bytes, seven ignored
/// receive counters, transmit bytes. Lines that do not fit are skipped.
pub fn parse_net_dev(content: &str) -> NetworkInfo {
    let mut devices = NetworkInfo::new();

    for line in content.lines().skip(2) {
        let Some((interface, values)) = line.split_once(':') else {
            continue;
        };

        let values: Vec<&str> = values.split_whitespace().take(9).collect();
        if values.len() < 9 || !values.iter().all(|v| v.bytes().all(|b| b.is_ascii_digit())) {
            continue;
        }

        devices.insert(
            interface.trim().to_string(),
            NetworkCounters {
                received: count_or(values.first().copied(), 0),
                transmit: count_or(values.get(8).copied(), 0),
            },
        );
    }

    devices
}

#[cfg(test)]
mod tests {
    use super::*;

    const PI4_CPUINFO: &str = "\
processor\t: 0
model name\t: ARMv7 Processor rev 3 (v7l)
BogoMIPS\t: 108.00
Features\t: half thumb fastmult vfp edsp neon vfpv3 tls vfpv4 idiva idivt vfpd32 lpae evtstrm crc32
CPU implementer\t: 0x41
CPU revision\t: 3

processor\t: 1
model name\t: ARMv7 Processor rev 3 (v7l)
BogoMIPS\t: 108.00

processor\t: 2
model name\t: ARMv7 Processor rev 3 (v7l)
BogoMIPS\t: 108.00

processor\t: 3
model name\t: ARMv7 Processor rev 3 (v7l)
BogoMIPS\t: 108.00

Hardware\t: BCM2711
Revision\t: c03111
Serial\t\t: 10000000abcdef01
Model\t\t: Raspberry Pi 4 Model B Rev 1.1
";

    #[test]
    fn test_parse_cpuinfo_pi4() {
        let info = parse_cpuinfo(PI4_CPUINFO);

        assert_eq!(info.count, 4);
        assert_eq!(info.serial, "10000000abcdef01");
        // "CPU revision" must not shadow the board "Revision" line.
        assert_eq!(info.revision, "c03111");
    }

    #[test]
    fn test_parse_cpuinfo_case_insensitive_count() {
        let content = "Model Name: a\nMODEL NAME   : b\nmodel name:c\n  model name: indented\n";
        let info = parse_cpuinfo(content);

        assert_eq!(info.count, 3);
        assert_eq!(info.serial, "");
        assert_eq!(info.revision, "");
    }

    #[test]
    fn test_parse_cpuinfo_first_serial_wins() {
        let content = "serial : AAA  \nSerial: BBB\nSerial Number: CCC\n";
        let info = parse_cpuinfo(content);

        assert_eq!(info.serial, "AAA");
    }

    #[test]
    fn test_parse_cpuinfo_empty() {
        assert_eq!(parse_cpuinfo(""), CoreInfo::default());
    }

    #[test]
    fn test_parse_uptime() {
        let uptime = parse_uptime("12345.67 45678.90\n");

        assert!((uptime.total - 12345.67).abs() < 1e-9);
        assert!((uptime.idle - 45678.90).abs() < 1e-9);
    }

    #[test]
    fn test_parse_uptime_missing_tokens() {
        let empty = parse_uptime("");
        assert!(empty.total.is_nan());
        assert!(empty.idle.is_nan());

        let partial = parse_uptime("100.5");
        assert_eq!(partial.total, 100.5);
        assert!(partial.idle.is_nan());

        let garbage = parse_uptime("up idle");
        assert!(garbage.total.is_nan());
        assert!(garbage.idle.is_nan());
    }

    #[test]
    fn test_parse_cpu_state_positional() {
        let content = "cpu 10 20 30 40 50 60 70 80 90 100\ncpu0 1 2 3 4 5 6 7 8 9 10\n";
        let stat = parse_cpu_state(content);

        assert_eq!(stat.user, Some(10));
        assert_eq!(stat.nice, Some(20));
        assert_eq!(stat.system, Some(30));
        assert_eq!(stat.idle, Some(40));
        assert_eq!(stat.iowait, Some(50));
        assert_eq!(stat.irq, Some(60));
        assert_eq!(stat.softirq, Some(70));
        assert_eq!(stat.steal, Some(80));
        assert_eq!(stat.guest, Some(90));
        assert_eq!(stat.guest_nice, Some(100));
    }

    #[test]
    fn test_parse_cpu_state_short_line() {
        // Pre-2.6.33 kernels stop after steal.
        let stat = parse_cpu_state("cpu  10000 500 3000 80000 1000 200 100 7\n");

        assert_eq!(stat.user, Some(10000));
        assert_eq!(stat.steal, Some(7));
        assert_eq!(stat.guest, None);
        assert_eq!(stat.guest_nice, None);
    }

    #[test]
    fn test_parse_cpu_state_empty() {
        assert_eq!(parse_cpu_state(""), CpuState::default());
    }

    #[test]
    fn test_parse_meminfo() {
        let content = "\
MemTotal:        3884292 kB
MemFree:          218456 kB
MemAvailable:    2456780 kB
Invalid line

HugePages_Total:       0
Hugepagesize:       2048 kB
";
        let info = parse_meminfo(content);

        assert_eq!(info.len(), 5);
        assert_eq!(info.get("MemTotal"), Some(&3884292));
        assert_eq!(info.get("MemAvailable"), Some(&2456780));
        assert_eq!(info.get("HugePages_Total"), Some(&0));
        assert_eq!(info.get("Hugepagesize"), Some(&2048));
        assert!(!info.contains_key("Invalid line"));
    }

    #[test]
    fn test_parse_meminfo_duplicates_and_overflow() {
        let content = "Cached: 10 kB\nCached: 20 kB\nHuge: 99999999999999999999999 kB\n";
        let info = parse_meminfo(content);

        assert_eq!(info.get("Cached"), Some(&20));
        assert_eq!(info.get("Huge"), Some(&0));
    }

    #[test]
    fn test_parse_meminfo_label_spans_non_numeric_colon() {
        let info = parse_meminfo("Node 0, zone: DMA: 42\nLabel :  7 kB\n");

        assert_eq!(info.get("Node 0, zone: DMA"), Some(&42));
        assert_eq!(info.get("Label"), Some(&7));
    }

    #[test]
    fn test_parse_loadavg() {
        let load = parse_loadavg("0.50 0.75 1.00 3/512 12345");

        assert_eq!(load.one, 0.50);
        assert_eq!(load.five, 0.75);
        assert_eq!(load.fifteen, 1.00);
    }

    #[test]
    fn test_parse_loadavg_mixed_whitespace() {
        let load = parse_loadavg("0.50\t0.75  1.00\n");

        assert_eq!(load.one, 0.50);
        assert_eq!(load.five, 0.75);
        assert_eq!(load.fifteen, 1.00);
    }

    #[test]
    fn test_parse_loadavg_coerces_to_zero() {
        assert_eq!(parse_loadavg(""), LoadAverage::default());

        let load = parse_loadavg("0.15 x\n");
        assert_eq!(load.one, 0.15);
        assert_eq!(load.five, 0.0);
        assert_eq!(load.fifteen, 0.0);
    }

    #[test]
    fn test_parse_net_dev() {
        let content = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo: 1234567     1234    0    0    0     0          0         0  1234567     1234    0    0    0     0       0          0
  eth0: 100 0 0 0 0 0 0 0 200 0 0 0 0 0 0 0
 wlan0: 9876543     5678    1    2    0     0          0        10 87654321     4321    3    4    0     0       0          0
";
        let devices = parse_net_dev(content);

        assert_eq!(devices.len(), 3);
        assert_eq!(
            devices.get("eth0"),
            Some(&NetworkCounters {
                received: 100,
                transmit: 200
            })
        );
        assert_eq!(devices["lo"].received, 1234567);
        assert_eq!(devices["wlan0"].transmit, 87654321);
    }

    #[test]
    fn test_parse_net_dev_skips_headers_and_short_lines() {
        // First two lines are always headers, even if they look like data.
        let content = "\
eth9: 1 0 0 0 0 0 0 0 2
eth8: 1 0 0 0 0 0 0 0 2
  eth0: 100 0 0 0
  eth1 100 0 0 0 0 0 0 0 200
  eth2: 100 0 0 x 0 0 0 0 200
  usb0: 5 0 0 0 0 0 0 0 6
";
        let devices = parse_net_dev(content);

        assert_eq!(devices.len(), 1);
        assert_eq!(devices["usb0"].received, 5);
        assert_eq!(devices["usb0"].transmit, 6);
    }

    #[test]
    fn test_parse_net_dev_empty() {
        assert!(parse_net_dev("").is_empty());
    }

    #[test]
    fn test_parsers_idempotent() {
        assert_eq!(parse_cpuinfo(PI4_CPUINFO), parse_cpuinfo(PI4_CPUINFO));
        let stat = "cpu 1 2 3 4 5 6 7 8 9 10";
        assert_eq!(parse_cpu_state(stat), parse_cpu_state(stat));
        let mem = "MemTotal: 1 kB\nMemFree: 2 kB";
        assert_eq!(parse_meminfo(mem), parse_meminfo(mem));
        let load = "0.1 0.2 0.3 1/2 3";
        assert_eq!(parse_loadavg(load), parse_loadavg(load));
    }

    #[test]
    fn test_parsers_idempotent_with_nan() {
        for content in ["", "garbage", "12345.67 45678.90\n"] {
            let (a, b) = (parse_uptime(content), parse_uptime(content));
            assert_eq!(a.total.to_bits(), b.total.to_bits());
            assert_eq!(a.idle.to_bits(), b.idle.to_bits());
        }
        assert_eq!(
            serde_json::to_value(parse_uptime("")).unwrap(),
            serde_json::to_value(parse_uptime("")).unwrap()
        );
    }
}
