//! Parsers for board-level sources outside `/proc`: the sysfs thermal zone,
//! the VideoCore `vcgencmd` utility, and `df`.

use crate::model::DiskInfo;
use crate::util::{leading_real, parse_token, real_or};

/// Mount point whose usage is reported.
const ROOT_MOUNT: &str = "/";

// ============ Thermal Zone Parser ============

/// Parses a sysfs thermal zone reading into degrees Celsius.
///
/// The kernel reports millidegrees (`52000` means 52.0 °C). Empty or
/// malformed content yields NaN rather than a plausible-looking 0 °C.
pub fn parse_thermal_zone(content: &str) -> f64 {
    real_or(Some(content), f64::NAN) / 1000.0
}

// ============ vcgencmd Parser ============

/// Parses `vcgencmd measure_temp` output.
///
/// Format: `temp=48.3'C`. The first `temp=` label is removed and the leading
/// number of what remains is returned; the unit suffix is ignored. Output
/// with no number (command missing, firmware error) yields NaN.
pub fn parse_vcgencmd_temp(output: &str) -> f64 {
    leading_real(&output.replacen("temp=", "", 1))
}

// ============ df Parser ============

/// Parses `df` output and returns the usage of the filesystem mounted at `/`.
///
/// Format:
/// Filesystem     1K-blocks    Used Available Use% Mounted on
/// /dev/root       30450624 6145236  23020852  22% /
///
/// The first line is a header. The first row whose last column is exactly
/// `/` wins; its columns 1, 2 and 3 are total, used and free. Columns that
/// are missing or not integers are `None`. Returns `None` when no row is
/// mounted at `/`.
pub fn parse_df(output: &str) -> Option<DiskInfo> {
    output
        .trim()
        .lines()
        .skip(1)
        .map(|line| line.split_whitespace().collect::<Vec<&str>>())
        .find(|cols| cols.last() == Some(&ROOT_MOUNT))
        .map(|cols| DiskInfo {
            total: parse_token(cols.get(1).copied()),
            used: parse_token(cols.get(2).copied()),
            free: parse_token(cols.get(3).copied()),
        })
}
