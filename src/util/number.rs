//! Numeric token coercion with an explicit fallback.
//!
//! Every parser in this crate decides per field what a missing or malformed
//! number becomes: `NaN`, `0`, or `None`. These helpers keep that decision
//! at the call site instead of hiding it in a generic `parse().unwrap_or()`.

use std::str::FromStr;

/// Parses a token after trimming surrounding whitespace.
///
/// Returns `None` when the token is missing, empty, or not a plain decimal
/// number. Words such as `inf` or `nan` that Rust's float parser would accept
/// are rejected, so a kernel file never turns into an infinite reading.
pub fn parse_token<T: FromStr>(token: Option<&str>) -> Option<T> {
    let token = token?.trim();
    if token.is_empty() || !is_decimal(token) {
        return None;
    }
    token.parse().ok()
}

/// Parses a real number, returning `fallback` when the token is unusable.
///
/// Pass `f64::NAN` to make missing data visible, or `0.0` for tables where a
/// zero placeholder is acceptable.
pub fn real_or(token: Option<&str>, fallback: f64) -> f64 {
    parse_token::<f64>(token)
        .filter(|v| !v.is_nan())
        .unwrap_or(fallback)
}

/// Parses an unsigned counter, returning `fallback` when the token is unusable.
pub fn count_or(token: Option<&str>, fallback: u64) -> u64 {
    parse_token(token).unwrap_or(fallback)
}

/// Parses the longest real-number prefix of `text`.
///
/// Leading whitespace is skipped; the prefix is an optional sign, digits with
/// an optional fractional part, and an optional exponent. Anything after it
/// (such as a `'C` unit marker) is ignored. Returns `NaN` when there is no
/// numeric prefix at all.
pub fn leading_real(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when followed by at least one digit.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

fn is_decimal(token: &str) -> bool {
    token
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}
