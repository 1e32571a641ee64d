//! Parsing of free-form shop dimension notation.
//!
//! Everything here is best effort: input that cannot be read degrades to
//! zero (or one, for quantities) instead of failing. Checking that a value
//! was actually supplied is the job of the save-time checklist.

use crate::config::GAUGE_TABLE;

/// Convert a thickness or size label to decimal inches.
///
/// Accepts gauge labels (`16 ga`), mixed numbers (`1-1/4"`), fractions
/// (`3/4"`) and decimals (`.375`). Returns `0.0` for anything else.
pub fn parse_thickness(raw: &str) -> f64 {
    if raw.is_empty() {
        return 0.0;
    }
    if let Some(value) = gauge_thickness(raw) {
        return value;
    }

    let clean = raw.replace('"', "");
    let clean = clean.trim();

    let value = if clean.contains('-') {
        let mut halves = clean.split('-');
        let whole = halves.next().and_then(parse_exact);
        let frac = halves.next().and_then(parse_fraction);
        match (whole, frac) {
            (Some(whole), Some(frac)) => whole + frac,
            _ => 0.0,
        }
    } else if clean.contains('/') {
        parse_fraction(clean).unwrap_or(0.0)
    } else {
        parse_number(clean)
    };

    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Look up a sheet-gauge label. Exact match only.
pub fn gauge_thickness(label: &str) -> Option<f64> {
    GAUGE_TABLE
        .iter()
        .find(|(gauge, _)| *gauge == label)
        .map(|(_, value)| *value)
}

/// Parse `N/D` into a decimal.
fn parse_fraction(s: &str) -> Option<f64> {
    let mut parts = s.split('/');
    let numerator = parse_exact(parts.next()?)?;
    let denominator = parse_exact(parts.next()?)?;
    let value = numerator / denominator;
    value.is_finite().then_some(value)
}

/// Strict numeric conversion of a whole segment; blank reads as zero.
fn parse_exact(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Read a number from the start of a field, ignoring trailing text.
///
/// `48"` reads as 48, `12.5 ft` as 12.5. Returns `None` when the field does
/// not start with a number.
pub fn parse_leading_f64(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Read a number from a field, treating anything unreadable as zero.
pub fn parse_number(raw: &str) -> f64 {
    parse_leading_f64(raw).unwrap_or(0.0)
}

/// Read a number that only counts when strictly positive.
pub fn parse_positive(raw: &str) -> Option<f64> {
    parse_leading_f64(raw).filter(|v| *v > 0.0)
}

/// Read an integer from the start of a field (`3.7` reads as 3).
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse().ok()
}

/// Coerce a quantity field to an integer of at least one.
pub fn parse_quantity(raw: &str) -> u32 {
    match parse_leading_int(raw) {
        Some(q) if q >= 1 => u32::try_from(q).unwrap_or(u32::MAX),
        _ => 1,
    }
}
