//! Number formatting for stored fields and display text.
//!
//! Stored money fields are fixed at two decimals with ties rounded away from
//! zero, matching what the part store already holds.

/// Shortest text form of a number: `20`, `12.5`, `0.1875`.
pub fn trim_number(value: f64) -> String {
    if value == 0.0 {
        // Also folds negative zero.
        return "0".to_string();
    }
    format!("{}", value)
}

/// Fixed-point text with `decimals` places.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return trim_number(value);
    }

    const GUARD: usize = 25;
    let magnitude = value.abs();
    let wide = format!("{:.*}", decimals + GUARD, magnitude);
    let (head, tail) = wide.split_at(wide.len() - GUARD);
    let tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    let digits = if tie {
        round_up(head.trim_end_matches('.'))
    } else {
        format!("{:.*}", decimals, magnitude)
    };

    if value < 0.0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Add one unit in the last place of a plain decimal string.
fn round_up(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    let mut i = bytes.len();
    while i > 0 {
        i -= 1;
        match bytes[i] {
            b'.' => continue,
            b'9' => bytes[i] = b'0',
            d => {
                bytes[i] = d + 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }
    let mut out = String::with_capacity(bytes.len() + 1);
    out.push('1');
    out.push_str(&String::from_utf8_lossy(&bytes));
    out
}

/// Money as stored: two decimals, no symbol.
pub fn format_money(value: f64) -> String {
    format_fixed(value, 2)
}

/// Money for display: `$1,234.50`.
pub fn format_currency(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format_fixed(value.abs(), 2);
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, frac)
}
