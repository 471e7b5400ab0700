//! Cell cleaning rules
//!
//! None of these fail: a cell that cannot be read yields the field default.

use super::BenchmarkScore;

/// Parse a numeric cell
///
/// Strips `$`, `,` and whitespace, then reads the longest leading float
/// (so `"15.6 inch"` gives 15.6). Anything unreadable gives 0.
pub fn parse_number(raw: &str) -> f64 {
    if raw.is_empty() {
        return 0.0;
    }
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();

    let value = leading_float(&cleaned)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(0.0);

    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Parse a storage cell to gigabytes (`"1.5 TB"` → 1536)
pub fn parse_storage_gb(raw: &str) -> f64 {
    let value = parse_number(raw);
    if raw.to_lowercase().contains("tb") {
        value * 1024.0
    } else {
        value
    }
}

/// Yes/no cell: only an exact (case-insensitive) "yes" is true
pub fn parse_flag(raw: &str) -> bool {
    raw.to_lowercase() == "yes"
}

/// Text cell with a fallback token for empty input
pub fn text_or(raw: &str, fallback: &str) -> String {
    if raw.is_empty() {
        fallback.to_string()
    } else {
        raw.to_string()
    }
}

/// Benchmark cell: numbers stay numbers, placeholder text is kept as-is
pub fn parse_benchmark(raw: &str) -> BenchmarkScore {
    if raw.is_empty() {
        return BenchmarkScore::default();
    }
    let cleaned: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => BenchmarkScore::Number(n),
        _ => BenchmarkScore::Text(raw.to_string()),
    }
}

/// Longest prefix of `s` shaped like a decimal float literal
fn leading_float(s: &str) -> Option<&str> {
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
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it ("1e" stays "1")
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

    Some(&s[..end])
}
