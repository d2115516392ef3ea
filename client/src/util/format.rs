//! Display formatting for counts and backend timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `1234567` -> `"1,234,567"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// ISO-8601 `2024-01-15T10:30:00Z` -> `2024-01-15 10:30`; `-` when absent.
///
/// Strings that do not look like a timestamp are shown as-is.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".to_owned();
    };
    let Some((date, time)) = raw.split_once('T') else {
        return raw.to_owned();
    };
    let hh_mm = time.get(..5).filter(|t| t.as_bytes().get(2) == Some(&b':'));
    match hh_mm {
        Some(hh_mm) if date.len() == 10 => format!("{date} {hh_mm}"),
        _ => raw.to_owned(),
    }
}

/// Contribution share as shown next to the progress bar.
pub fn format_percentage(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Clamp a percentage into the `0..=100` range for bar widths.
pub fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}
