//! Presentation-layer number formatting.
//!
//! Rounding to two decimals happens here and only here; the engine carries
//! full-precision values. Absent values render as blank cells, never `0.00`.

/// Formats a monetary value with two decimals and thousands separators,
/// e.g. `12,500.75`.
pub fn fmt_money(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (pos, ch) in int_part.chars().enumerate() {
        if pos > 0 && (int_part.len() - pos) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Formats an optional monetary value, blank when absent.
pub fn fmt_opt_money(value: Option<f64>) -> String {
    value.map(fmt_money).unwrap_or_default()
}

/// Formats an optional percentage with two decimals and a `%` suffix, blank
/// when absent.
pub fn fmt_opt_percent(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}%")).unwrap_or_default()
}
