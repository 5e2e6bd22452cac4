//! Rounding and formatting helpers shared by the analysis modules and reports.

/// Round to a fixed number of decimal places (half away from zero).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Group the integer digits of `value` with commas (`1234567` -> `1,234,567`).
pub fn format_with_commas(value: u64) -> String {
    let raw = value.to_string();
    let mut grouped_reversed = String::with_capacity(raw.len() + (raw.len() / 3));
    for (idx, ch) in raw.chars().rev().enumerate() {
        if idx > 0 && idx % 3 == 0 {
            grouped_reversed.push(',');
        }
        grouped_reversed.push(ch);
    }
    grouped_reversed.chars().rev().collect()
}

/// Whole-dollar currency rendering (`-1234.6` -> `-$1,235`).
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", format_with_commas(rounded.abs() as u64))
}

/// Growth rendering used by reports; undefined growth prints as `n/a`.
pub fn format_growth(growth: Option<f64>) -> String {
    match growth {
        Some(value) => format!("{value:+.2}%"),
        None => "n/a".to_string(),
    }
}
