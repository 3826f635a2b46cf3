/// Render a number with at most `decimals` places, dropping trailing zeros
///
/// `4.0` → `"4"`, `3.3333` → `"3.33"`, `2.50` → `"2.5"`
pub fn trim_number(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0').trim_end_matches('.');
    // "-0" after rounding tiny negatives
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Textual fresh:dry form of a ratio, e.g. `4` → `"4:1"`
pub fn format_ratio(ratio: f64) -> String {
    format!("{}:1", trim_number(ratio, 2))
}
