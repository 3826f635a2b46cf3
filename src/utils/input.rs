//! Field Input Normalization
//!
//! Form fields arrive as raw text on every keystroke. These helpers turn that
//! text into safe numbers before any calculator sees it: non-numeric,
//! negative and non-finite input all collapse to 0.

/// Parse a weight/amount field (kg, currency). Invalid input becomes 0.
pub fn parse_non_negative(raw: &str) -> f64 {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) => non_negative(v),
        Err(_) => {
            if !trimmed.is_empty() {
                tracing::debug!("Non-numeric field input '{}' normalized to 0", raw);
            }
            0.0
        }
    }
}

/// Clamp an already-numeric amount to a finite value >= 0
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse a whole-number count field. Invalid input becomes 0.
///
/// Decimal input is truncated ("2.7" → 2), matching how count fields
/// drop the fractional part when the form re-renders.
pub fn parse_count(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return v;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v.trunc() as i64,
        _ => {
            if !trimmed.is_empty() {
                tracing::debug!("Non-numeric count input '{}' normalized to 0", raw);
            }
            0
        }
    }
}

/// Clamp a count into `[min, max]`, returning the narrowed type used by value objects
pub fn clamp_count(value: i64, min: u32, max: u32) -> u32 {
    value.clamp(i64::from(min), i64::from(max)) as u32
}
