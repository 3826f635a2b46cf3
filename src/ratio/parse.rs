//! Fresh:dry ratio text parsing
//!
//! Accepted grammar: `NUMBER` or `NUMBER:NUMBER`. Anything else yields the
//! default ratio of 1.

/// Ratio used when the typed text is not a usable ratio
pub const DEFAULT_RATIO: f64 = 1.0;

/// Parse ratio text as typed into the ratio field
///
/// - `"5"` → 5 (must be a positive number)
/// - `"7:1"` → 7 (numerator >= 0, denominator > 0)
///
/// The result is finite and either exactly 0 (`"0:1"`) or at least
/// `f64::MIN_POSITIVE`; subnormal and overflowing quotients are rejected.
pub fn parse_ratio_input(raw: &str) -> f64 {
    let trimmed = raw.trim();

    let parsed = match trimmed.split_once(':') {
        Some((num, den)) => parse_pair(num, den),
        None => parse_finite(trimmed).filter(|v| is_normal_positive(*v)),
    };

    parsed.unwrap_or_else(|| {
        tracing::debug!("Ratio input '{}' not usable, defaulting to {}", raw, DEFAULT_RATIO);
        DEFAULT_RATIO
    })
}

fn parse_pair(num: &str, den: &str) -> Option<f64> {
    let num = parse_finite(num)?;
    let den = parse_finite(den)?;
    if num < 0.0 || den <= 0.0 {
        return None;
    }
    if num == 0.0 {
        return Some(0.0);
    }
    Some(num / den).filter(|r| is_normal_positive(*r))
}

fn is_normal_positive(v: f64) -> bool {
    v.is_finite() && v >= f64::MIN_POSITIVE
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
