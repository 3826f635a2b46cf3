//! Frequency Normalizer
//!
//! Converts a [`FrequencySpec`] into an annualized occurrence count and a
//! short human-readable description.
//!
//! Interval kinds (`EveryXMonths`, `EveryXWeeks`) count only whole intervals
//! that fit inside the active window: `floor(window / every_x)`, and 0 when
//! the window is shorter than one interval.

use super::spec::{FrequencyKind, FrequencySpec};
use crate::config::CalcConfig;

/// Occurrences per year implied by `spec`
///
/// Always >= 0. `Once` is exactly 1 whatever the active window.
pub fn annual_occurrences(spec: &FrequencySpec, config: &CalcConfig) -> f64 {
    let months = f64::from(spec.active_months());
    let value = f64::from(spec.value());
    let every_x = f64::from(spec.every_x());
    let weeks_per_month = config.weeks_per_month;

    match spec.kind() {
        FrequencyKind::Once => 1.0,
        FrequencyKind::PerYear => value,
        FrequencyKind::PerMonth => value * months,
        FrequencyKind::PerWeek => value * months * weeks_per_month,
        FrequencyKind::EveryXMonths => whole_intervals(months, every_x),
        FrequencyKind::EveryXWeeks => whole_intervals(months * weeks_per_month, every_x),
    }
}

/// Absorbs float error in `months * weeks_per_month` (e.g. 12 * 52/12)
const INTERVAL_EPSILON: f64 = 1e-9;

/// Whole intervals of length `every_x` inside `window`
fn whole_intervals(window: f64, every_x: f64) -> f64 {
    // every_x >= 1 is guaranteed by FrequencySpec clamping
    if window + INTERVAL_EPSILON >= every_x {
        (window / every_x + INTERVAL_EPSILON).floor()
    } else {
        0.0
    }
}

/// Human-readable phrase for `spec`
///
/// Presentational only; never feed it back into a calculation.
pub fn describe(spec: &FrequencySpec) -> String {
    let months = spec.active_months();
    match spec.kind() {
        FrequencyKind::Once => "once".to_string(),
        FrequencyKind::PerYear => format!("{} time(s)/year", spec.value()),
        FrequencyKind::PerMonth => {
            format!("{} time(s)/month for {} mos", spec.value(), months)
        }
        FrequencyKind::PerWeek => {
            format!("{} time(s)/week for {} mos", spec.value(), months)
        }
        FrequencyKind::EveryXMonths => {
            format!("every {} {} for {} mos", spec.every_x(), plural(spec.every_x(), "month"), months)
        }
        FrequencyKind::EveryXWeeks => {
            format!("every {} {} for {} mos", spec.every_x(), plural(spec.every_x(), "week"), months)
        }
    }
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}
