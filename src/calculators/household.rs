//! HOUSEHOLD EARNINGS
//!
//! Annual earnings per source and each source's share of the household total.
//! Sources entered twice under the same label are merged.

use crate::utils::non_negative;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct EarningSource {
    pub label: String,
    #[serde(default)]
    pub annual_amount: f64,
}

impl EarningSource {
    pub fn new(label: &str, annual_amount: f64) -> Self {
        Self { label: label.to_string(), annual_amount }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EarningShare {
    pub label: String,
    pub amount: f64,
    /// Percentage of the household total (0-100)
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HouseholdSummary {
    pub total: f64,
    /// Sorted by share, largest first
    pub shares: Vec<EarningShare>,
}

/// `part` as a percentage of `total`; 0 when there is no total
pub fn percent_of(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

pub fn calculate_household_earnings(sources: &[EarningSource]) -> HouseholdSummary {
    let mut by_label: FxHashMap<&str, f64> = FxHashMap::default();
    for source in sources {
        let label = source.label.trim();
        *by_label.entry(label).or_insert(0.0) += non_negative(source.annual_amount);
    }

    let total: f64 = by_label.values().sum();

    let mut shares: Vec<EarningShare> = by_label
        .into_iter()
        .map(|(label, amount)| EarningShare {
            label: label.to_string(),
            amount,
            percent: percent_of(amount, total),
        })
        .collect();

    shares.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.label.cmp(&b.label))
    });

    HouseholdSummary { total, shares }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shares_and_merge() {
        let sources = vec![
            EarningSource::new("Seaweed sales", 6000.0),
            EarningSource::new("Fishing", 3000.0),
            EarningSource::new("Seaweed sales ", 1000.0),
            EarningSource::new("Remittance", -50.0),
        ];
        let summary = calculate_household_earnings(&sources);

        assert_relative_eq!(summary.total, 10000.0);
        assert_eq!(summary.shares[0].label, "Seaweed sales");
        assert_relative_eq!(summary.shares[0].percent, 70.0);
        assert_relative_eq!(summary.shares[1].percent, 30.0);
        assert_eq!(summary.shares[2].label, "Remittance");
        assert_eq!(summary.shares[2].amount, 0.0);

        let sum: f64 = summary.shares.iter().map(|s| s.percent).sum();
        assert_relative_eq!(sum, 100.0);
    }

    #[test]
    fn test_zero_total() {
        let summary = calculate_household_earnings(&[EarningSource::new("Fishing", 0.0)]);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.shares[0].percent, 0.0);
        assert!(calculate_household_earnings(&[]).shares.is_empty());
    }
}
