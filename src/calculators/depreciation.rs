//! INVESTMENT DEPRECIATION
//!
//! Straight-line yearly depreciation of farm equipment and materials
//! (ropes, stakes, boats, drying racks).

use crate::utils::non_negative;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct InvestmentItem {
    pub name: String,
    #[serde(default)]
    pub unit_cost: f64,
    #[serde(default = "default_one")]
    pub quantity: f64,
    /// Expected useful life; anything below one year counts as one
    #[serde(default = "default_one")]
    pub lifespan_years: f64,
    #[serde(default)]
    pub salvage_value: f64,
}

fn default_one() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize)]
pub struct DepreciationResult {
    pub name: String,
    pub total_cost: f64,
    pub annual_depreciation: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepreciationSummary {
    pub items: Vec<DepreciationResult>,
    pub total_annual: f64,
}

pub fn calculate_item_depreciation(item: &InvestmentItem) -> DepreciationResult {
    let total_cost = non_negative(item.unit_cost) * non_negative(item.quantity);
    let lifespan = non_negative(item.lifespan_years).max(1.0);
    let depreciable = (total_cost - non_negative(item.salvage_value)).max(0.0);

    DepreciationResult {
        name: item.name.clone(),
        total_cost,
        annual_depreciation: depreciable / lifespan,
    }
}

pub fn calculate_depreciation(items: &[InvestmentItem]) -> DepreciationSummary {
    let items: Vec<DepreciationResult> = items.iter().map(calculate_item_depreciation).collect();
    let total_annual: f64 = items.iter().map(|r| r.annual_depreciation).sum();
    DepreciationSummary { items, total_annual }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn item(unit_cost: f64, quantity: f64, lifespan_years: f64, salvage_value: f64) -> InvestmentItem {
        InvestmentItem {
            name: "Rope".to_string(),
            unit_cost,
            quantity,
            lifespan_years,
            salvage_value,
        }
    }

    #[test]
    fn test_straight_line() {
        let result = calculate_item_depreciation(&item(50.0, 20.0, 4.0, 200.0));
        assert_relative_eq!(result.total_cost, 1000.0);
        assert_relative_eq!(result.annual_depreciation, 200.0);
    }

    #[test]
    fn test_short_lifespan_and_salvage_over_cost() {
        assert_relative_eq!(calculate_item_depreciation(&item(300.0, 1.0, 0.5, 0.0)).annual_depreciation, 300.0);
        assert_eq!(calculate_item_depreciation(&item(100.0, 1.0, 2.0, 500.0)).annual_depreciation, 0.0);
    }

    #[test]
    fn test_summary_total() {
        let summary = calculate_depreciation(&[item(100.0, 2.0, 2.0, 0.0), item(60.0, 1.0, 3.0, 0.0)]);
        assert_eq!(summary.items.len(), 2);
        assert_relative_eq!(summary.total_annual, 120.0);
    }
}
