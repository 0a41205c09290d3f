// src/engines/metrics/department.rs
//! Per-department ratios. Every divisor is zero-guarded: a zero divisor
//! yields 0.0 instead of an infinite or NaN result.

use super::{guarded_percent, guarded_ratio};

/// ROI-style score: `(revenue - budget) / budget * 100`.
pub fn efficiency(revenue: f64, budget: f64) -> f64 {
    guarded_percent(revenue - budget, budget)
}

pub fn cost_per_patient(budget: f64, patient_load: u64) -> f64 {
    guarded_ratio(budget, patient_load as f64)
}

pub fn revenue_per_patient(revenue: f64, patient_load: u64) -> f64 {
    guarded_ratio(revenue, patient_load as f64)
}

/// Margin-style score: `(revenue - budget) / revenue * 100`.
pub fn profitability(revenue: f64, budget: f64) -> f64 {
    guarded_percent(revenue - budget, revenue)
}

fn actual_spending(budget: f64, cost_overrun_percent: f64) -> f64 {
    budget * (1.0 + cost_overrun_percent / 100.0)
}

/// Actual spending as a percentage of budget. 100 means exactly on budget.
pub fn budget_utilization(budget: f64, cost_overrun_percent: f64) -> f64 {
    guarded_percent(actual_spending(budget, cost_overrun_percent), budget)
}

/// Budget left after subtracting the overspend, as a percentage of budget.
/// A 10% overrun gives 90, a 5% underrun gives 105.
pub fn cost_efficiency(budget: f64, cost_overrun_percent: f64) -> f64 {
    let overspend = actual_spending(budget, cost_overrun_percent) - budget;
    guarded_percent(budget - overspend, budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_efficiency() {
        assert_close(efficiency(150.0, 100.0), 50.0);
        assert_close(efficiency(90.0, 100.0), -10.0);
        assert_eq!(efficiency(1_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_per_patient_zero_load() {
        assert_eq!(cost_per_patient(5_000.0, 0), 0.0);
        assert_eq!(revenue_per_patient(5_000.0, 0), 0.0);
        assert_close(cost_per_patient(5_000.0, 4), 1_250.0);
    }

    #[test]
    fn test_profitability_zero_revenue() {
        assert_eq!(profitability(0.0, 500.0), 0.0);
        assert_close(profitability(200.0, 150.0), 25.0);
    }

    #[test]
    fn test_budget_utilization() {
        assert_close(budget_utilization(1_000_000.0, 10.0), 110.0);
        assert_close(budget_utilization(1_000_000.0, -5.0), 95.0);
        assert_close(budget_utilization(250.0, 0.0), 100.0);
        assert_eq!(budget_utilization(0.0, 12.0), 0.0);
    }

    #[test]
    fn test_cost_efficiency() {
        assert_close(cost_efficiency(1_000.0, 10.0), 90.0);
        assert_close(cost_efficiency(1_000.0, -5.0), 105.0);
        assert_eq!(cost_efficiency(0.0, 10.0), 0.0);
    }
}
