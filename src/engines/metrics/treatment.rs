// src/engines/metrics/treatment.rs
use super::{guarded_percent, guarded_ratio};
use crate::types::{CoverageImpact, InsuranceData, Treatment, TreatmentSavings, WeightedCost};

/// An item that contributes a cost and an optional frequency weight
/// to a weighted average. A missing weight counts as 1.
pub trait Weighted {
    fn cost(&self) -> f64;
    fn weight(&self) -> Option<f64>;

    fn effective_weight(&self) -> f64 {
        self.weight().unwrap_or(1.0)
    }
}

impl Weighted for WeightedCost {
    fn cost(&self) -> f64 {
        self.cost
    }

    fn weight(&self) -> Option<f64> {
        self.weight
    }
}

/// Treatments average over their private price.
impl Weighted for Treatment {
    fn cost(&self) -> f64 {
        self.cost
    }

    fn weight(&self) -> Option<f64> {
        self.weight
    }
}

/// Views a treatment through its government price.
pub struct GovernmentCost<'a>(pub &'a Treatment);

impl Weighted for GovernmentCost<'_> {
    fn cost(&self) -> f64 {
        self.0.gov_cost
    }

    fn weight(&self) -> Option<f64> {
        self.0.weight
    }
}

/// `Σ(cost × weight) / Σ(weight)`; 0 for an empty slice or zero total weight.
pub fn weighted_average_cost<T: Weighted>(items: &[T]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }

    let (weighted_total, total_weight) = items.iter().fold((0.0, 0.0), |(sum, weights), item| {
        let weight = item.effective_weight();
        (sum + item.cost() * weight, weights + weight)
    });

    guarded_ratio(weighted_total, total_weight)
}

/// Private vs government price comparison. A zero private cost yields 0
/// for both the percentage and the ratio.
pub fn treatment_savings(private_cost: f64, gov_cost: f64) -> TreatmentSavings {
    let absolute_savings = private_cost - gov_cost;

    TreatmentSavings {
        absolute_savings,
        percentage_savings: guarded_percent(absolute_savings, private_cost),
        cost_ratio: guarded_ratio(gov_cost, private_cost),
    }
}

pub fn coverage_impact(treatment_cost: f64, coverage_percent: f64) -> CoverageImpact {
    let covered_amount = treatment_cost * coverage_percent / 100.0;
    let out_of_pocket = treatment_cost - covered_amount;

    CoverageImpact {
        covered_amount,
        out_of_pocket,
        effective_cost: out_of_pocket,
        coverage_percent,
        savings: covered_amount,
    }
}

/// Coverage of a treatment's private price under the insurer's table.
/// Treatments missing from the table are treated as 0% covered.
pub fn coverage_for(insurance: &InsuranceData, treatment: &Treatment) -> CoverageImpact {
    let percent = insurance
        .claim_coverage
        .get(&treatment.name)
        .copied()
        .unwrap_or(0.0);
    coverage_impact(treatment.cost, percent)
}
