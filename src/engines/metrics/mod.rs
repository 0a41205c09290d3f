pub mod claims;
pub mod department;
pub mod engine;
pub mod hospital;
pub mod treatment;
pub mod trends;

pub use claims::{approval_rate, fraud_alert, pending_rate, rejection_rate, ClaimBreakdown};
pub use department::{
    budget_utilization, cost_efficiency, cost_per_patient, efficiency, profitability,
    revenue_per_patient,
};
pub use engine::MetricsEngine;
pub use hospital::{department_rankings, hospital_metrics};
pub use treatment::{
    coverage_for, coverage_impact, treatment_savings, weighted_average_cost, GovernmentCost,
    Weighted,
};
pub use trends::{share_percentages, year_over_year_growth, GrowthPoint, SharePoint};

/// Divides, returning 0.0 whenever the denominator is zero.
pub(crate) fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

/// `part / whole * 100` with the same zero guard.
pub(crate) fn guarded_percent(part: f64, whole: f64) -> f64 {
    guarded_ratio(part, whole) * 100.0
}
