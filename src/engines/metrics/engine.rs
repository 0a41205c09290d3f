// src/engines/metrics/engine.rs
use crate::data::HospitalDataset;
use crate::engines::metrics::{
    hospital_metrics, weighted_average_cost, ClaimBreakdown, GovernmentCost,
};
use std::collections::HashMap;

/// Flattens the hospital-wide figures of a dataset into a name -> value map.
pub struct MetricsEngine {
    overrun_warning_percent: f64,
}

impl MetricsEngine {
    pub fn new(overrun_warning_percent: f64) -> Self {
        Self { overrun_warning_percent }
    }

    pub fn calculate_all(&self, dataset: &HospitalDataset) -> HashMap<String, f64> {
        let mut all_metrics = HashMap::new();
        let departments = &dataset.departments;

        // Hospital-wide averages
        let hospital = hospital_metrics(departments);
        all_metrics.insert("avg_cost_per_patient".to_string(), hospital.avg_cost_per_patient);
        all_metrics.insert("avg_revenue_per_patient".to_string(), hospital.avg_revenue_per_patient);
        all_metrics.insert("avg_efficiency".to_string(), hospital.avg_efficiency);
        all_metrics.insert("avg_profitability".to_string(), hospital.avg_profitability);

        // Totals
        all_metrics.insert("num_departments".to_string(), departments.len() as f64);
        all_metrics.insert(
            "total_budget".to_string(),
            departments.iter().map(|d| d.budget).sum(),
        );
        all_metrics.insert(
            "total_revenue".to_string(),
            departments.iter().map(|d| d.revenue_generated).sum(),
        );
        all_metrics.insert(
            "total_patients".to_string(),
            departments.iter().map(|d| d.patient_load).sum::<u64>() as f64,
        );
        let over_budget = departments
            .iter()
            .filter(|d| d.cost_overruns > self.overrun_warning_percent)
            .count();
        all_metrics.insert("departments_over_threshold".to_string(), over_budget as f64);

        // Treatment pricing
        if !dataset.treatments.is_empty() {
            let gov: Vec<GovernmentCost> = dataset.treatments.iter().map(GovernmentCost).collect();
            all_metrics.insert(
                "weighted_avg_private_cost".to_string(),
                weighted_average_cost(&dataset.treatments),
            );
            all_metrics.insert("weighted_avg_gov_cost".to_string(), weighted_average_cost(&gov));
        }

        // Claims
        if let Some(insurance) = &dataset.insurance {
            let breakdown = ClaimBreakdown::from_stats(&insurance.claim_stats);
            all_metrics.insert("claim_approval_rate".to_string(), breakdown.approval_rate);
            all_metrics.insert("claim_pending_rate".to_string(), breakdown.pending_rate);
            all_metrics.insert("claim_rejection_rate".to_string(), breakdown.rejection_rate);
            all_metrics.insert(
                "claim_average_amount".to_string(),
                insurance.claim_stats.average_amount,
            );
        }

        log::debug!("Calculated {} hospital metrics", all_metrics.len());
        all_metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClaimStats, Department, InsuranceData, Treatment};

    fn dataset() -> HospitalDataset {
        HospitalDataset {
            departments: vec![
                Department {
                    name: "Cardiology".into(),
                    budget: 5_000_000.0,
                    cost_overruns: 12.0,
                    patient_load: 2_000,
                    revenue_generated: 6_000_000.0,
                },
                Department {
                    name: "Pediatrics".into(),
                    budget: 3_000_000.0,
                    cost_overruns: -4.0,
                    patient_load: 1_000,
                    revenue_generated: 3_000_000.0,
                },
            ],
            treatments: vec![Treatment {
                id: 1,
                name: "MRI".into(),
                cost: 9_000.0,
                gov_cost: 3_000.0,
                weight: None,
            }],
            insurance: Some(InsuranceData {
                claim_stats: ClaimStats {
                    total: 100,
                    approved: 80,
                    pending: 15,
                    rejected: 5,
                    average_amount: 52_000.0,
                    fraud_score: 2.0,
                },
                claim_coverage: Default::default(),
            }),
            summary: None,
            trends: None,
        }
    }

    #[test]
    fn test_calculate_all() {
        let metrics = MetricsEngine::new(10.0).calculate_all(&dataset());

        assert_eq!(metrics["num_departments"], 2.0);
        assert_eq!(metrics["total_patients"], 3_000.0);
        assert_eq!(metrics["total_budget"], 8_000_000.0);
        assert_eq!(metrics["departments_over_threshold"], 1.0);
        assert_eq!(metrics["weighted_avg_private_cost"], 9_000.0);
        assert_eq!(metrics["weighted_avg_gov_cost"], 3_000.0);
        assert_eq!(metrics["claim_approval_rate"], 80.0);
        assert!((metrics["avg_efficiency"] - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_all_without_optional_data() {
        let mut data = dataset();
        data.treatments.clear();
        data.insurance = None;

        let metrics = MetricsEngine::new(10.0).calculate_all(&data);
        assert!(!metrics.contains_key("weighted_avg_private_cost"));
        assert!(!metrics.contains_key("claim_approval_rate"));
        assert!(metrics.contains_key("avg_cost_per_patient"));
    }
}
