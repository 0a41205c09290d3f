use crate::engines::metrics::budget_utilization;
use crate::types::{ClaimStats, Department, RankedDepartment, Treatment};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyPoint {
    pub name: String,
    pub efficiency: f64,
    pub profitability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerPatientPoint {
    pub name: String,
    pub cost_per_patient: f64,
    pub revenue_per_patient: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationPoint {
    pub name: String,
    pub utilization: f64,
    pub budget_millions: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    Approved,
    Pending,
    Rejected,
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Approved => "Approved",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSlice {
    pub status: ClaimStatus,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentComparison {
    pub id: u32,
    pub name: String,
    pub private_cost: f64,
    pub government_cost: f64,
    pub savings: f64,
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Efficiency and profitability per department, one decimal place
pub fn efficiency_chart(rankings: &[RankedDepartment]) -> Vec<EfficiencyPoint> {
    rankings
        .iter()
        .map(|dept| EfficiencyPoint {
            name: dept.department.name.clone(),
            efficiency: round_to_tenth(dept.efficiency),
            profitability: round_to_tenth(dept.profitability),
        })
        .collect()
}

/// Cost and revenue per patient in whole currency units
pub fn per_patient_chart(rankings: &[RankedDepartment]) -> Vec<PerPatientPoint> {
    rankings
        .iter()
        .map(|dept| PerPatientPoint {
            name: dept.department.name.clone(),
            cost_per_patient: dept.cost_per_patient.round(),
            revenue_per_patient: dept.revenue_per_patient.round(),
        })
        .collect()
}

pub fn utilization_chart(departments: &[Department]) -> Vec<UtilizationPoint> {
    departments
        .iter()
        .map(|dept| UtilizationPoint {
            name: dept.name.clone(),
            utilization: budget_utilization(dept.budget, dept.cost_overruns),
            budget_millions: dept.budget / 1_000_000.0,
        })
        .collect()
}

pub fn top_performer(rankings: &[RankedDepartment]) -> Option<&RankedDepartment> {
    rankings.first()
}

pub fn bottom_performer(rankings: &[RankedDepartment]) -> Option<&RankedDepartment> {
    rankings.last()
}

/// Departments whose overrun exceeds the threshold, in input order
pub fn overrun_alerts(departments: &[Department], threshold_percent: f64) -> Vec<&Department> {
    departments
        .iter()
        .filter(|dept| dept.cost_overruns > threshold_percent)
        .collect()
}

pub fn claim_distribution(stats: &ClaimStats) -> Vec<ClaimSlice> {
    vec![
        ClaimSlice { status: ClaimStatus::Approved, count: stats.approved },
        ClaimSlice { status: ClaimStatus::Pending, count: stats.pending },
        ClaimSlice { status: ClaimStatus::Rejected, count: stats.rejected },
    ]
}

pub fn treatment_comparison(treatments: &[Treatment]) -> Vec<TreatmentComparison> {
    treatments
        .iter()
        .map(|t| TreatmentComparison {
            id: t.id,
            name: t.name.clone(),
            private_cost: t.cost,
            government_cost: t.gov_cost,
            savings: t.cost - t.gov_cost,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::metrics::department_rankings;

    fn departments() -> Vec<Department> {
        vec![
            Department {
                name: "Orthopedics".into(),
                budget: 3_000_000.0,
                cost_overruns: 15.0,
                patient_load: 900,
                revenue_generated: 3_100_000.0,
            },
            Department {
                name: "Oncology".into(),
                budget: 8_000_000.0,
                cost_overruns: 4.0,
                patient_load: 1_200,
                revenue_generated: 9_900_000.0,
            },
        ]
    }

    #[test]
    fn test_efficiency_chart_rounds() {
        let rankings = department_rankings(&departments());
        let chart = efficiency_chart(&rankings);
        assert_eq!(chart[0].name, "Oncology");
        assert_eq!(chart[0].efficiency, 23.8);
        assert_eq!(chart[1].efficiency, 3.3);
        assert_eq!(chart[1].profitability, 3.2);
    }

    #[test]
    fn test_per_patient_chart_rounds() {
        let rankings = department_rankings(&departments());
        let chart = per_patient_chart(&rankings);
        assert_eq!(chart[0].cost_per_patient, 6_667.0);
        assert_eq!(chart[0].revenue_per_patient, 8_250.0);
        assert_eq!(chart[1].cost_per_patient, 3_333.0);
    }

    #[test]
    fn test_top_and_bottom_performer() {
        let rankings = department_rankings(&departments());
        assert_eq!(top_performer(&rankings).unwrap().department.name, "Oncology");
        assert_eq!(bottom_performer(&rankings).unwrap().department.name, "Orthopedics");
        assert!(top_performer(&[]).is_none());
    }

    #[test]
    fn test_utilization_chart() {
        let chart = utilization_chart(&departments());
        assert!((chart[0].utilization - 115.0).abs() < 1e-9);
        assert_eq!(chart[0].budget_millions, 3.0);
    }

    #[test]
    fn test_overrun_alerts() {
        let depts = departments();
        let alerts = overrun_alerts(&depts, 10.0);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].name, "Orthopedics");
    }

    #[test]
    fn test_claim_distribution() {
        let stats = ClaimStats {
            total: 10,
            approved: 7,
            pending: 2,
            rejected: 1,
            average_amount: 1.0,
            fraud_score: 0.0,
        };
        let slices = claim_distribution(&stats);
        assert_eq!(slices[0], ClaimSlice { status: ClaimStatus::Approved, count: 7 });
        assert_eq!(slices[2].status.to_string(), "Rejected");
    }

    #[test]
    fn test_treatment_comparison() {
        let rows = treatment_comparison(&[Treatment {
            id: 3,
            name: "Angioplasty".into(),
            cost: 250_000.0,
            gov_cost: 90_000.0,
            weight: None,
        }]);
        assert_eq!(rows[0].savings, 160_000.0);
        assert_eq!(rows[0].government_cost, 90_000.0);
    }
}
