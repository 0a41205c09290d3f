// src/engines/metrics/hospital.rs
use super::department::{cost_per_patient, efficiency, profitability, revenue_per_patient};
use super::guarded_ratio;
use crate::types::{Department, HospitalMetrics, RankedDepartment};
use std::cmp::Ordering;

#[derive(Default)]
struct Totals {
    budget: f64,
    revenue: f64,
    patients: u64,
    efficiency: f64,
    profitability: f64,
}

/// Hospital-wide averages. Per-patient figures divide pooled totals,
/// efficiency and profitability are plain means over departments.
pub fn hospital_metrics(departments: &[Department]) -> HospitalMetrics {
    if departments.is_empty() {
        return HospitalMetrics::default();
    }

    let totals = departments.iter().fold(Totals::default(), |mut acc, dept| {
        acc.budget += dept.budget;
        acc.revenue += dept.revenue_generated;
        acc.patients += dept.patient_load;
        acc.efficiency += efficiency(dept.revenue_generated, dept.budget);
        acc.profitability += profitability(dept.revenue_generated, dept.budget);
        acc
    });

    let count = departments.len() as f64;
    HospitalMetrics {
        avg_cost_per_patient: guarded_ratio(totals.budget, totals.patients as f64),
        avg_revenue_per_patient: guarded_ratio(totals.revenue, totals.patients as f64),
        avg_efficiency: totals.efficiency / count,
        avg_profitability: totals.profitability / count,
    }
}

/// Ranks departments by efficiency, best first. The sort is stable, so
/// equal efficiencies keep their input order.
pub fn department_rankings(departments: &[Department]) -> Vec<RankedDepartment> {
    let mut ranked: Vec<RankedDepartment> = departments
        .iter()
        .map(|dept| RankedDepartment {
            department: dept.clone(),
            efficiency: efficiency(dept.revenue_generated, dept.budget),
            profitability: profitability(dept.revenue_generated, dept.budget),
            cost_per_patient: cost_per_patient(dept.budget, dept.patient_load),
            revenue_per_patient: revenue_per_patient(dept.revenue_generated, dept.patient_load),
            rank: 0,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.efficiency
            .partial_cmp(&a.efficiency)
            .unwrap_or(Ordering::Equal)
    });

    for (index, dept) in ranked.iter_mut().enumerate() {
        dept.rank = index + 1;
    }

    ranked
}
