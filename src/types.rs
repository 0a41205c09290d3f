use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Department record as published in `departments.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub name: String,
    pub budget: f64,
    /// Percentage over budget; negative means under budget
    pub cost_overruns: f64,
    pub patient_load: u64,
    pub revenue_generated: f64,
}

/// Treatment price record from `costs.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    pub id: u32,
    pub name: String,
    pub cost: f64,
    pub gov_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Wrapper matching the `{"treatments": [...]}` layout of `costs.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreatmentCatalog {
    pub treatments: Vec<Treatment>,
}

/// Standalone cost/weight pair for weighted averages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedCost {
    pub cost: f64,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl WeightedCost {
    pub fn new(cost: f64) -> Self {
        Self { cost, weight: None }
    }

    pub fn with_weight(cost: f64, weight: f64) -> Self {
        Self { cost, weight: Some(weight) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimStats {
    pub total: u64,
    pub approved: u64,
    pub pending: u64,
    pub rejected: u64,
    pub average_amount: f64,
    /// Risk score on a 0-10 scale
    pub fraud_score: f64,
}

impl ClaimStats {
    /// Whether the status counts add up to the total
    pub fn is_consistent(&self) -> bool {
        self.approved + self.pending + self.rejected == self.total
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceData {
    pub claim_stats: ClaimStats,
    /// Treatment name -> coverage percent
    #[serde(default)]
    pub claim_coverage: BTreeMap<String, f64>,
}

/// Headline figures from `metrics.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalSummary {
    pub total_spending: f64,
    pub total_revenue: f64,
    pub profit_margin: f64,
    pub insurance_claims_processed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyAmount {
    pub year: i32,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentAmount {
    pub department: String,
    pub amount: f64,
}

/// Pie-chart slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendSeries {
    pub yearly_spending: Vec<YearlyAmount>,
    pub department_budget: Vec<DepartmentAmount>,
    pub settlement_ratios: Vec<NamedValue>,
    pub cost_breakdown: Vec<NamedValue>,
}

/// Department extended with derived metrics and its 1-based rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedDepartment {
    #[serde(flatten)]
    pub department: Department,
    pub efficiency: f64,
    pub profitability: f64,
    pub cost_per_patient: f64,
    pub revenue_per_patient: f64,
    pub rank: usize,
}

/// Hospital-wide averages
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalMetrics {
    pub avg_cost_per_patient: f64,
    pub avg_revenue_per_patient: f64,
    pub avg_efficiency: f64,
    pub avg_profitability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentSavings {
    pub absolute_savings: f64,
    pub percentage_savings: f64,
    pub cost_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageImpact {
    pub covered_amount: f64,
    pub out_of_pocket: f64,
    pub effective_cost: f64,
    pub coverage_percent: f64,
    pub savings: f64,
}
