use crate::config::AppConfig;
use crate::data::HospitalDataset;
use crate::engines::analytics::{overrun_alerts, utilization_chart, UtilizationPoint};
use crate::engines::metrics::{
    coverage_for, department_rankings, fraud_alert, hospital_metrics, share_percentages,
    treatment_savings, weighted_average_cost, year_over_year_growth, ClaimBreakdown,
    GovernmentCost, GrowthPoint, SharePoint,
};
use crate::error::{FinanceError, Result};
use crate::types::{
    ClaimStats, CoverageImpact, HospitalMetrics, HospitalSummary, RankedDepartment,
    TreatmentSavings,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which sections a rendered report shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    Full,
    Financial,
    PatientFlow,
    Insurance,
}

impl ReportKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Full => "Hospital Financial Report",
            Self::Financial => "Annual Financial Report",
            Self::PatientFlow => "Patient Flow Analysis",
            Self::Insurance => "Insurance Summary",
        }
    }

    pub fn includes_financials(&self) -> bool {
        matches!(self, Self::Full | Self::Financial)
    }

    pub fn includes_patient_flow(&self) -> bool {
        matches!(self, Self::Full | Self::PatientFlow)
    }

    pub fn includes_insurance(&self) -> bool {
        matches!(self, Self::Full | Self::Insurance)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Full => "full",
            Self::Financial => "financial",
            Self::PatientFlow => "patient-flow",
            Self::Insurance => "insurance",
        };
        f.write_str(name)
    }
}

impl FromStr for ReportKind {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "financial" => Ok(Self::Financial),
            "patient-flow" | "patient_flow" => Ok(Self::PatientFlow),
            "insurance" => Ok(Self::Insurance),
            other => Err(FinanceError::Report(format!("Unknown report kind: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReport {
    pub stats: ClaimStats,
    pub breakdown: ClaimBreakdown,
    pub fraud_alert: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentReport {
    pub name: String,
    pub private_cost: f64,
    pub government_cost: f64,
    pub savings: TreatmentSavings,
    /// Present when the dataset carries a coverage table
    pub coverage: Option<CoverageImpact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrunAlert {
    pub name: String,
    pub cost_overruns: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    pub kind: ReportKind,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub hospital: HospitalMetrics,
    pub summary: Option<HospitalSummary>,
    pub rankings: Vec<RankedDepartment>,
    pub utilization: Vec<UtilizationPoint>,
    pub overrun_alerts: Vec<OverrunAlert>,
    pub claims: Option<ClaimReport>,
    pub treatments: Vec<TreatmentReport>,
    pub weighted_avg_private_cost: f64,
    pub weighted_avg_gov_cost: f64,
    pub spending_growth: Vec<GrowthPoint>,
    pub cost_breakdown: Vec<SharePoint>,
    pub settlement_ratios: Vec<SharePoint>,
}

pub struct ReportBuilder<'a> {
    dataset: &'a HospitalDataset,
    config: &'a AppConfig,
    generated_at: Option<DateTime<Utc>>,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(dataset: &'a HospitalDataset, config: &'a AppConfig) -> Self {
        Self {
            dataset,
            config,
            generated_at: None,
        }
    }

    /// Pin the timestamp instead of using the current time
    pub fn generated_at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.generated_at = Some(timestamp);
        self
    }

    pub fn build(self, kind: ReportKind) -> FinancialReport {
        let dataset = self.dataset;
        let alerts = &self.config.alerts;

        let claims = dataset.insurance.as_ref().map(|insurance| ClaimReport {
            stats: insurance.claim_stats.clone(),
            breakdown: ClaimBreakdown::from_stats(&insurance.claim_stats),
            fraud_alert: fraud_alert(
                insurance.claim_stats.fraud_score,
                alerts.fraud_score_threshold,
            ),
        });

        let treatments = dataset
            .treatments
            .iter()
            .map(|t| TreatmentReport {
                name: t.name.clone(),
                private_cost: t.cost,
                government_cost: t.gov_cost,
                savings: treatment_savings(t.cost, t.gov_cost),
                coverage: dataset
                    .insurance
                    .as_ref()
                    .map(|insurance| coverage_for(insurance, t)),
            })
            .collect();

        let gov_costs: Vec<GovernmentCost> = dataset.treatments.iter().map(GovernmentCost).collect();

        let (spending_growth, cost_breakdown, settlement_ratios) = match &dataset.trends {
            Some(trends) => (
                year_over_year_growth(&trends.yearly_spending),
                share_percentages(&trends.cost_breakdown),
                share_percentages(&trends.settlement_ratios),
            ),
            None => (Vec::new(), Vec::new(), Vec::new()),
        };

        let overruns = overrun_alerts(&dataset.departments, alerts.overrun_warning_percent)
            .into_iter()
            .map(|dept| OverrunAlert {
                name: dept.name.clone(),
                cost_overruns: dept.cost_overruns,
            })
            .collect::<Vec<_>>();
        if !overruns.is_empty() {
            log::warn!(
                "{} department(s) above the {}% overrun threshold",
                overruns.len(),
                alerts.overrun_warning_percent
            );
        }

        let report = FinancialReport {
            kind,
            title: kind.title().to_string(),
            generated_at: self.generated_at.unwrap_or_else(Utc::now),
            hospital: hospital_metrics(&dataset.departments),
            summary: dataset.summary.clone(),
            rankings: department_rankings(&dataset.departments),
            utilization: utilization_chart(&dataset.departments),
            overrun_alerts: overruns,
            claims,
            treatments,
            weighted_avg_private_cost: weighted_average_cost(&dataset.treatments),
            weighted_avg_gov_cost: weighted_average_cost(&gov_costs),
            spending_growth,
            cost_breakdown,
            settlement_ratios,
        };

        log::info!(
            "Built {} report covering {} departments",
            kind,
            report.rankings.len()
        );
        report
    }
}
