use crate::error::{FinanceError, Result};
use crate::types::{Department, InsuranceData, Treatment};
use polars::prelude::*;
use super::types::DepartmentColumn;
use std::collections::{HashMap, HashSet};

pub struct DataValidator;

impl DataValidator {
    /// Map every required department column to the header present in the frame
    pub fn resolve_department_columns(df: &DataFrame) -> Result<HashMap<DepartmentColumn, String>> {
        let mut column_map = HashMap::new();

        for required in DepartmentColumn::all() {
            match Self::find_column(df, &required) {
                Some(col_name) => {
                    column_map.insert(required, col_name.to_string());
                }
                None => {
                    return Err(FinanceError::DataLoading(format!(
                        "Missing required column: {} (tried aliases: {:?})",
                        required.as_str(),
                        required.aliases()
                    )));
                }
            }
        }

        Ok(column_map)
    }

    fn find_column(df: &DataFrame, required: &DepartmentColumn) -> Option<&'static str> {
        let columns = df.get_column_names();
        required
            .aliases()
            .into_iter()
            .find(|alias| columns.iter().any(|col| col.as_str() == *alias))
    }

    /// Department records must carry finite, non-negative money figures and unique names
    pub fn validate_departments(departments: &[Department], min_departments: usize) -> Result<()> {
        if departments.len() < min_departments {
            return Err(FinanceError::Validation(format!(
                "Insufficient data: {} departments, minimum {} required",
                departments.len(),
                min_departments
            )));
        }

        let mut seen = HashSet::new();
        for dept in departments {
            if dept.name.trim().is_empty() {
                return Err(FinanceError::Validation(
                    "Department name must not be empty".to_string(),
                ));
            }
            if !seen.insert(dept.name.as_str()) {
                return Err(FinanceError::Validation(format!(
                    "Duplicate department: {}",
                    dept.name
                )));
            }
            Self::non_negative(&dept.name, "budget", dept.budget)?;
            Self::non_negative(&dept.name, "revenueGenerated", dept.revenue_generated)?;
            if !dept.cost_overruns.is_finite() {
                return Err(FinanceError::Validation(format!(
                    "Department '{}': costOverruns must be finite",
                    dept.name
                )));
            }
        }

        Ok(())
    }

    pub fn validate_treatments(treatments: &[Treatment]) -> Result<()> {
        let mut seen = HashSet::new();
        for treatment in treatments {
            if !seen.insert(treatment.id) {
                return Err(FinanceError::Validation(format!(
                    "Duplicate treatment id: {}",
                    treatment.id
                )));
            }
            Self::non_negative(&treatment.name, "cost", treatment.cost)?;
            Self::non_negative(&treatment.name, "govCost", treatment.gov_cost)?;
            if let Some(weight) = treatment.weight {
                Self::non_negative(&treatment.name, "weight", weight)?;
            }
        }
        Ok(())
    }

    /// Coverage must be a percentage. Inconsistent claim counts are only reported.
    pub fn validate_insurance(insurance: &InsuranceData) -> Result<()> {
        for (treatment, percent) in &insurance.claim_coverage {
            if !percent.is_finite() || *percent < 0.0 || *percent > 100.0 {
                return Err(FinanceError::Validation(format!(
                    "Coverage for '{}' must be between 0 and 100, found {}",
                    treatment, percent
                )));
            }
        }

        let stats = &insurance.claim_stats;
        if !stats.is_consistent() {
            log::warn!(
                "Claim counts do not add up: approved {} + pending {} + rejected {} != total {}",
                stats.approved,
                stats.pending,
                stats.rejected,
                stats.total
            );
        }
        Ok(())
    }

    fn non_negative(owner: &str, field: &str, value: f64) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(FinanceError::Validation(format!(
                "'{}': {} must be a non-negative number, found {}",
                owner, field, value
            )));
        }
        Ok(())
    }
}
