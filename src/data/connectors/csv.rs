use crate::error::{FinanceError, Result};
use crate::types::Department;
use polars::prelude::*;
use std::path::Path;
use super::{types::DepartmentColumn, validator::DataValidator};
use std::collections::HashMap;

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| FinanceError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load a department table, resolving header aliases
    pub fn load_departments<P: AsRef<Path>>(path: P) -> Result<Vec<Department>> {
        let df = Self::load(&path)?;
        let column_map = DataValidator::resolve_department_columns(&df)?;
        let departments = Self::departments_from_frame(&df, &column_map)?;

        log::info!(
            "Loaded {} departments from {}",
            departments.len(),
            path.as_ref().display()
        );
        Ok(departments)
    }

    pub fn departments_from_frame(
        df: &DataFrame,
        column_map: &HashMap<DepartmentColumn, String>,
    ) -> Result<Vec<Department>> {
        let names = Self::text_column(df, Self::mapped(column_map, DepartmentColumn::Name)?)?;
        let budgets = Self::numeric_column(df, Self::mapped(column_map, DepartmentColumn::Budget)?)?;
        let overruns =
            Self::numeric_column(df, Self::mapped(column_map, DepartmentColumn::CostOverruns)?)?;
        let loads = Self::numeric_column(df, Self::mapped(column_map, DepartmentColumn::PatientLoad)?)?;
        let revenues = Self::numeric_column(df, Self::mapped(column_map, DepartmentColumn::Revenue)?)?;

        let mut departments = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let load = loads[i];
            if load < 0.0 || load.fract() != 0.0 {
                return Err(FinanceError::DataLoading(format!(
                    "Invalid data at row {}: patient load must be a whole non-negative number, found {}",
                    i, load
                )));
            }

            departments.push(Department {
                name: names[i].clone(),
                budget: budgets[i],
                cost_overruns: overruns[i],
                patient_load: load as u64,
                revenue_generated: revenues[i],
            });
        }

        Ok(departments)
    }

    // Helper functions
    fn mapped(
        column_map: &HashMap<DepartmentColumn, String>,
        column: DepartmentColumn,
    ) -> Result<&str> {
        column_map.get(&column).map(String::as_str).ok_or_else(|| {
            FinanceError::DataLoading(format!("Column {} is not mapped", column.as_str()))
        })
    }

    fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
        let series = df.column(name)?.cast(&DataType::Float64)?;
        let values = series.f64()?;

        (0..df.height())
            .map(|i| {
                values.get(i).ok_or_else(|| {
                    FinanceError::DataLoading(format!("Missing value at row {} in column '{}'", i, name))
                })
            })
            .collect()
    }

    fn text_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
        let series = df.column(name)?.cast(&DataType::String)?;
        let values = series.str()?;

        (0..df.height())
            .map(|i| {
                values.get(i).map(str::to_string).ok_or_else(|| {
                    FinanceError::DataLoading(format!("Missing value at row {} in column '{}'", i, name))
                })
            })
            .collect()
    }
}
