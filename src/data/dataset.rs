use crate::config::DataConfig;
use crate::error::Result;
use crate::types::{
    Department, HospitalSummary, InsuranceData, Treatment, TreatmentCatalog, TrendSeries,
};
use serde::de::DeserializeOwned;
use std::path::Path;

use super::connectors::{CsvConnector, DataValidator, JsonConnector};

/// Everything the dashboards read, loaded once and treated as immutable
#[derive(Debug, Clone, Default)]
pub struct HospitalDataset {
    pub departments: Vec<Department>,
    pub treatments: Vec<Treatment>,
    pub insurance: Option<InsuranceData>,
    pub summary: Option<HospitalSummary>,
    pub trends: Option<TrendSeries>,
}

impl HospitalDataset {
    pub fn validate(&self, min_departments: usize) -> Result<()> {
        DataValidator::validate_departments(&self.departments, min_departments)?;
        DataValidator::validate_treatments(&self.treatments)?;
        if let Some(insurance) = &self.insurance {
            DataValidator::validate_insurance(insurance)?;
        }
        Ok(())
    }

    pub fn treatment_by_name(&self, name: &str) -> Option<&Treatment> {
        self.treatments
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }
}

pub struct DatasetLoader;

impl DatasetLoader {
    /// Load the dataset directory described by the config. Departments are
    /// required; the remaining files are optional.
    pub fn load(config: &DataConfig) -> Result<HospitalDataset> {
        let departments = Self::load_departments(&config.path_for(&config.departments_file))?;

        let treatments = Self::load_optional::<TreatmentCatalog>(&config.path_for(&config.costs_file))?
            .map(|catalog| catalog.treatments)
            .unwrap_or_default();
        let insurance = Self::load_optional(&config.path_for(&config.insurance_file))?;
        let summary = Self::load_optional(&config.path_for(&config.metrics_file))?;
        let trends = Self::load_optional(&config.path_for(&config.trends_file))?;

        let dataset = HospitalDataset {
            departments,
            treatments,
            insurance,
            summary,
            trends,
        };
        dataset.validate(config.min_departments)?;

        log::info!(
            "Loaded dataset from {}: {} departments, {} treatments",
            config.data_dir.display(),
            dataset.departments.len(),
            dataset.treatments.len()
        );
        Ok(dataset)
    }

    /// `.csv` files go through polars, anything else is read as JSON
    pub fn load_departments(path: &Path) -> Result<Vec<Department>> {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            CsvConnector::load_departments(path)
        } else {
            JsonConnector::load(path)
        }
    }

    fn load_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            log::info!("Optional dataset {} not found, skipping", path.display());
            return Ok(None);
        }
        JsonConnector::load(path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_for(dir: &Path) -> DataConfig {
        DataConfig {
            data_dir: dir.to_path_buf(),
            ..DataConfig::default()
        }
    }

    const DEPARTMENTS: &str = r#"[
        {"name": "Cardiology", "budget": 5000000, "costOverruns": 12,
         "patientLoad": 2000, "revenueGenerated": 6000000}
    ]"#;

    #[test]
    fn test_load_departments_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("departments.json"), DEPARTMENTS).unwrap();

        let dataset = DatasetLoader::load(&config_for(dir.path())).unwrap();
        assert_eq!(dataset.departments.len(), 1);
        assert!(dataset.treatments.is_empty());
        assert!(dataset.insurance.is_none());
        assert!(dataset.trends.is_none());
    }

    #[test]
    fn test_missing_departments_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DatasetLoader::load(&config_for(dir.path())).is_err());
    }

    #[test]
    fn test_invalid_department_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("departments.json"),
            r#"[{"name": "ICU", "budget": -5, "costOverruns": 0,
                 "patientLoad": 1, "revenueGenerated": 0}]"#,
        )
        .unwrap();
        assert!(DatasetLoader::load(&config_for(dir.path())).is_err());
    }

    #[test]
    fn test_treatment_lookup_ignores_case() {
        let dataset = HospitalDataset {
            treatments: vec![Treatment {
                id: 7,
                name: "MRI Scan".into(),
                cost: 9000.0,
                gov_cost: 3000.0,
                weight: None,
            }],
            ..HospitalDataset::default()
        };
        assert_eq!(dataset.treatment_by_name("mri scan").map(|t| t.id), Some(7));
        assert!(dataset.treatment_by_name("Dialysis").is_none());
    }
}
