use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::FinanceError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the static datasets live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub data_dir: PathBuf,
    /// `.json` or `.csv`
    pub departments_file: String,
    pub costs_file: String,
    pub insurance_file: String,
    pub metrics_file: String,
    pub trends_file: String,
    pub min_departments: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            departments_file: "departments.json".to_string(),
            costs_file: "costs.json".to_string(),
            insurance_file: "insurance.json".to_string(),
            metrics_file: "metrics.json".to_string(),
            trends_file: "trends.json".to_string(),
            min_departments: 1,
        }
    }
}

impl DataConfig {
    pub fn path_for(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }
}

impl ConfigSection for DataConfig {
    fn section_name() -> &'static str {
        "data"
    }

    fn validate(&self) -> Result<(), FinanceError> {
        let files = [
            ("departments_file", &self.departments_file),
            ("costs_file", &self.costs_file),
            ("insurance_file", &self.insurance_file),
            ("metrics_file", &self.metrics_file),
            ("trends_file", &self.trends_file),
        ];
        for (field, value) in files {
            if value.trim().is_empty() {
                return Err(FinanceError::Configuration(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Data".to_string(),
            fields: vec![
                FieldManifest::new(
                    "data_dir",
                    "path",
                    serde_json::json!("data"),
                    "Directory holding the dataset files",
                ),
                FieldManifest::new(
                    "departments_file",
                    "string",
                    serde_json::json!("departments.json"),
                    "Department table, JSON array or CSV",
                ),
                FieldManifest::new(
                    "costs_file",
                    "string",
                    serde_json::json!("costs.json"),
                    "Treatment price catalog",
                ),
                FieldManifest::new(
                    "insurance_file",
                    "string",
                    serde_json::json!("insurance.json"),
                    "Claim statistics and coverage table",
                ),
                FieldManifest::new(
                    "metrics_file",
                    "string",
                    serde_json::json!("metrics.json"),
                    "Headline hospital figures",
                ),
                FieldManifest::new(
                    "trends_file",
                    "string",
                    serde_json::json!("trends.json"),
                    "Spending and budget trend series",
                ),
                FieldManifest::new(
                    "min_departments",
                    "integer",
                    serde_json::json!(1),
                    "Fewest departments a dataset may contain",
                )
                .with_range(Some(0.0), None),
            ],
        }
    }
}
