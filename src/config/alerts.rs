use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::FinanceError;
use serde::{Deserialize, Serialize};

/// Thresholds that flag departments and claims in reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Fraud scores above this (0-10 scale) raise an alert
    pub fraud_score_threshold: f64,
    /// Cost overruns above this percentage are listed as alerts
    pub overrun_warning_percent: f64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            fraud_score_threshold: 5.0,
            overrun_warning_percent: 10.0,
        }
    }
}

impl ConfigSection for AlertConfig {
    fn section_name() -> &'static str {
        "alerts"
    }

    fn validate(&self) -> Result<(), FinanceError> {
        if !(0.0..=10.0).contains(&self.fraud_score_threshold) {
            return Err(FinanceError::Configuration(
                "Fraud score threshold must be between 0 and 10".to_string()
            ));
        }
        if !self.overrun_warning_percent.is_finite() {
            return Err(FinanceError::Configuration(
                "Overrun warning percent must be a finite number".to_string()
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Alerts".to_string(),
            fields: vec![
                FieldManifest::new(
                    "fraud_score_threshold",
                    "float",
                    serde_json::json!(5.0),
                    "Fraud score above which claims are flagged",
                )
                .with_range(Some(0.0), Some(10.0)),
                FieldManifest::new(
                    "overrun_warning_percent",
                    "float",
                    serde_json::json!(10.0),
                    "Cost overrun percentage that triggers a department alert",
                ),
            ],
        }
    }
}
