use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::FinanceError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub percentage_precision: usize,
    /// Use K/L/Cr/B suffixes instead of full digit grouping for budgets
    pub compact_numbers: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            percentage_precision: 1,
            compact_numbers: true,
        }
    }
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), FinanceError> {
        if self.percentage_precision > 6 {
            return Err(FinanceError::Configuration(
                "Percentage precision must be between 0 and 6".to_string()
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Display".to_string(),
            fields: vec![
                FieldManifest::new(
                    "currency_symbol",
                    "string",
                    serde_json::json!("₹"),
                    "Symbol prefixed to currency amounts",
                ),
                FieldManifest::new(
                    "percentage_precision",
                    "integer",
                    serde_json::json!(1),
                    "Decimal places shown for percentages",
                )
                .with_range(Some(0.0), Some(6.0)),
                FieldManifest::new(
                    "compact_numbers",
                    "boolean",
                    serde_json::json!(true),
                    "Abbreviate large amounts (K, L, Cr, B)",
                ),
            ],
        }
    }
}
