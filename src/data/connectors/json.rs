use crate::error::{FinanceError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

pub struct JsonConnector;

impl JsonConnector {
    /// Read and deserialize a JSON dataset file
    pub fn load<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FinanceError::DataLoading(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&contents).map_err(|e| {
            FinanceError::DataLoading(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn parse<T: DeserializeOwned>(contents: &str) -> Result<T> {
        Ok(serde_json::from_str(contents)?)
    }
}
