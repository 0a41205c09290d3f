use super::{
    alerts::AlertConfig,
    data::DataConfig,
    display::DisplayConfig,
    traits::{ConfigManifest, ConfigSection},
};
use crate::error::FinanceError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Environment overrides look like `HOSPITAL_FINANCE_DATA__DATA_DIR=/srv/data`
pub const ENV_PREFIX: &str = "HOSPITAL_FINANCE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub display: DisplayConfig,
    pub alerts: AlertConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), FinanceError> {
        self.data.validate()?;
        self.display.validate()?;
        self.alerts.validate()?;
        Ok(())
    }

    pub fn manifests(&self) -> Vec<ConfigManifest> {
        vec![
            self.data.to_manifest(),
            self.display.to_manifest(),
            self.alerts.to_manifest(),
        ]
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Layer the TOML file and `HOSPITAL_FINANCE_*` environment variables over
    /// the defaults. Missing keys keep their default values.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FinanceError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?;
        self.apply(settings)
    }

    /// Defaults plus environment overrides only
    pub fn load_from_env(&self) -> Result<(), FinanceError> {
        let settings = Config::builder().add_source(Self::environment()).build()?;
        self.apply(settings)
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn apply(&self, settings: Config) -> Result<(), FinanceError> {
        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        log::debug!("Loaded configuration: {:?}", config);
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FinanceError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| FinanceError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| FinanceError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply an edit; the edit is rolled back when the result fails validation
    pub fn update<F>(&self, f: F) -> Result<(), FinanceError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AppConfig::default().validate().is_ok());
        assert_eq!(AppConfig::default().manifests().len(), 3);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("finance.toml");
        std::fs::write(
            &path,
            "[data]\ndata_dir = \"/srv/hospital\"\n\n[alerts]\nfraud_score_threshold = 7.5\n",
        )
        .unwrap();

        let manager = ConfigManager::new();
        manager.load_from_file(&path).unwrap();
        let config = manager.get();

        assert_eq!(config.data.data_dir, PathBuf::from("/srv/hospital"));
        assert_eq!(config.data.departments_file, "departments.json");
        assert_eq!(config.alerts.fraud_score_threshold, 7.5);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("finance.toml");
        std::fs::write(&path, "[alerts]\nfraud_score_threshold = 42.0\n").unwrap();

        let manager = ConfigManager::new();
        assert!(manager.load_from_file(&path).is_err());
        assert_eq!(manager.get().alerts.fraud_score_threshold, 5.0);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");

        let manager = ConfigManager::new();
        manager
            .update(|c| c.display.percentage_precision = 2)
            .unwrap();
        manager.save_to_file(&path).unwrap();

        let reloaded = ConfigManager::new();
        reloaded.load_from_file(&path).unwrap();
        assert_eq!(reloaded.get().display.percentage_precision, 2);
    }

    #[test]
    fn test_update_rolls_back_invalid_edit() {
        let manager = ConfigManager::new();
        let result = manager.update(|c| c.display.percentage_precision = 12);
        assert!(result.is_err());
        assert_eq!(manager.get().display.percentage_precision, 1);
    }
}
