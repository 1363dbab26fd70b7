use super::{dataset::DatasetConfig, traits::ConfigSection};
use crate::error::RoadflowError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub dataset: DatasetConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), RoadflowError> {
        self.dataset.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RoadflowError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RoadflowError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| RoadflowError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.config.write().unwrap() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RoadflowError> {
        let config = self.config.read().unwrap();
        let toml_str = toml::to_string_pretty(&*config)
            .map_err(|e| RoadflowError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| RoadflowError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap().clone()
    }

    pub fn update<F>(&self, f: F) -> Result<(), RoadflowError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap();
        f(&mut config);
        config.validate()?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("roadflow-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = temp_path("config.toml");
        let manager = ConfigManager::new();
        manager
            .update(|c| {
                c.dataset.n_his = 6;
                c.dataset.n_train = 10;
            })
            .unwrap();
        manager.save_to_file(&path).unwrap();

        let loaded = ConfigManager::new();
        loaded.load_from_file(&path).unwrap();
        assert_eq!(loaded.get().dataset.n_his, 6);
        assert_eq!(loaded.get().dataset.n_train, 10);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_update_rejects_invalid() {
        let manager = ConfigManager::new();
        let result = manager.update(|c| c.dataset.n_pred = 0);
        assert!(result.is_err());
    }
}
