use super::{
    decoder::DecoderConfig, generator::GeneratorConfig, preview::PreviewConfig,
    traits::ConfigSection,
};
use crate::error::PepeError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Environment variables with this prefix override file values,
/// e.g. `PEPE_DNA__GENERATOR__BITS_PER_SET=128`
pub const ENV_PREFIX: &str = "PEPE_DNA";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub decoder: DecoderConfig,
    pub preview: PreviewConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), PepeError> {
        self.generator.validate()?;
        self.decoder.validate()?;
        self.preview.validate()?;
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

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PepeError> {
        let contents = std::fs::read_to_string(path)?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| PepeError::Configuration(format!("Failed to parse config: {}", e)))?;

        self.replace(config)
    }

    /// Load an optional TOML file, then apply `PEPE_DNA__*` environment overrides
    pub fn load_layered<P: AsRef<Path>>(&self, path: Option<P>) -> Result<(), PepeError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path.as_ref()).required(true));
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        self.replace(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PepeError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| PepeError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        match self.config.read() {
            Ok(config) => config.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Apply `f` to a copy and keep it only if it still validates
    pub fn update<F>(&self, f: F) -> Result<(), PepeError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get();
        f(&mut candidate);
        self.replace(candidate)
    }

    fn replace(&self, config: AppConfig) -> Result<(), PepeError> {
        config.validate()?;
        let mut slot = self
            .config
            .write()
            .map_err(|_| PepeError::Configuration("Config lock poisoned".to_string()))?;
        *slot = config;
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

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_update_rejects_invalid() {
        let manager = ConfigManager::new();
        let result = manager.update(|c| c.generator.bits_per_set = 0);
        assert!(result.is_err());
        assert_eq!(manager.get().generator.bits_per_set, 256);

        manager.update(|c| c.generator.bits_per_set = 128).unwrap();
        assert_eq!(manager.get().generator.bits_per_set, 128);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("[decoder]\nresolve_conflicts = false\n").unwrap();
        assert!(!config.decoder.resolve_conflicts);
        assert_eq!(config.generator, GeneratorConfig::default());
        assert_eq!(config.preview, PreviewConfig::default());
    }
}
