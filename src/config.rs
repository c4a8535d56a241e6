use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use veckoplan_shared::mealplan::MAX_SLOTS;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(
    Debug,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local map; nothing survives a restart. For tests and
    /// read-only-filesystem deployments.
    Memory,
    #[default]
    Sqlite,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default = "default_store_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            url: default_store_url(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_store_url() -> String {
    "sqlite:veckoplan.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    /// Slot count for generation and for weeks first touched by a manual
    /// edit.
    #[serde(default = "default_slots")]
    pub default_slots: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_slots: default_slots(),
        }
    }
}

fn default_slots() -> usize {
    5
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Path to a recipes JSON file; empty means the embedded seed catalog.
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (VECKOPLAN__STORE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("store.backend", "sqlite")?
            .set_default("store.url", default_store_url())?
            .set_default("store.max_connections", 5)?
            .set_default("planner.default_slots", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The config file is optional; defaults and env cover the rest.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("VECKOPLAN")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("store.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.store.max_connections < 1 {
            return Err("store max_connections must be at least 1".to_string());
        }
        if self.planner.default_slots < 1 || self.planner.default_slots > MAX_SLOTS {
            return Err(format!(
                "planner default_slots must be between 1 and {MAX_SLOTS}"
            ));
        }
        if self.store.backend == StoreBackend::Sqlite && self.store.url.is_empty() {
            return Err("store url must not be empty for the sqlite backend".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            store: StoreConfig::default(),
            planner: PlannerConfig::default(),
            catalog: CatalogConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = base_config();
        assert_eq!(config.store.backend, StoreBackend::Sqlite);
        assert_eq!(config.planner.default_slots, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_connections() {
        let mut config = base_config();
        config.store.max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_slot_count_bounds() {
        let mut config = base_config();
        config.planner.default_slots = 0;
        assert!(config.validate().is_err());

        config.planner.default_slots = 8;
        assert!(config.validate().is_err());

        config.planner.default_slots = 7;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_sqlite_url() {
        let mut config = base_config();
        config.store.url = String::new();
        assert!(config.validate().is_err());

        config.store.backend = StoreBackend::Memory;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_backend_display() {
        assert_eq!(StoreBackend::Memory.to_string(), "memory");
        assert_eq!(StoreBackend::Sqlite.to_string(), "sqlite");
    }
}
