use crate::inventory::InventoryFormat;
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the harness. Rule behavior is fixed and never configured here.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub inventory: InventoryConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("GILDED_ROSE_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let format = match env::var("GILDED_ROSE_FORMAT") {
            Ok(raw) => raw
                .parse::<InventoryFormat>()
                .map_err(|_| ConfigError::InvalidFormat { value: raw })?,
            Err(_) => InventoryFormat::default(),
        };

        let log_level = env::var("GILDED_ROSE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            inventory: InventoryConfig { format },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Defaults for reading and writing inventory files.
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    pub format: InventoryFormat,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidFormat { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFormat { value } => write!(
                f,
                "GILDED_ROSE_FORMAT must be 'csv' or 'json' (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("GILDED_ROSE_ENV");
        env::remove_var("GILDED_ROSE_FORMAT");
        env::remove_var("GILDED_ROSE_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();

        let config = AppConfig::load().expect("config loads with defaults");

        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.inventory.format, InventoryFormat::Csv);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn reads_overrides_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("GILDED_ROSE_ENV", "CI");
        env::set_var("GILDED_ROSE_FORMAT", "json");
        env::set_var("GILDED_ROSE_LOG_LEVEL", "gilded_rose=trace");

        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.inventory.format, InventoryFormat::Json);
        assert_eq!(config.telemetry.log_level, "gilded_rose=trace");
    }

    #[test]
    fn rejects_unknown_inventory_format() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("GILDED_ROSE_FORMAT", "xml");

        let err = AppConfig::load().expect_err("xml is not supported");
        reset_env();

        assert!(matches!(err, ConfigError::InvalidFormat { ref value } if value == "xml"));
        assert!(err.to_string().contains("GILDED_ROSE_FORMAT"));
    }
}
