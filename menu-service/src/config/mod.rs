use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct MenuConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

/// Both values are optional: a missing one leaves the service running with
/// the store marked unavailable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MongoConfig {
    pub uri: Option<String>,
    pub database: Option<String>,
}

impl MenuConfig {
    pub fn load() -> Result<Self, AppError> {
        // Handles .env, the optional configuration file and PORT
        let common_config = core_config::Config::load()?;

        Ok(MenuConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: optional_env("DATABASE_URL"),
                database: optional_env("DATABASE_NAME"),
            },
            log_level: optional_env("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            otlp_endpoint: optional_env("OTLP_ENDPOINT"),
        })
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            mongodb: MongoConfig::default(),
            log_level: "info".to_string(),
            otlp_endpoint: None,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    non_empty(env::var(key).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
