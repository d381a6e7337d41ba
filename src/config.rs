use crate::model::ConfigError;
use crate::utils::NumberFormat;
use chrono_tz::Tz;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

pub const CONFIG_ENV: &str = "ELPRIS_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub user_agent: String,
    pub request_timeout_seconds: u64,
    pub time_zone: String,
    pub number_format: NumberFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://www.elprisetjustnu.se".to_string(),
            user_agent: concat!("elpris-cli/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout_seconds: 10,
            time_zone: "Europe/Stockholm".to_string(),
            number_format: NumberFormat::swedish(),
        }
    }
}

impl AppConfig {
    pub fn tz(&self) -> Result<Tz, ConfigError> {
        self.time_zone
            .parse::<Tz>()
            .map_err(|_| ConfigError::TimeZone(self.time_zone.clone()))
    }
}

/// Loads the config file; a missing file yields the defaults.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    if !Path::new(path).exists() {
        info!("No config at {}, using defaults", path);
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    config.tz()?;
    Ok(config)
}

/// Config path from `ELPRIS_CONFIG`, falling back to `config.json`.
pub fn config_path() -> String {
    std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}
