#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::{DEFAULT_API_KEY, DEFAULT_BASE_URL};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEVELOPMENT_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub nasa_api_key: String,
    pub nasa_base_url: String,
    /// 空白時依環境決定 (開發環境允許本機前端)
    pub cors_origins: Vec<String>,
    /// 每個 IP 在時間窗內可發出的 /api 請求數，0 代表停用
    pub rate_limit_max: u32,
    pub rate_limit_window_secs: u64,
    pub short_timeout_secs: u64,
    pub long_timeout_secs: u64,
    pub monitor: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            environment: "development".to_string(),
            nasa_api_key: DEFAULT_API_KEY.to_string(),
            nasa_base_url: DEFAULT_BASE_URL.to_string(),
            cors_origins: Vec::new(),
            rate_limit_max: 100,
            rate_limit_window_secs: 15 * 60,
            short_timeout_secs: 10,
            long_timeout_secs: 15,
            monitor: false,
        }
    }
}

impl ServerConfig {
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    pub fn effective_cors_origins(&self) -> Vec<String> {
        if !self.cors_origins.is_empty() {
            return self.cors_origins.clone();
        }
        if self.is_production() {
            Vec::new()
        } else {
            DEVELOPMENT_ORIGINS.iter().map(|o| o.to_string()).collect()
        }
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }

    pub fn short_timeout(&self) -> Duration {
        Duration::from_secs(self.short_timeout_secs)
    }

    pub fn long_timeout(&self) -> Duration {
        Duration::from_secs(self.long_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 開發環境使用 DEMO_KEY 時提醒
    pub fn uses_demo_key(&self) -> bool {
        self.nasa_api_key == DEFAULT_API_KEY
    }
}

impl ConfigProvider for ServerConfig {
    fn nasa_base_url(&self) -> &str {
        &self.nasa_base_url
    }

    fn nasa_api_key(&self) -> &str {
        &self.nasa_api_key
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("nasa_base_url", &self.nasa_base_url)?;
        validation::validate_non_empty_string("nasa_api_key", &self.nasa_api_key)?;
        validation::validate_non_empty_string("host", &self.host)?;
        validation::validate_positive_number("rate_limit_window_secs", self.rate_limit_window_secs, 1)?;
        validation::validate_range("short_timeout_secs", self.short_timeout_secs, 1, 300)?;
        validation::validate_range("long_timeout_secs", self.long_timeout_secs, 1, 300)?;

        for origin in &self.cors_origins {
            validation::validate_url("cors_origins", origin)?;
        }

        Ok(())
    }
}
