use crate::config::ServerConfig;
use crate::utils::error::{ExplorerError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 選用的 TOML 設定檔，所有欄位皆可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub nasa: Option<NasaSection>,
    pub rate_limit: Option<RateLimitSection>,
    pub monitoring: Option<MonitoringSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub environment: Option<String>,
    pub cors_origins: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NasaSection {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub short_timeout_seconds: Option<u64>,
    pub long_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateLimitSection {
    pub max_requests: Option<u32>,
    pub window_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ExplorerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ExplorerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NASA_API_KEY})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static env var pattern");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// 套用到既有設定上，只覆寫檔案中有出現的欄位
    pub fn apply_to(&self, config: &mut ServerConfig) {
        if let Some(server) = &self.server {
            if let Some(host) = &server.host {
                config.host = host.clone();
            }
            if let Some(port) = server.port {
                config.port = port;
            }
            if let Some(environment) = &server.environment {
                config.environment = environment.clone();
            }
            if let Some(origins) = &server.cors_origins {
                config.cors_origins = origins.clone();
            }
        }

        if let Some(nasa) = &self.nasa {
            if let Some(api_key) = &nasa.api_key {
                config.nasa_api_key = api_key.clone();
            }
            if let Some(base_url) = &nasa.base_url {
                config.nasa_base_url = base_url.clone();
            }
            if let Some(secs) = nasa.short_timeout_seconds {
                config.short_timeout_secs = secs;
            }
            if let Some(secs) = nasa.long_timeout_seconds {
                config.long_timeout_secs = secs;
            }
        }

        if let Some(rate_limit) = &self.rate_limit {
            if let Some(max) = rate_limit.max_requests {
                config.rate_limit_max = max;
            }
            if let Some(window) = rate_limit.window_seconds {
                config.rate_limit_window_secs = window;
            }
        }

        if let Some(monitoring) = &self.monitoring {
            config.monitor = monitoring.enabled;
        }
    }

    pub fn into_server_config(self) -> ServerConfig {
        let mut config = ServerConfig::default();
        self.apply_to(&mut config);
        config
    }
}
