use crate::config::toml_config::TomlConfig;
use crate::config::ServerConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// 命令列參數；未指定的欄位沿用設定檔或預設值
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "nasa-explorer")]
#[command(about = "Proxy API for NASA's APOD, Mars Rover and Near-Earth Object datasets")]
pub struct CliConfig {
    #[arg(long, env = "NASA_EXPLORER_CONFIG", help = "Optional TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "APP_ENV", help = "development or production")]
    pub environment: Option<String>,

    #[arg(long, env = "NASA_API_KEY", hide_env_values = true)]
    pub nasa_api_key: Option<String>,

    #[arg(long, env = "NASA_BASE_URL")]
    pub nasa_base_url: Option<String>,

    #[arg(long, env = "CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    #[arg(long, env = "RATE_LIMIT_MAX", help = "Requests per window per IP, 0 disables")]
    pub rate_limit_max: Option<u32>,

    #[arg(long, env = "RATE_LIMIT_WINDOW_SECS")]
    pub rate_limit_window_secs: Option<u64>,

    #[arg(long, help = "Report process stats on /health")]
    pub monitor: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 預設值 ← 設定檔 ← 命令列 / 環境變數
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_server_config(),
            None => ServerConfig::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(environment) = &self.environment {
            config.environment = environment.clone();
        }
        if let Some(api_key) = &self.nasa_api_key {
            config.nasa_api_key = api_key.clone();
        }
        if let Some(base_url) = &self.nasa_base_url {
            config.nasa_base_url = base_url.clone();
        }
        if let Some(origins) = &self.cors_origins {
            config.cors_origins = origins
                .iter()
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        if let Some(max) = self.rate_limit_max {
            config.rate_limit_max = max;
        }
        if let Some(window) = self.rate_limit_window_secs {
            config.rate_limit_window_secs = window;
        }
        if self.monitor {
            config.monitor = true;
        }

        Ok(config)
    }
}
