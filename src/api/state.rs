use crate::adapters::NasaClient;
use crate::api::rate_limit::RateLimiter;
use crate::config::ServerConfig;
use crate::core::{ApodService, MarsRoverService, NasaApi, NeoService};
use crate::utils::monitor::ProcessMonitor;
use std::sync::Arc;

/// 所有 handler 共用的狀態
#[derive(Clone)]
pub struct AppState {
    pub apod: ApodService,
    pub mars_rover: MarsRoverService,
    pub neo: NeoService,
    pub environment: String,
    pub monitor: Arc<ProcessMonitor>,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(api: Arc<dyn NasaApi>, config: &ServerConfig) -> Self {
        Self {
            apod: ApodService::new(api.clone()),
            mars_rover: MarsRoverService::new(api.clone()),
            neo: NeoService::new(api),
            environment: config.environment.clone(),
            monitor: Arc::new(ProcessMonitor::new(config.monitor)),
            rate_limiter: Arc::new(RateLimiter::new(
                config.rate_limit_max,
                config.rate_limit_window(),
            )),
        }
    }

    /// 使用真正的 NASA 客戶端
    pub fn from_config(config: &ServerConfig) -> Self {
        let client = NasaClient::from_config(config)
            .with_timeouts(config.short_timeout(), config.long_timeout());
        Self::new(Arc::new(client), config)
    }
}
