use anyhow::Context;
use clap::Parser;
use nasa_explorer::utils::{logger, validation::Validate};
use nasa_explorer::{api, AppState, CliConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(config.is_production(), cli.verbose);

    tracing::info!("Starting NASA Data Explorer backend");
    if cli.verbose {
        tracing::debug!(
            host = %config.host,
            port = config.port,
            environment = %config.environment,
            "Resolved config"
        );
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.uses_demo_key() {
        tracing::warn!("⚠️ Using DEMO_KEY, NASA limits it to 30 requests per hour per IP");
    }
    if config.monitor {
        tracing::info!("🔍 Process monitoring enabled");
    }

    let state = AppState::from_config(&config);
    let app = api::create_router(state, &config);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!("🚀 Server running on port {}", config.port);
    tracing::info!("📊 Environment: {}", config.environment);
    tracing::info!("🔗 Health check: http://localhost:{}/health", config.port);
    tracing::info!("🌌 NASA API base: {}", config.nasa_base_url);

    api::serve(listener, app, shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
