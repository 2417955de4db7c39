//! Weather Dashboard HTTP Server
//!
//! Main entry point for the dashboard backend.

use std::sync::Arc;

use anyhow::Context;
use application::WeatherService;
use infrastructure::{AppConfig, LogFormat, OpenWeatherAdapter, init_logging};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let log_format: LogFormat = config.server.log_format.parse()?;
    init_logging(log_format)?;

    info!("🌤️ Weather Dashboard v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        static_dir = %config.server.static_dir,
        base_url = %config.openweather.base_url,
        "Configuration loaded"
    );

    if !config.has_api_key() {
        warn!("⚠️ OPENWEATHER_API_KEY is not set; weather endpoints will return 500");
    }

    // Initialize provider adapter and services
    let adapter = OpenWeatherAdapter::with_config(config.openweather.client_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize weather provider: {e}"))?;
    let weather_service = WeatherService::new(Arc::new(adapter), config.openweather.api_key());

    let state = AppState::new(Arc::new(weather_service), &config.server.static_dir);

    // Build router
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{}", addr);
    info!("📚 Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
///
/// In-flight requests are allowed to finish once a signal arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
