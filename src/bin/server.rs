//! AQI Forecast HTTP Server Binary
//!
//! Main entry point for the AQI forecast REST API server. It loads the
//! configuration and asset files, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin aqi-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (overrides config, default: 0.0.0.0)
//! - `PORT`: Server port (overrides config, default: 8080)
//! - `AQI_CONFIG`: Path to the aqi.toml configuration file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use aqi_forecast::assets::Assets;
use aqi_forecast::config::AppConfig;
use aqi_forecast::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting AQI Forecast HTTP Server");

    // Load configuration from an explicit path or the standard locations
    let config = match env::var("AQI_CONFIG") {
        Ok(path) => AppConfig::from_file(&path)?,
        Err(_) => AppConfig::from_default_location().unwrap_or_else(|e| {
            warn!("config unreadable, using defaults: {}", e);
            AppConfig::default()
        }),
    };

    // Load model and dataset once; missing files degrade to fallbacks
    let assets = Assets::load(&config.assets);
    if assets.primary_model_available() {
        info!("primary regression model serving");
    } else {
        info!("seasonal fallback prediction serving");
    }

    // Create application state and router
    let state = AppState::new(Arc::new(assets), Arc::new(config.clone()));
    let app = create_router(state);

    // Determine bind address; environment overrides config
    let host = env::var("HOST").unwrap_or(config.server.host);
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
