//! Smart Estate Forecaster HTTP Server
//!
//! Axum-based server that hosts the compiled web page and offers the same
//! simulated valuation as a JSON API for non-browser clients.

mod config;
mod error;
mod handlers;
mod routes;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment first so RUST_LOG from .env applies
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    match config.noise_seed {
        Some(seed) => tracing::info!("✓ Seeded noise ({}) - estimates are reproducible", seed),
        None => tracing::info!("✓ Random noise - estimates vary ±10% per request"),
    }

    let state = AppState::from_config(&config);
    let app = routes::router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🏠 Smart Estate Forecaster running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                 - Health check");
    tracing::info!("  GET  /api/property/defaults  - Form defaults and bounds");
    tracing::info!("  POST /api/predict            - Estimate a property ({} ms delay)", config.prediction_delay.as_millis());
    tracing::info!("  POST /api/trend              - Price trend around a value");
    tracing::info!("  GET  /*                      - Web page from {}", config.static_dir);
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
