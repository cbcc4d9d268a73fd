//! Clinic Analytics HTTP Server Binary
//!
//! Loads the visit dataset once, then serves the dashboard API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin clinic-server
//!
//! DATA_PATH=data/clinical_analytics.csv.gz PORT=8050 cargo run --bin clinic-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Path to a `dashboard.toml` (default: searched)
//! - `DATA_PATH`: Dataset file, `.csv` or `.csv.gz`
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use clinic_analytics::config::DashboardConfig;
use clinic_analytics::http::{create_router, AppState};
use clinic_analytics::io::load_and_normalize;

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
        .with_thread_ids(true)
        .init();

    info!("Starting Clinic Analytics HTTP Server");

    let config = DashboardConfig::load().context("Failed to load configuration")?;

    // The dataset is loaded exactly once; a bad file stops startup.
    let dataset = load_and_normalize(&config.data.path).with_context(|| {
        format!("Failed to load dataset from {}", config.data.path.display())
    })?;

    let state = AppState::new(dataset, config.data.departments.clone());
    let app = create_router(state);

    let addr = config.server.socket_addr()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
