//! REST API for schedule optimization.
//!
//! Routes:
//! - `GET /health`: liveness probe with service name and version
//! - `POST /api/schedule/optimize`: building-wide cooling schedule
//! - `POST /api/schedule/estimate`: single-apartment savings estimate
//! - `GET /api/electricity`: tariff in force plus its 24-hour rate table
//! - `GET /api/weather`: seeded summer evening (`?seed=N` overrides)

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::building::TariffSchedule;
use crate::engine::CoolingOptimizer;

pub use types::{
    ElectricityResponse, EstimateResponse, HealthResponse, TariffData, WeatherQuery,
    WeatherResponse,
};

/// Application state shared across all request handlers.
///
/// Read-only: the optimizer keeps no state between runs, so no locks are needed.
pub struct AppState {
    /// Service name reported by `/health`.
    pub service: String,
    /// Service version reported by `/health`.
    pub version: String,
    pub optimizer: CoolingOptimizer,
    /// Tariff published by `/api/electricity`.
    pub tariff: TariffSchedule,
    /// Seed for `/api/weather` when the query gives none.
    pub weather_seed: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            optimizer: CoolingOptimizer::default(),
            tariff: TariffSchedule::clp_2025(),
            weather_seed: 42,
        }
    }
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/schedule/optimize", post(handlers::optimize))
        .route("/api/schedule/estimate", post(handlers::estimate))
        .route("/api/electricity", get(handlers::electricity))
        .route("/api/weather", get(handlers::weather))
        .with_state(state)
}

/// Binds to the given address and serves the API until the process exits.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind to `addr` or the
/// server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
