//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use tracing::warn;

use super::AppState;
use super::types::{
    ElectricityResponse, EstimateResponse, HealthResponse, TariffData, WeatherQuery,
    WeatherResponse,
};
use crate::building::WeatherSnapshot;
use crate::estimate::EstimateRequest;
use crate::request::{ErrorResponse, OptimizeRequest, OptimizeResponse};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: impl ToString) -> ApiError {
    let body = ErrorResponse::new(error);
    warn!(error = %body.error, "rejected request");
    (StatusCode::BAD_REQUEST, Json(body))
}

/// `GET /health` → 200 + `HealthResponse`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.service.clone(),
        version: state.version.clone(),
    })
}

/// Computes the schedule for the posted building.
///
/// `POST /api/schedule/optimize` → 200 + `OptimizeResponse`
/// Invalid body → 400 + `ErrorResponse`; no schedule is computed.
///
/// The body is taken raw so that empty or mistyped payloads get the same
/// error contract as the library instead of axum's extractor rejections.
pub async fn optimize(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<OptimizeResponse>, ApiError> {
    let request = OptimizeRequest::from_json(&body).map_err(bad_request)?;
    Ok(Json(request.optimize(&state.optimizer)))
}

/// Quick savings estimate for one apartment.
///
/// `POST /api/schedule/estimate` → 200 + `EstimateResponse`
/// An empty body estimates the default apartment.
pub async fn estimate(body: Bytes) -> Result<Json<EstimateResponse>, ApiError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        EstimateRequest::default()
    } else {
        serde_json::from_slice::<EstimateRequest>(&body).map_err(bad_request)?
    };
    Ok(Json(EstimateResponse {
        success: true,
        estimate: request.estimate(),
    }))
}

/// `GET /api/electricity` → 200 + `ElectricityResponse`
pub async fn electricity(State(state): State<Arc<AppState>>) -> Json<ElectricityResponse> {
    Json(ElectricityResponse {
        success: true,
        data: TariffData::from(&state.tariff),
        source: "CLP Power Hong Kong",
    })
}

/// Typical summer evening drawn from a seed.
///
/// `GET /api/weather` → 200 + `WeatherResponse` using the server's seed
/// `GET /api/weather?seed=N` → same, drawn from `N`
pub async fn weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeatherQuery>,
) -> Json<WeatherResponse> {
    let seed = query.seed.unwrap_or(state.weather_seed);
    Json(WeatherResponse {
        success: true,
        seed,
        data: WeatherSnapshot::sample_summer(seed),
    })
}
