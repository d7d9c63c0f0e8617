//! API response types not shared with the library's JSON interface.

use serde::{Deserialize, Serialize};

use crate::building::{HourlyRate, TariffSchedule, WeatherSnapshot};
use crate::estimate::SavingsEstimate;

/// `GET /health` body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: &'static str,
    pub service: String,
    pub version: String,
}

/// `POST /api/schedule/estimate` body.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub success: bool,
    pub estimate: SavingsEstimate,
}

/// `GET /api/electricity` body.
#[derive(Debug, Serialize)]
pub struct ElectricityResponse {
    pub success: bool,
    pub data: TariffData,
    /// Who publishes the tariff.
    pub source: &'static str,
}

/// Tariff fields plus the derived hour-by-hour table.
#[derive(Debug, Serialize)]
pub struct TariffData {
    #[serde(flatten)]
    pub tariff: TariffSchedule,
    pub time_of_use: Vec<HourlyRate>,
}

impl From<&TariffSchedule> for TariffData {
    fn from(tariff: &TariffSchedule) -> Self {
        Self {
            tariff: tariff.clone(),
            time_of_use: tariff.time_of_use(),
        }
    }
}

/// Optional seed for the weather endpoint.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub seed: Option<u64>,
}

/// `GET /api/weather` body.
#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub success: bool,
    pub seed: u64,
    pub data: WeatherSnapshot,
}
