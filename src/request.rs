//! JSON request/response contract for schedule optimization.
//!
//! Input is validated completely before the engine runs; a request either
//! fails with a [`RequestError`] or produces a full [`OptimizeResponse`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::building::{
    Apartment, Orientation, TariffSchedule, WeatherSnapshot, default_preferred_hour,
};
use crate::engine::{BuildingMetrics, CoolingOptimizer, ScheduleAssignment};

/// Top-level fields every request must carry.
pub const REQUIRED_FIELDS: [&str; 3] = ["apartments", "weather", "electricity"];

/// Client-input errors. Detected before any schedule is computed.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("No data provided")]
    Empty,

    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("apartment {apartment}: unknown orientation \"{value}\" (expected north, south, east or west)")]
    UnknownOrientation { apartment: String, value: String },

    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Apartment as it arrives on the wire; orientation is checked separately
/// so the error names the offending apartment.
#[derive(Debug, Deserialize)]
struct ApartmentPayload {
    id: String,
    floor: u32,
    orientation: String,
    size: f64,
    residents: u32,
    #[serde(default = "default_preferred_hour")]
    preferred_start_time: u32,
}

#[derive(Debug, Deserialize)]
struct RequestPayload {
    apartments: Vec<ApartmentPayload>,
    weather: WeatherSnapshot,
    electricity: TariffSchedule,
}

/// A validated optimization request.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeRequest {
    pub apartments: Vec<Apartment>,
    pub weather: WeatherSnapshot,
    pub tariff: TariffSchedule,
}

/// Successful optimization response.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizeResponse {
    pub success: bool,
    pub schedules: Vec<ScheduleAssignment>,
    pub metrics: BuildingMetrics,
}

/// Error body returned for rejected requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }
}

impl OptimizeRequest {
    /// Parses and validates a raw JSON body.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] for an empty body, a non-object body, a
    /// missing top-level field, an unrecognised orientation, or any field
    /// of the wrong type.
    pub fn from_json(body: &[u8]) -> Result<Self, RequestError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(RequestError::Empty);
        }
        Self::from_value(serde_json::from_slice(body)?)
    }

    /// Validates an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// See [`OptimizeRequest::from_json`].
    pub fn from_value(value: Value) -> Result<Self, RequestError> {
        let object = match &value {
            Value::Null => return Err(RequestError::Empty),
            Value::Object(map) if map.is_empty() => return Err(RequestError::Empty),
            Value::Object(map) => map,
            _ => return Err(RequestError::NotAnObject),
        };
        if let Some(missing) = REQUIRED_FIELDS.into_iter().find(|f| !object.contains_key(*f)) {
            return Err(RequestError::MissingField(missing));
        }

        let payload: RequestPayload = serde_json::from_value(value)?;
        let apartments = payload
            .apartments
            .into_iter()
            .map(ApartmentPayload::into_apartment)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            apartments,
            weather: payload.weather,
            tariff: payload.electricity,
        })
    }

    /// Runs the engine on this request.
    pub fn optimize(&self, optimizer: &CoolingOptimizer) -> OptimizeResponse {
        let result = optimizer.optimize(&self.apartments, &self.weather, &self.tariff);
        OptimizeResponse {
            success: true,
            schedules: result.assignments,
            metrics: result.metrics,
        }
    }
}

impl ApartmentPayload {
    fn into_apartment(self) -> Result<Apartment, RequestError> {
        let orientation = self
            .orientation
            .parse::<Orientation>()
            .map_err(|_| RequestError::UnknownOrientation {
                apartment: self.id.clone(),
                value: self.orientation.clone(),
            })?;
        Ok(Apartment {
            id: self.id,
            floor: self.floor,
            orientation,
            size: self.size,
            residents: self.residents,
            preferred_start_hour: self.preferred_start_time,
        })
    }
}

/// Parses `body`, runs the default optimizer, and returns the response.
///
/// # Errors
///
/// Returns a [`RequestError`] if the body is not a valid request; no
/// schedule is computed in that case.
pub fn optimize_json(body: &[u8]) -> Result<OptimizeResponse, RequestError> {
    let request = OptimizeRequest::from_json(body)?;
    Ok(request.optimize(&CoolingOptimizer::default()))
}
