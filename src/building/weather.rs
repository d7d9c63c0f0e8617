use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

/// Forecast high assumed when the caller supplies none (°C).
pub const DEFAULT_FORECAST_HIGH_C: f64 = 32.0;

fn default_forecast_high() -> f64 {
    DEFAULT_FORECAST_HIGH_C
}

/// Weather conditions shared read-only by every apartment in a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Current outdoor temperature (°C).
    #[serde(rename = "temperature")]
    pub temperature_c: f64,
    /// Current relative humidity (%).
    #[serde(rename = "humidity")]
    pub humidity_pct: f64,
    /// Forecast daily high (°C). Not used by cost estimation.
    #[serde(rename = "forecast_high", default = "default_forecast_high")]
    pub forecast_high_c: f64,
}

impl WeatherSnapshot {
    /// Creates a snapshot with the default forecast high.
    pub fn new(temperature_c: f64, humidity_pct: f64) -> Self {
        Self {
            temperature_c,
            humidity_pct,
            forecast_high_c: DEFAULT_FORECAST_HIGH_C,
        }
    }

    /// Draws a typical subtropical summer evening: 28–32 °C and 70–90 % humidity,
    /// with a forecast high 0–2 °C above the current reading.
    ///
    /// Values are rounded to one decimal and are reproducible for a given `seed`.
    pub fn sample_summer(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let temperature_c = round1(rng.random_range(28.0..=32.0));
        let humidity_pct = round1(rng.random_range(70.0..=90.0));
        let forecast_high_c = round1(temperature_c + rng.random_range(0.0..=2.0));
        Self {
            temperature_c,
            humidity_pct,
            forecast_high_c,
        }
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
