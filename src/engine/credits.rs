use crate::building::{Apartment, WeatherSnapshot};

use super::types::COOLING_DURATION_HOURS;

/// Credit per hour an apartment is moved away from its preference.
const SHIFT_CREDIT_PER_HOUR: f64 = 5.0;
/// Scores above this earn an extra disadvantage credit.
const DISADVANTAGE_THRESHOLD: f64 = 60.0;
const DISADVANTAGE_CREDIT_PER_POINT: f64 = 2.0;
const PEAK_PENALTY: f64 = 10.0;
const OFF_PEAK_REWARD: f64 = 15.0;

/// Area served by one kWh of cooling per hour (sq ft).
const AREA_PER_KWH: f64 = 100.0;

/// Computes the incentive credit and the energy cost of one assignment.
#[derive(Debug, Clone, Copy)]
pub struct CreditCostEstimator {
    /// Length of a cooling run in hours.
    pub duration_hours: u32,
}

impl Default for CreditCostEstimator {
    fn default() -> Self {
        Self {
            duration_hours: COOLING_DURATION_HOURS,
        }
    }
}

impl CreditCostEstimator {
    /// Credit earned for accepting `assigned` instead of `preferred`.
    ///
    /// `5/h` of shift, `2/point` of score above 60, then `-10` in a peak
    /// hour or `+15` off peak. Never negative.
    pub fn credits(
        &self,
        assigned: u32,
        preferred: u32,
        thermal_score: f64,
        is_peak: bool,
    ) -> f64 {
        let mut credits = f64::from(assigned.abs_diff(preferred)) * SHIFT_CREDIT_PER_HOUR;

        if thermal_score > DISADVANTAGE_THRESHOLD {
            credits += (thermal_score - DISADVANTAGE_THRESHOLD) * DISADVANTAGE_CREDIT_PER_POINT;
        }

        if is_peak {
            credits -= PEAK_PENALTY;
        } else {
            credits += OFF_PEAK_REWARD;
        }

        credits.max(0.0)
    }

    /// Hourly cooling draw (kWh) under the given weather.
    ///
    /// One kWh per 100 sq ft, scaled by 1.3 above 32 °C (1.15 above 28 °C)
    /// and by a further 1.1 above 85 % humidity.
    pub fn hourly_kwh(&self, apartment: &Apartment, weather: &WeatherSnapshot) -> f64 {
        let mut kwh = apartment.size / AREA_PER_KWH;

        if weather.temperature_c > 32.0 {
            kwh *= 1.3;
        } else if weather.temperature_c > 28.0 {
            kwh *= 1.15;
        }

        if weather.humidity_pct > 85.0 {
            kwh *= 1.1;
        }

        kwh
    }

    /// Cost of a full cooling run billed at `rate` per kWh.
    pub fn estimated_cost(
        &self,
        apartment: &Apartment,
        rate: f64,
        weather: &WeatherSnapshot,
    ) -> f64 {
        self.hourly_kwh(apartment, weather) * f64::from(self.duration_hours) * rate
    }
}

/// Rounds to whole cents, exact halves to the even cent.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
