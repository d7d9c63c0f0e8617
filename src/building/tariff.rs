//! Time-of-use electricity tariff.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// CLP base energy rate per kWh (HK$, 2025).
const CLP_BASE_RATE: f64 = 1.432;
/// CLP fuel clause charge per kWh (HK$, 2025).
const CLP_FUEL_CLAUSE: f64 = 0.514;
const CLP_PEAK_MULTIPLIER: f64 = 1.5;
const CLP_OFF_PEAK_MULTIPLIER: f64 = 0.8;

/// Peak/off-peak price schedule shared read-only by every apartment in a run.
///
/// `peak_rate` is expected, but not required, to exceed `off_peak_rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffSchedule {
    /// Hours of day (0–23) billed at the peak rate.
    pub peak_hours: BTreeSet<u32>,
    /// Price per kWh during peak hours.
    pub peak_rate: f64,
    /// Price per kWh outside peak hours.
    pub off_peak_rate: f64,
}

/// Price applicable to one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyRate {
    pub hour: u32,
    pub rate: f64,
    pub is_peak: bool,
}

impl TariffSchedule {
    /// Creates a tariff from an explicit list of peak hours.
    pub fn new(
        peak_hours: impl IntoIterator<Item = u32>,
        peak_rate: f64,
        off_peak_rate: f64,
    ) -> Self {
        Self {
            peak_hours: peak_hours.into_iter().collect(),
            peak_rate,
            off_peak_rate,
        }
    }

    /// CLP Power residential time-of-use structure: 3pm–11pm peak, with
    /// peak and off-peak rates derived from the base rate plus fuel clause.
    pub fn clp_2025() -> Self {
        let energy = CLP_BASE_RATE + CLP_FUEL_CLAUSE;
        Self::new(
            15..=23,
            round3(energy * CLP_PEAK_MULTIPLIER),
            round3(energy * CLP_OFF_PEAK_MULTIPLIER),
        )
    }

    /// Returns `true` when `hour` is billed at the peak rate.
    pub fn is_peak(&self, hour: u32) -> bool {
        self.peak_hours.contains(&hour)
    }

    /// Price per kWh applicable at `hour`.
    pub fn rate_at(&self, hour: u32) -> f64 {
        if self.is_peak(hour) {
            self.peak_rate
        } else {
            self.off_peak_rate
        }
    }

    /// Full 24-hour rate table, midnight first.
    pub fn time_of_use(&self) -> Vec<HourlyRate> {
        (0..24)
            .map(|hour| HourlyRate {
                hour,
                rate: self.rate_at(hour),
                is_peak: self.is_peak(hour),
            })
            .collect()
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
