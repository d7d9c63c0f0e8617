//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use cooling_sched::building::{Apartment, Orientation, TariffSchedule, WeatherSnapshot};

/// The four-apartment sample building (A101, A201, A301, A401).
pub fn sample_building() -> Vec<Apartment> {
    vec![
        Apartment::new("A101", 10, Orientation::South, 600.0, 3),
        Apartment::new("A201", 20, Orientation::North, 500.0, 2),
        Apartment::new("A301", 30, Orientation::West, 700.0, 4).preferring(20),
        Apartment::new("A401", 40, Orientation::South, 650.0, 3),
    ]
}

/// Ten south-facing apartments on floors 10, 15, ..., 55, all preferring 19:00.
///
/// Scores strictly increase with floor up to floor 50.
pub fn south_stack() -> Vec<Apartment> {
    (0..10u32)
        .map(|i| Apartment::new(format!("S{i}"), 10 + 5 * i, Orientation::South, 600.0, 3))
        .collect()
}

/// Every combination of floor band, orientation, size band and occupancy,
/// with preferences spread across the evening and beyond.
pub fn mixed_building() -> Vec<Apartment> {
    let mut apartments = Vec::new();
    let mut n = 0u32;
    for floor in [1, 8, 25, 49, 60] {
        for orientation in Orientation::ALL {
            for size in [250.0, 800.0, 1600.0] {
                for residents in [0, 2, 7] {
                    let preferred = [15, 17, 19, 21, 23, 2][(n % 6) as usize];
                    apartments.push(
                        Apartment::new(format!("M{n:03}"), floor, orientation, size, residents)
                            .preferring(preferred),
                    );
                    n += 1;
                }
            }
        }
    }
    apartments
}

/// Mild evening: 30 °C, 75 % humidity.
pub fn mild_weather() -> WeatherSnapshot {
    WeatherSnapshot::new(30.0, 75.0)
}

/// Peak covers 19:00–21:00 only; 2.9 peak, 1.5 off-peak.
pub fn narrow_peak_tariff() -> TariffSchedule {
    TariffSchedule::new([19, 20, 21], 2.9, 1.5)
}

/// Peak covers the whole evening window.
pub fn all_peak_tariff() -> TariffSchedule {
    TariffSchedule::clp_2025()
}
