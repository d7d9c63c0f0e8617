//! Inputs to a scheduling run: apartments, weather and tariff.

/// Apartment profile and orientation.
pub mod apartment;
/// Seeded synthetic tower generator.
pub mod generator;
pub mod tariff;
/// Weather snapshot for the evening being scheduled.
pub mod weather;

pub(crate) use apartment::default_preferred_hour;
pub use apartment::{Apartment, DEFAULT_PREFERRED_HOUR, Orientation, UnknownOrientation};
pub use generator::SyntheticBuilding;
pub use tariff::{HourlyRate, TariffSchedule};
pub use weather::{DEFAULT_FORECAST_HIGH_C, WeatherSnapshot};
