//! TOML-based building scenario configuration and preset definitions.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::building::{
    Apartment, DEFAULT_FORECAST_HIGH_C, Orientation, SyntheticBuilding, TariffSchedule,
    WeatherSnapshot, default_preferred_hour,
};

/// Tallest synthetic tower accepted by [`ScenarioConfig::validate`].
pub const MAX_FLOORS: u32 = 200;

/// Top-level scenario configuration parsed from TOML.
///
/// All tables have defaults matching the `tower` preset. Load from TOML
/// with [`ScenarioConfig::from_toml_file`] or pick a built-in preset with
/// [`ScenarioConfig::from_preset`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Synthetic tower used when no explicit apartments are listed.
    #[serde(default)]
    pub building: BuildingConfig,
    /// Explicit apartment list; replaces the synthetic tower when non-empty.
    #[serde(default)]
    pub apartments: Vec<ApartmentConfig>,
    /// Evening weather.
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Time-of-use tariff.
    #[serde(default)]
    pub tariff: TariffConfig,
}

/// Synthetic tower parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildingConfig {
    /// Number of floors (1–[`MAX_FLOORS`]).
    pub floors: u32,
    /// Units per floor (1–26).
    pub units_per_floor: u32,
    /// Generator seed.
    pub seed: u64,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            floors: 45,
            units_per_floor: 4,
            seed: 42,
        }
    }
}

/// One explicitly listed apartment.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApartmentConfig {
    pub id: String,
    pub floor: u32,
    pub orientation: Orientation,
    /// Floor area (sq ft, must be > 0).
    pub size: f64,
    pub residents: u32,
    #[serde(default = "default_preferred_hour")]
    pub preferred_start_time: u32,
}

impl From<&ApartmentConfig> for Apartment {
    fn from(c: &ApartmentConfig) -> Self {
        Apartment::new(c.id.clone(), c.floor, c.orientation, c.size, c.residents)
            .preferring(c.preferred_start_time)
    }
}

/// Evening weather parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeatherConfig {
    /// Outdoor temperature (°C).
    pub temperature: f64,
    /// Relative humidity (%, 0–100).
    pub humidity: f64,
    /// Forecast daily high (°C).
    pub forecast_high: f64,
    /// Draws a typical summer evening from this seed instead of using the
    /// fixed values above.
    pub seed: Option<u64>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            temperature: 31.5,
            humidity: 82.0,
            forecast_high: DEFAULT_FORECAST_HIGH_C,
            seed: None,
        }
    }
}

/// Time-of-use tariff parameters. Defaults to the CLP 2025 structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TariffConfig {
    /// Peak-rate hours of day (0–23).
    pub peak_hours: BTreeSet<u32>,
    /// Peak price per kWh (must be > 0).
    pub peak_rate: f64,
    /// Off-peak price per kWh (must be > 0).
    pub off_peak_rate: f64,
}

impl Default for TariffConfig {
    fn default() -> Self {
        let clp = TariffSchedule::clp_2025();
        Self {
            peak_hours: clp.peak_hours,
            peak_rate: clp.peak_rate,
            off_peak_rate: clp.off_peak_rate,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"tariff.peak_rate"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl ScenarioConfig {
    /// Returns the default 45-floor tower on the CLP tariff.
    pub fn tower() -> Self {
        Self {
            building: BuildingConfig::default(),
            apartments: Vec::new(),
            weather: WeatherConfig::default(),
            tariff: TariffConfig::default(),
        }
    }

    /// Returns the four-apartment sample building.
    pub fn sample() -> Self {
        let apt = |id: &str, floor, orientation, size, residents, preferred| ApartmentConfig {
            id: id.to_string(),
            floor,
            orientation,
            size,
            residents,
            preferred_start_time: preferred,
        };
        Self {
            apartments: vec![
                apt("A101", 10, Orientation::South, 600.0, 3, 19),
                apt("A201", 20, Orientation::North, 500.0, 2, 19),
                apt("A301", 30, Orientation::West, 700.0, 4, 20),
                apt("A401", 40, Orientation::South, 650.0, 3, 19),
            ],
            weather: WeatherConfig {
                forecast_high: 33.0,
                ..WeatherConfig::default()
            },
            ..Self::tower()
        }
    }

    /// Returns the heatwave preset: the tower under 35 °C and 90 % humidity.
    pub fn heatwave() -> Self {
        Self {
            weather: WeatherConfig {
                temperature: 35.0,
                humidity: 90.0,
                forecast_high: 36.5,
                seed: None,
            },
            ..Self::tower()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["tower", "sample", "heatwave"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "tower" => Ok(Self::tower()),
            "sample" => Ok(Self::sample()),
            "heatwave" => Ok(Self::heatwave()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Apartments for this scenario: the explicit list if any, otherwise
    /// the synthetic tower.
    pub fn apartments(&self) -> Vec<Apartment> {
        if self.apartments.is_empty() {
            let b = &self.building;
            SyntheticBuilding::new(b.floors, b.units_per_floor, b.seed).generate()
        } else {
            self.apartments.iter().map(Apartment::from).collect()
        }
    }

    /// Evening weather: the seeded summer sample when `weather.seed` is set,
    /// otherwise the configured values.
    pub fn weather(&self) -> WeatherSnapshot {
        if let Some(seed) = self.weather.seed {
            return WeatherSnapshot::sample_summer(seed);
        }
        WeatherSnapshot {
            temperature_c: self.weather.temperature,
            humidity_pct: self.weather.humidity,
            forecast_high_c: self.weather.forecast_high,
        }
    }

    pub fn tariff(&self) -> TariffSchedule {
        TariffSchedule::new(
            self.tariff.peak_hours.iter().copied(),
            self.tariff.peak_rate,
            self.tariff.off_peak_rate,
        )
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let mut push = |field: String, message: &str| {
            errors.push(ConfigError {
                field,
                message: message.to_string(),
            });
        };

        if self.apartments.is_empty() {
            let b = &self.building;
            if b.floors == 0 || b.floors > MAX_FLOORS {
                push(
                    "building.floors".into(),
                    &format!("must be in [1, {MAX_FLOORS}]"),
                );
            }
            if !(1..=26).contains(&b.units_per_floor) {
                push("building.units_per_floor".into(), "must be in [1, 26]");
            }
        }

        let mut seen = HashSet::new();
        for (i, apt) in self.apartments.iter().enumerate() {
            if apt.floor == 0 {
                push(format!("apartments[{i}].floor"), "must be >= 1");
            }
            if apt.size <= 0.0 {
                push(format!("apartments[{i}].size"), "must be > 0");
            }
            if !seen.insert(apt.id.as_str()) {
                push(format!("apartments[{i}].id"), "must be unique");
            }
        }

        if !(0.0..=100.0).contains(&self.weather.humidity) {
            push("weather.humidity".into(), "must be in [0, 100]");
        }

        let t = &self.tariff;
        if t.peak_rate <= 0.0 {
            push("tariff.peak_rate".into(), "must be > 0");
        }
        if t.off_peak_rate <= 0.0 {
            push("tariff.off_peak_rate".into(), "must be > 0");
        }
        if t.peak_hours.iter().any(|&h| h > 23) {
            push("tariff.peak_hours".into(), "hours must be in [0, 23]");
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tower_preset_valid() {
        let cfg = ScenarioConfig::tower();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "tower should be valid: {errors:?}");
        assert_eq!(cfg.apartments().len(), 180);
    }

    #[test]
    fn from_preset_unknown() {
        let err = ScenarioConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in ScenarioConfig::PRESETS {
            let cfg = ScenarioConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn sample_lists_four_apartments() {
        let apartments = ScenarioConfig::sample().apartments();
        assert_eq!(apartments.len(), 4);
        assert_eq!(apartments[2].id, "A301");
        assert_eq!(apartments[2].preferred_start_hour, 20);
    }

    #[test]
    fn heatwave_is_hotter() {
        let hot = ScenarioConfig::heatwave().weather();
        let base = ScenarioConfig::tower().weather();
        assert!(hot.temperature_c > base.temperature_c);
        assert!(hot.humidity_pct > 85.0);
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[weather]
temperature = 29.0
humidity = 70.0

[tariff]
peak_hours = [19, 20, 21]
peak_rate = 2.9
off_peak_rate = 1.5

[[apartments]]
id = "1A"
floor = 12
orientation = "west"
size = 550.0
residents = 2

[[apartments]]
id = "1B"
floor = 12
orientation = "east"
size = 480.0
residents = 1
preferred_start_time = 21
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        let apartments = cfg.as_ref().map(ScenarioConfig::apartments).unwrap_or_default();
        assert_eq!(apartments.len(), 2);
        assert_eq!(apartments[0].preferred_start_hour, 19);
        assert_eq!(apartments[1].preferred_start_hour, 21);
        assert_eq!(cfg.as_ref().map(|c| c.weather().forecast_high_c), Some(32.0));
        assert_eq!(cfg.as_ref().map(|c| c.tariff().is_peak(21)), Some(true));
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[building]
seed = 99
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.building.seed), Some(99));
        assert_eq!(cfg.as_ref().map(|c| c.building.floors), Some(45));
        assert_eq!(cfg.as_ref().map(|c| c.tariff.peak_rate), Some(2.919));
    }

    #[test]
    fn weather_seed_draws_summer_sample() {
        let toml = r#"
[weather]
seed = 7
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "seeded weather should parse: {:?}", cfg.err());
        let weather = cfg.ok().map(|c| c.weather());
        assert_eq!(weather, Some(WeatherSnapshot::sample_summer(7)));
        let w = weather.unwrap_or_else(|| WeatherSnapshot::new(0.0, 0.0));
        assert!((28.0..=32.0).contains(&w.temperature_c));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[weather]
temperature = 30.0
wind = 4.0
"#;
        assert!(ScenarioConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn unknown_orientation_rejected_by_toml() {
        let toml = r#"
[[apartments]]
id = "X"
floor = 3
orientation = "up"
size = 500.0
residents = 2
"#;
        assert!(ScenarioConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn validation_catches_bad_rates_and_hours() {
        let mut cfg = ScenarioConfig::tower();
        cfg.tariff.peak_rate = 0.0;
        cfg.tariff.peak_hours.insert(24);
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "tariff.peak_rate"));
        assert!(errors.iter().any(|e| e.field == "tariff.peak_hours"));
    }

    #[test]
    fn validation_catches_duplicate_ids() {
        let mut cfg = ScenarioConfig::sample();
        cfg.apartments[3].id = "A101".to_string();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "apartments[3].id"));
    }

    #[test]
    fn validation_catches_empty_tower() {
        let mut cfg = ScenarioConfig::tower();
        cfg.building.floors = 0;
        cfg.building.units_per_floor = 30;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "building.floors"));
        assert!(errors.iter().any(|e| e.field == "building.units_per_floor"));
    }

    #[test]
    fn validation_caps_tower_height() {
        let mut cfg = ScenarioConfig::tower();
        cfg.building.floors = MAX_FLOORS;
        assert!(cfg.validate().is_empty());

        cfg.building.floors = u32::MAX;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "building.floors"));
    }
}
