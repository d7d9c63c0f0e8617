use crate::building::{Apartment, Orientation};

/// Upper bound of the thermal disadvantage score.
pub const MAX_SCORE: f64 = 100.0;

const FLOOR_SATURATION: f64 = 50.0;
const FLOOR_WEIGHT: f64 = 40.0;
const SIZE_BASELINE: f64 = 300.0;
const SIZE_SPAN: f64 = 1200.0;
const SIZE_WEIGHT: f64 = 15.0;
const RESIDENT_SATURATION: f64 = 6.0;
const RESIDENT_WEIGHT: f64 = 15.0;

/// Scores how much an apartment needs cooling relative to its neighbours.
///
/// The score is the sum of four independently clamped terms:
///
/// | driver      | range  | saturates at      |
/// |-------------|--------|-------------------|
/// | floor       | 0–40   | floor 50          |
/// | orientation | 0–30   | south             |
/// | size        | 0–15   | 1500 sq ft        |
/// | residents   | 0–15   | 6 residents       |
#[derive(Debug, Default, Clone, Copy)]
pub struct ThermalScorer;

impl ThermalScorer {
    /// Thermal disadvantage score in `[0, 100]`; higher means higher priority.
    pub fn score(&self, apartment: &Apartment) -> f64 {
        let total = floor_term(apartment.floor)
            + orientation_term(apartment.orientation)
            + size_term(apartment.size)
            + occupancy_term(apartment.residents);
        total.min(MAX_SCORE)
    }
}

fn floor_term(floor: u32) -> f64 {
    (f64::from(floor) / FLOOR_SATURATION).min(1.0) * FLOOR_WEIGHT
}

/// Solar gain order for an evening in the northern subtropics.
fn orientation_term(orientation: Orientation) -> f64 {
    match orientation {
        Orientation::South => 30.0,
        Orientation::West => 20.0,
        Orientation::East => 10.0,
        Orientation::North => 0.0,
    }
}

fn size_term(size: f64) -> f64 {
    ((size - SIZE_BASELINE) / SIZE_SPAN).clamp(0.0, 1.0) * SIZE_WEIGHT
}

fn occupancy_term(residents: u32) -> f64 {
    (f64::from(residents) / RESIDENT_SATURATION).min(1.0) * RESIDENT_WEIGHT
}
