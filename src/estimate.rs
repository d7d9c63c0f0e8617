//! Quick monthly savings estimate for a single apartment.
//!
//! Independent of the scheduling engine: a closed-form rule of thumb used
//! to show prospective residents what joining the programme is worth.

use serde::{Deserialize, Serialize};

use crate::building::Orientation;

const BASE_MONTHLY_SAVINGS: f64 = 200.0;
const CREDIT_SHARE: f64 = 0.3;
const REFERENCE_SIZE: f64 = 600.0;

fn default_floor() -> u32 {
    20
}

fn default_orientation() -> String {
    Orientation::South.as_str().to_string()
}

fn default_size() -> f64 {
    REFERENCE_SIZE
}

/// Estimate inputs; every field is optional on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateRequest {
    #[serde(default = "default_floor")]
    pub floor: u32,
    /// Free-form so unknown values fall back to a neutral multiplier.
    #[serde(default = "default_orientation")]
    pub orientation: String,
    #[serde(default = "default_size")]
    pub size: f64,
}

impl Default for EstimateRequest {
    fn default() -> Self {
        Self {
            floor: default_floor(),
            orientation: default_orientation(),
            size: default_size(),
        }
    }
}

/// Estimated monthly and yearly benefit in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SavingsEstimate {
    pub monthly_savings: i64,
    pub credits_earned: i64,
    pub total_benefit: i64,
    pub yearly_benefit: i64,
}

fn orientation_multiplier(orientation: &str) -> f64 {
    match orientation.parse::<Orientation>() {
        Ok(Orientation::South) => 1.4,
        Ok(Orientation::West) => 1.2,
        Ok(Orientation::East) => 1.0,
        Ok(Orientation::North) => 0.8,
        Err(_) => 1.0,
    }
}

impl EstimateRequest {
    pub fn estimate(&self) -> SavingsEstimate {
        let floor_factor = (f64::from(self.floor) / 50.0).min(1.0);
        let monthly = BASE_MONTHLY_SAVINGS
            * (1.0 + floor_factor)
            * orientation_multiplier(&self.orientation)
            * (self.size / REFERENCE_SIZE);
        let monthly_savings = monthly.trunc() as i64;
        let credits_earned = (monthly_savings as f64 * CREDIT_SHARE).trunc() as i64;
        let total_benefit = monthly_savings + credits_earned;

        SavingsEstimate {
            monthly_savings,
            credits_earned,
            total_benefit,
            yearly_benefit: total_benefit * 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_mid_rise_south_unit() {
        let e = EstimateRequest::default().estimate();
        // 200 * 1.4 * 1.4 * 1.0 = 392
        assert_eq!(e.monthly_savings, 392);
        assert_eq!(e.credits_earned, 117);
        assert_eq!(e.total_benefit, 509);
        assert_eq!(e.yearly_benefit, 6108);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let req: EstimateRequest = serde_json::from_str(r#"{"floor": 50}"#).unwrap();
        assert_eq!(req.orientation, "south");
        assert_eq!(req.size, 600.0);
        // 200 * 2 * 1.4 = 560
        assert_eq!(req.estimate().monthly_savings, 560);
    }

    #[test]
    fn unknown_orientation_is_neutral() {
        let req = EstimateRequest {
            orientation: "skyward".to_string(),
            ..EstimateRequest::default()
        };
        let east = EstimateRequest {
            orientation: "east".to_string(),
            ..EstimateRequest::default()
        };
        assert_eq!(req.estimate(), east.estimate());
    }

    #[test]
    fn north_units_save_least() {
        let by = |o: &str| {
            EstimateRequest {
                orientation: o.to_string(),
                ..EstimateRequest::default()
            }
            .estimate()
            .monthly_savings
        };
        assert!(by("south") > by("west"));
        assert!(by("west") > by("east"));
        assert!(by("east") > by("north"));
    }
}
