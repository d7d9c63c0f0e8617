//! Scheduling engine: thermal scoring, slot assignment, credits and metrics.

/// Credit and energy-cost estimation.
pub mod credits;
pub mod metrics;
/// End-to-end optimization pipeline.
pub mod optimizer;
pub mod slots;
/// Thermal disadvantage scoring.
pub mod thermal;
pub mod types;

pub use credits::CreditCostEstimator;
pub use metrics::BuildingMetrics;
pub use optimizer::{CoolingOptimizer, OptimizationResult};
pub use slots::{HourlyLoad, SlotAssigner, SlotDecision, SlotTier};
pub use thermal::ThermalScorer;
pub use types::{
    COOLING_DURATION_HOURS, CoolingWindow, MAX_SHIFT_HOURS, ScheduleAssignment, WINDOW_END_HOUR,
    WINDOW_START_HOUR,
};
