//! Single-pass scheduling pipeline: score, assign, price, aggregate.

use tracing::{debug, info, warn};

use crate::building::{Apartment, TariffSchedule, WeatherSnapshot};

use super::credits::{CreditCostEstimator, round_cents};
use super::metrics::BuildingMetrics;
use super::slots::SlotAssigner;
use super::thermal::ThermalScorer;
use super::types::ScheduleAssignment;

/// Result of one optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// Assignments in priority order (highest thermal score first).
    pub assignments: Vec<ScheduleAssignment>,
    /// Ids of apartments left without a slot.
    pub unscheduled: Vec<String>,
    /// Building-level aggregates.
    pub metrics: BuildingMetrics,
}

/// Computes a building-wide evening cooling schedule.
///
/// Stateless: every call allocates its own capacity counters, so one
/// optimizer can serve any number of concurrent callers.
///
/// # Examples
///
/// ```
/// use cooling_sched::building::{Apartment, Orientation, TariffSchedule, WeatherSnapshot};
/// use cooling_sched::engine::CoolingOptimizer;
///
/// let apartments = vec![
///     Apartment::new("A101", 10, Orientation::South, 600.0, 3),
///     Apartment::new("A201", 20, Orientation::North, 500.0, 2),
/// ];
/// let weather = WeatherSnapshot::new(30.0, 75.0);
/// let tariff = TariffSchedule::new([19, 20, 21, 22], 2.9, 1.5);
///
/// let result = CoolingOptimizer::default().optimize(&apartments, &weather, &tariff);
/// assert_eq!(result.metrics.scheduled_apartments, 2);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CoolingOptimizer {
    pub scorer: ThermalScorer,
    pub assigner: SlotAssigner,
    pub estimator: CreditCostEstimator,
}

impl CoolingOptimizer {
    /// Runs the full pipeline over `apartments`.
    pub fn optimize(
        &self,
        apartments: &[Apartment],
        weather: &WeatherSnapshot,
        tariff: &TariffSchedule,
    ) -> OptimizationResult {
        let scores: Vec<f64> = apartments.iter().map(|a| self.scorer.score(a)).collect();
        let decisions = self.assigner.assign(apartments, &scores, tariff);

        let mut assignments = Vec::with_capacity(apartments.len());
        let mut unscheduled = Vec::new();

        for decision in decisions {
            let apartment = &apartments[decision.apartment];
            let score = scores[decision.apartment];

            let Some((hour, tier)) = decision.slot else {
                warn!(
                    apartment = %apartment.id,
                    score,
                    "no capacity left in window; apartment unscheduled"
                );
                unscheduled.push(apartment.id.clone());
                continue;
            };

            let is_peak = tariff.is_peak(hour);
            let credits = self
                .estimator
                .credits(hour, apartment.preferred_start_hour, score, is_peak);
            let cost = self
                .estimator
                .estimated_cost(apartment, tariff.rate_at(hour), weather);

            debug!(
                apartment = %apartment.id,
                score,
                preferred = apartment.preferred_start_hour,
                hour,
                %tier,
                is_peak,
                "assigned cooling slot"
            );

            assignments.push(ScheduleAssignment {
                apartment_id: apartment.id.clone(),
                start_hour: hour,
                end_hour: hour + self.estimator.duration_hours,
                priority: score as u32,
                credits_earned: round_cents(credits),
                estimated_cost: round_cents(cost),
            });
        }

        let metrics = BuildingMetrics::from_assignments(&assignments, apartments.len(), tariff);
        info!(
            total = metrics.total_apartments,
            scheduled = metrics.scheduled_apartments,
            credits = metrics.total_credits_distributed,
            peak_reduction_pct = metrics.peak_reduction_percentage,
            "cooling schedule optimized"
        );

        OptimizationResult {
            assignments,
            unscheduled,
            metrics,
        }
    }
}
