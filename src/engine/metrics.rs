//! Building-level metrics aggregated from a complete schedule.

use std::fmt;

use serde::Serialize;

use crate::building::TariffSchedule;

use super::credits::round_cents;
use super::types::ScheduleAssignment;

/// Aggregate results of one optimization run.
///
/// Computed post-hoc from the assignment list so reported totals always
/// agree with the schedule. Field names are the public response contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingMetrics {
    /// Apartments submitted to the run.
    pub total_apartments: usize,
    /// Apartments that received a slot.
    pub scheduled_apartments: usize,
    /// Sum of credits over all assignments.
    pub total_credits_distributed: f64,
    /// Mean credit per scheduled apartment (0 if none).
    pub average_savings_per_apartment: f64,
    /// Sum of estimated costs over all assignments.
    pub estimated_total_cost: f64,
    /// Share of scheduled apartments starting off peak, in percent (0 if none).
    pub peak_reduction_percentage: f64,
}

impl BuildingMetrics {
    /// Aggregates `assignments` for a building of `total_apartments`.
    ///
    /// # Arguments
    ///
    /// * `assignments` - Every assignment produced by the run
    /// * `total_apartments` - Number of apartments submitted, scheduled or not
    /// * `tariff` - Tariff used to classify start hours as peak
    pub fn from_assignments(
        assignments: &[ScheduleAssignment],
        total_apartments: usize,
        tariff: &TariffSchedule,
    ) -> Self {
        let scheduled = assignments.len();
        let total_credits: f64 = assignments.iter().map(|a| a.credits_earned).sum();
        let total_cost: f64 = assignments.iter().map(|a| a.estimated_cost).sum();
        let peak_starts = assignments
            .iter()
            .filter(|a| tariff.is_peak(a.start_hour))
            .count();

        let (average, peak_reduction) = if scheduled > 0 {
            let n = scheduled as f64;
            (
                total_credits / n,
                (1.0 - peak_starts as f64 / n) * 100.0,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            total_apartments,
            scheduled_apartments: scheduled,
            total_credits_distributed: round_cents(total_credits),
            average_savings_per_apartment: round_cents(average),
            estimated_total_cost: round_cents(total_cost),
            peak_reduction_percentage: round_cents(peak_reduction),
        }
    }

    /// Apartments left without a slot because the window was full.
    pub fn unscheduled_apartments(&self) -> usize {
        self.total_apartments.saturating_sub(self.scheduled_apartments)
    }
}

impl fmt::Display for BuildingMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Building Metrics ---")?;
        writeln!(
            f,
            "Scheduled apartments:  {} / {}",
            self.scheduled_apartments, self.total_apartments
        )?;
        writeln!(f, "Credits distributed:   {:.2}", self.total_credits_distributed)?;
        writeln!(f, "Average per apartment: {:.2}", self.average_savings_per_apartment)?;
        writeln!(f, "Estimated total cost:  {:.2}", self.estimated_total_cost)?;
        write!(f, "Peak reduction:        {:.1}%", self.peak_reduction_percentage)
    }
}
