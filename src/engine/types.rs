//! Engine constants and output records.

use std::fmt;

use serde::Serialize;

/// First start hour of the evening optimization window (5pm).
pub const WINDOW_START_HOUR: u32 = 17;
/// Last start hour of the evening optimization window (11pm, inclusive).
pub const WINDOW_END_HOUR: u32 = 23;
/// Length of every cooling run in hours.
pub const COOLING_DURATION_HOURS: u32 = 2;
/// Furthest an apartment is moved from its preference before the full-window fallback.
pub const MAX_SHIFT_HOURS: u32 = 3;

/// Inclusive range of start hours the scheduler may hand out.
///
/// # Examples
///
/// ```
/// use cooling_sched::engine::types::CoolingWindow;
///
/// let window = CoolingWindow::evening();
/// assert_eq!(window.len(), 7);
/// assert!(window.contains(23));
/// assert!(!window.contains(16));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoolingWindow {
    /// First start hour (inclusive).
    pub start: u32,
    /// Last start hour (inclusive).
    pub end: u32,
}

impl CoolingWindow {
    /// Creates a window spanning `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn new(start: u32, end: u32) -> Self {
        assert!(start <= end, "window start must be <= end");
        Self { start, end }
    }

    /// The fixed 17:00–23:00 evening window.
    pub fn evening() -> Self {
        Self::new(WINDOW_START_HOUR, WINDOW_END_HOUR)
    }

    /// Number of start hours in the window.
    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Always `false`; a window holds at least one hour.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, hour: u32) -> bool {
        (self.start..=self.end).contains(&hour)
    }

    /// Start hours in ascending order.
    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

impl Default for CoolingWindow {
    fn default() -> Self {
        Self::evening()
    }
}

/// Cooling slot handed to one apartment.
///
/// Field names are the public response contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleAssignment {
    pub apartment_id: String,
    /// Start hour (24h clock).
    pub start_hour: u32,
    /// `start_hour + COOLING_DURATION_HOURS`.
    pub end_hour: u32,
    /// Thermal score truncated to an integer.
    pub priority: u32,
    /// Incentive credited to the apartment (>= 0, 2 decimals).
    pub credits_earned: f64,
    /// Estimated energy cost of the run (2 decimals).
    pub estimated_cost: f64,
}

impl fmt::Display for ScheduleAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} {:02}:00-{:02}:00 | priority={:>3} | credits={:>7.2} | cost={:>7.2}",
            self.apartment_id,
            self.start_hour,
            self.end_hour,
            self.priority,
            self.credits_earned,
            self.estimated_cost,
        )
    }
}
