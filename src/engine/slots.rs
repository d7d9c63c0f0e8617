//! Greedy, priority-ordered assignment of cooling start hours.
//!
//! Apartments are visited in descending thermal score (input order on ties).
//! Each one takes the first hour produced by an ordered search:
//!
//! 1. [`SlotTier::Preferred`]: its stated hour, if inside the window with capacity left.
//! 2. [`SlotTier::NearbyOffPeak`]: for offsets `1..=MAX_SHIFT_HOURS`, try
//!    `preferred - offset` then `preferred + offset`, accepting the first
//!    off-peak hour with capacity. Peak hours are never taken here.
//! 3. [`SlotTier::Fallback`]: any hour with capacity, off-peak before peak,
//!    then closest to the preference, then earliest.
//!
//! If every hour is full the apartment is left unscheduled.

use std::fmt;

use crate::building::{Apartment, TariffSchedule};

use super::types::{CoolingWindow, MAX_SHIFT_HOURS};

/// Which step of the search produced a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTier {
    Preferred,
    NearbyOffPeak,
    Fallback,
}

impl fmt::Display for SlotTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SlotTier::Preferred => "preferred",
            SlotTier::NearbyOffPeak => "nearby-off-peak",
            SlotTier::Fallback => "fallback",
        })
    }
}

/// Per-run count of apartments starting in each hour of the window.
///
/// Allocated fresh for every optimization call; never shared between runs.
#[derive(Debug, Clone)]
pub struct HourlyLoad {
    window: CoolingWindow,
    counts: Vec<usize>,
    max_per_hour: usize,
}

impl HourlyLoad {
    /// Empty load for `apartment_count` apartments spread over `window`.
    ///
    /// Every hour admits `apartment_count / window.len() + 1` starts.
    pub fn new(window: CoolingWindow, apartment_count: usize) -> Self {
        Self {
            window,
            counts: vec![0; window.len()],
            max_per_hour: apartment_count / window.len() + 1,
        }
    }

    /// Starts admitted per hour.
    pub fn max_per_hour(&self) -> usize {
        self.max_per_hour
    }

    /// Starts already booked at `hour` (0 outside the window).
    pub fn count(&self, hour: u32) -> usize {
        self.index(hour).map_or(0, |i| self.counts[i])
    }

    /// `true` if `hour` lies in the window and is below capacity.
    pub fn has_capacity(&self, hour: u32) -> bool {
        self.index(hour)
            .is_some_and(|i| self.counts[i] < self.max_per_hour)
    }

    /// Books one start at `hour`. Hours outside the window are ignored.
    pub fn book(&mut self, hour: u32) {
        if let Some(i) = self.index(hour) {
            self.counts[i] += 1;
        }
    }

    fn index(&self, hour: u32) -> Option<usize> {
        self.window
            .contains(hour)
            .then(|| (hour - self.window.start) as usize)
    }
}

/// Outcome for one apartment, in priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotDecision {
    /// Index into the apartment slice passed to [`SlotAssigner::assign`].
    pub apartment: usize,
    /// Assigned start hour and the tier that produced it, if any.
    pub slot: Option<(u32, SlotTier)>,
}

/// Assigns start hours under a shared per-hour capacity ceiling.
#[derive(Debug, Clone, Copy)]
pub struct SlotAssigner {
    pub window: CoolingWindow,
    pub max_shift_hours: u32,
}

impl Default for SlotAssigner {
    fn default() -> Self {
        Self {
            window: CoolingWindow::evening(),
            max_shift_hours: MAX_SHIFT_HOURS,
        }
    }
}

impl SlotAssigner {
    /// Assigns every apartment in descending `scores` order.
    ///
    /// `scores[i]` belongs to `apartments[i]`. Returns one decision per
    /// apartment, highest priority first.
    ///
    /// # Panics
    ///
    /// Panics if `scores` and `apartments` differ in length.
    pub fn assign(
        &self,
        apartments: &[Apartment],
        scores: &[f64],
        tariff: &TariffSchedule,
    ) -> Vec<SlotDecision> {
        assert_eq!(apartments.len(), scores.len(), "one score per apartment");

        let mut order: Vec<usize> = (0..apartments.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let mut load = HourlyLoad::new(self.window, apartments.len());
        order
            .into_iter()
            .map(|i| {
                let slot = self.find_slot(apartments[i].preferred_start_hour, &load, tariff);
                if let Some((hour, _)) = slot {
                    load.book(hour);
                }
                SlotDecision { apartment: i, slot }
            })
            .collect()
    }

    /// Runs the three-tier search for a single apartment against `load`.
    pub fn find_slot(
        &self,
        preferred: u32,
        load: &HourlyLoad,
        tariff: &TariffSchedule,
    ) -> Option<(u32, SlotTier)> {
        self.preferred_slot(preferred, load)
            .map(|h| (h, SlotTier::Preferred))
            .or_else(|| {
                self.nearby_off_peak_slot(preferred, load, tariff)
                    .map(|h| (h, SlotTier::NearbyOffPeak))
            })
            .or_else(|| {
                self.fallback_slot(preferred, load, tariff)
                    .map(|h| (h, SlotTier::Fallback))
            })
    }

    fn preferred_slot(&self, preferred: u32, load: &HourlyLoad) -> Option<u32> {
        load.has_capacity(preferred).then_some(preferred)
    }

    fn nearby_off_peak_slot(
        &self,
        preferred: u32,
        load: &HourlyLoad,
        tariff: &TariffSchedule,
    ) -> Option<u32> {
        (1..=self.max_shift_hours)
            .flat_map(|offset| [preferred.checked_sub(offset), preferred.checked_add(offset)])
            .flatten()
            .find(|&h| load.has_capacity(h) && !tariff.is_peak(h))
    }

    fn fallback_slot(
        &self,
        preferred: u32,
        load: &HourlyLoad,
        tariff: &TariffSchedule,
    ) -> Option<u32> {
        self.window
            .hours()
            .filter(|&h| load.has_capacity(h))
            .min_by_key(|&h| (tariff.is_peak(h), h.abs_diff(preferred)))
    }
}
