//! Schedule invariants checked over deterministic grids of buildings and tariffs.

mod common;

use std::collections::HashMap;

use cooling_sched::building::{Apartment, SyntheticBuilding, TariffSchedule, WeatherSnapshot};
use cooling_sched::engine::{
    COOLING_DURATION_HOURS, CoolingOptimizer, OptimizationResult, WINDOW_END_HOUR,
    WINDOW_START_HOUR,
};

fn buildings() -> Vec<Vec<Apartment>> {
    let mut all = vec![
        common::sample_building(),
        common::south_stack(),
        common::mixed_building(),
    ];
    for (floors, units, seed) in [(1, 1, 0), (3, 2, 1), (12, 4, 2), (45, 4, 42), (60, 8, 9)] {
        all.push(SyntheticBuilding::new(floors, units, seed).generate());
    }
    all
}

fn tariffs() -> Vec<TariffSchedule> {
    vec![
        common::all_peak_tariff(),
        common::narrow_peak_tariff(),
        TariffSchedule::new(Vec::new(), 2.0, 1.0),
        TariffSchedule::new([17, 18, 22, 23], 3.1, 1.2),
    ]
}

fn weathers() -> Vec<WeatherSnapshot> {
    vec![
        common::mild_weather(),
        WeatherSnapshot::new(27.0, 60.0),
        WeatherSnapshot::new(34.0, 92.0),
    ]
}

fn for_each_run(mut check: impl FnMut(&[Apartment], &TariffSchedule, &OptimizationResult)) {
    let optimizer = CoolingOptimizer::default();
    for apartments in buildings() {
        for tariff in tariffs() {
            for weather in weathers() {
                let result = optimizer.optimize(&apartments, &weather, &tariff);
                check(&apartments, &tariff, &result);
            }
        }
    }
}

#[test]
fn hourly_capacity_is_respected() {
    for_each_run(|apartments, _, result| {
        let cap = apartments.len() / 7 + 1;
        let mut per_hour: HashMap<u32, usize> = HashMap::new();
        for a in &result.assignments {
            *per_hour.entry(a.start_hour).or_default() += 1;
        }
        for (hour, count) in per_hour {
            assert!(count <= cap, "hour {hour} has {count} > {cap}");
        }
    });
}

#[test]
fn assignments_fit_window_and_duration() {
    for_each_run(|_, _, result| {
        for a in &result.assignments {
            assert!((WINDOW_START_HOUR..=WINDOW_END_HOUR).contains(&a.start_hour));
            assert_eq!(a.end_hour, a.start_hour + COOLING_DURATION_HOURS);
            assert!(a.credits_earned >= 0.0);
            assert!(a.estimated_cost >= 0.0);
        }
    });
}

#[test]
fn each_apartment_appears_at_most_once() {
    for_each_run(|apartments, _, result| {
        let mut seen = std::collections::HashSet::new();
        for a in &result.assignments {
            assert!(seen.insert(a.apartment_id.as_str()), "{} twice", a.apartment_id);
        }
        assert_eq!(result.assignments.len() + result.unscheduled.len(), apartments.len());
        assert_eq!(result.metrics.total_apartments, apartments.len());
    });
}

#[test]
fn output_is_in_priority_order() {
    for_each_run(|_, _, result| {
        for pair in result.assignments.windows(2) {
            assert!(pair[0].priority >= pair[1].priority);
        }
    });
}

#[test]
fn non_preferred_slots_avoid_peak_when_possible() {
    // A peak hour other than the preferred one is taken only when every
    // off-peak hour of the window is already full.
    for_each_run(|apartments, tariff, result| {
        let cap = apartments.len() / 7 + 1;
        let preferred: HashMap<&str, u32> = apartments
            .iter()
            .map(|a| (a.id.as_str(), a.preferred_start_hour))
            .collect();
        let mut load: HashMap<u32, usize> = HashMap::new();
        for a in &result.assignments {
            let pref = preferred[a.apartment_id.as_str()];
            if a.start_hour != pref && tariff.is_peak(a.start_hour) {
                let free_off_peak = (WINDOW_START_HOUR..=WINDOW_END_HOUR)
                    .filter(|h| !tariff.is_peak(*h))
                    .any(|h| load.get(&h).copied().unwrap_or(0) < cap);
                assert!(!free_off_peak, "{} sent to peak hour {}", a.apartment_id, a.start_hour);
            }
            *load.entry(a.start_hour).or_default() += 1;
        }
    });
}

#[test]
fn repeated_runs_are_identical() {
    let optimizer = CoolingOptimizer::default();
    let apartments = common::mixed_building();
    let weather = common::mild_weather();
    let tariff = common::narrow_peak_tariff();
    let first = optimizer.optimize(&apartments, &weather, &tariff);
    let second = optimizer.optimize(&apartments, &weather, &tariff);
    assert_eq!(first, second);
}

#[test]
fn metrics_match_assignments() {
    for_each_run(|_, tariff, result| {
        let m = &result.metrics;
        assert_eq!(m.scheduled_apartments, result.assignments.len());
        let credits: f64 = result.assignments.iter().map(|a| a.credits_earned).sum();
        assert!((m.total_credits_distributed - credits).abs() < 0.01);
        let peak = result
            .assignments
            .iter()
            .filter(|a| tariff.is_peak(a.start_hour))
            .count();
        if m.scheduled_apartments > 0 {
            let expected = (1.0 - peak as f64 / m.scheduled_apartments as f64) * 100.0;
            assert!((m.peak_reduction_percentage - expected).abs() < 0.01);
        }
        assert!((0.0..=100.0).contains(&m.peak_reduction_percentage));
    });
}
