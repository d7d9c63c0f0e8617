//! Building-wide evening cooling schedule optimizer.
//!
//! Staggers residents' air-conditioning start times across the evening so
//! the building's load is spread out and peak-tariff hours are avoided
//! where possible.

#[cfg(feature = "api")]
pub mod api;
pub mod building;
pub mod config;
/// Scoring, slot assignment, pricing and aggregation.
pub mod engine;
pub mod estimate;
pub mod io;
pub mod request;
