//! File export for computed schedules.

pub mod export;
