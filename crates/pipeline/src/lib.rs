//! Window scheduling for the telemetry pipeline.
//!
//! Wires a stream of sensor [`Reading`]s into two fixed-capacity
//! [`StatisticsSeries`] (temperature and humidity), rotates the display
//! through its pages while a window fills, and publishes a
//! [`WindowSummary`] each time a window closes.
//!
//! [`Reading`]: telemetry_core::Reading
//! [`StatisticsSeries`]: telemetry_series::StatisticsSeries

pub mod monitor;
pub mod runner;

pub use monitor::{Drops, Monitor, Range, WindowSummary, WINDOW_CAPACITY};
pub use runner::{Pipeline, RunOptions};
