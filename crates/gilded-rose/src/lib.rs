//! Per-day inventory valuation engine for the Gilded Rose.
//!
//! [`inventory::advance_day`] moves every item forward by exactly one day. The ambient modules
//! (`config`, `telemetry`, `error`) back the command-line harness and are not consulted by the
//! rules themselves.

pub mod config;
pub mod error;
pub mod inventory;
pub mod telemetry;

pub use inventory::{advance_day, advance_day_in_place, Item};
