//! Test fixtures for tour-planner.
//!
//! Provides realistic test data: real Tokyo locations (from OpenStreetMap)
//! for multi-stop tour scenarios.

pub mod tokyo_locations;

pub use tokyo_locations::*;
