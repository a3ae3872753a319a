//! tour-planner core
//!
//! Plans multi-stop tours between a fixed start and end point: a cost
//! matrix provider supplies pairwise travel estimates (straight-line or
//! OSRM-backed), and the solver orders the waypoints in between.

pub mod traits;
pub mod point;
pub mod matrix;
pub mod solver;
pub mod osrm;
pub mod haversine;
pub mod format;
