//! Geographic stops and their caller-supplied metadata.

use serde::{Deserialize, Serialize};

/// A geographic coordinate plus optional stop metadata.
///
/// Points are produced upstream (geocoding) and treated as immutable here:
/// the planner reorders them but never rewrites their fields. Consumers
/// should rely on field values only, not on reference identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude in degrees, within [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, within [-180, 180].
    pub lng: f64,
    /// Display name of the stop.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text note attached by the caller.
    #[serde(default)]
    pub memo: Option<String>,
    /// Minimum stay duration at this stop, in minutes.
    #[serde(default)]
    pub stay_minutes: Option<u32>,
    /// Desired arrival time, e.g. "14:30". Carried through, not interpreted.
    #[serde(default)]
    pub desired_time: Option<String>,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            name: None,
            memo: None,
            stay_minutes: None,
            desired_time: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn with_stay_minutes(mut self, minutes: u32) -> Self {
        self.stay_minutes = Some(minutes);
        self
    }

    pub fn with_desired_time(mut self, time: impl Into<String>) -> Self {
        self.desired_time = Some(time.into());
        self
    }

    /// Whether both coordinates are finite and within their valid ranges.
    pub fn has_valid_coordinates(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}
