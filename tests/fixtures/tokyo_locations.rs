//! Real Tokyo locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. These are real, routable
//! places so the same fixtures work against a live OSRM instance.

use tour_planner::point::Point;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> Point {
        Point::new(self.lat, self.lng).with_name(self.name)
    }
}

// ============================================================================
// Major Rail Stations (good start/end anchors)
// ============================================================================

pub const STATIONS: &[Location] = &[
    Location::new("Tokyo Station", 35.6812362, 139.7671248),
    Location::new("Shinjuku Station", 35.6896067, 139.7005713),
    Location::new("Ueno Station", 35.7141672, 139.7774091),
    Location::new("Shinagawa Station", 35.6284713, 139.7387787),
];

// ============================================================================
// Sights and Attractions
// ============================================================================

pub const ATTRACTIONS: &[Location] = &[
    Location::new("Senso-ji", 35.7147651, 139.7966553),
    Location::new("Tokyo Skytree", 35.7100627, 139.8107004),
    Location::new("Meiji Shrine", 35.6763976, 139.6993259),
    Location::new("Shibuya Crossing", 35.6594945, 139.7005536),
    Location::new("Tokyo Tower", 35.6585805, 139.7454329),
    Location::new("Ueno Park", 35.7155600, 139.7737286),
    Location::new("Tsukiji Outer Market", 35.6654861, 139.7706668),
    Location::new("Imperial Palace East Gardens", 35.6851763, 139.7527995),
    Location::new("Akihabara Electric Town", 35.6983573, 139.7730717),
    Location::new("Roppongi Hills", 35.6604681, 139.7292005),
    Location::new("Shinjuku Gyoen", 35.6851763, 139.7100002),
    Location::new("Yoyogi Park", 35.6711904, 139.6949147),
    Location::new("Zojo-ji", 35.6574944, 139.7484869),
    Location::new("Hamarikyu Gardens", 35.6597164, 139.7634155),
    Location::new("Kabukiza Theatre", 35.6695839, 139.7676244),
    Location::new("Nezu Shrine", 35.7200905, 139.7610970),
    Location::new("Yanaka Ginza", 35.7276969, 139.7665251),
    Location::new("Kanda Myojin", 35.7019743, 139.7678371),
    Location::new("Koishikawa Korakuen", 35.7055921, 139.7494305),
    Location::new("Tokyo Dome", 35.7056396, 139.7518913),
    Location::new("Ginza Six", 35.6698663, 139.7641873),
    Location::new("Omoide Yokocho", 35.6937627, 139.6994112),
];
