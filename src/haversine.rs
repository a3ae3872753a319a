//! Haversine cost matrix provider (fallback when OSRM is unavailable).
//!
//! Uses great-circle distance to estimate travel distance and time.
//! Less accurate than a routing service (ignores the actual network) but
//! offline, deterministic, and always available.

use rayon::prelude::*;

use crate::matrix::CostMatrix;
use crate::point::Point;
use crate::traits::CostMatrixProvider;

/// Average travel speed assumption for time estimation (walking pace
/// between transit stops).
const DEFAULT_SPEED_KMH: f64 = 4.5;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine-based cost matrix provider.
///
/// Estimates travel time from straight-line distance and an assumed speed.
#[derive(Debug, Clone)]
pub struct HaversineEstimator {
    /// Assumed average travel speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineEstimator {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl HaversineEstimator {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Great-circle distance between two points in kilometers.
    pub fn haversine_km(from: &Point, to: &Point) -> f64 {
        let lat1_rad = from.lat.to_radians();
        let lat2_rad = to.lat.to_radians();
        let delta_lat = (to.lat - from.lat).to_radians();
        let delta_lng = (to.lng - from.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }

    /// Convert distance in km to travel time in minutes.
    fn km_to_minutes(&self, km: f64) -> f64 {
        km / self.speed_kmh * 60.0
    }
}

impl CostMatrixProvider for HaversineEstimator {
    fn matrix_for(&self, points: &[Point]) -> CostMatrix {
        let n = points.len();

        // Cells are independent, so fill them row-major in parallel.
        let cells: Vec<(f64, f64)> = (0..n * n)
            .into_par_iter()
            .map(|cell| {
                let (i, j) = (cell / n, cell % n);
                if i == j {
                    (0.0, 0.0)
                } else {
                    let km = Self::haversine_km(&points[i], &points[j]);
                    (km, self.km_to_minutes(km))
                }
            })
            .collect();

        let mut matrix = CostMatrix::new(n);
        for (cell, (km, minutes)) in cells.into_iter().enumerate() {
            matrix.set(cell / n, cell % n, km, minutes);
        }

        matrix
    }
}
