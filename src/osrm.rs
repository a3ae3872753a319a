//! OSRM HTTP adapter for cost matrices.
//!
//! Talks to an OSRM `table` service and converts its distance/duration
//! tables into a [`CostMatrix`]. Any failure (network, HTTP status,
//! malformed body) falls back to haversine estimates so that callers
//! always get a usable matrix.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::haversine::HaversineEstimator;
use crate::matrix::CostMatrix;
use crate::point::Point;
use crate::traits::CostMatrixProvider;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.project-osrm.org".to_string(),
            profile: "walking".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
    fallback: HaversineEstimator,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            client,
            fallback: HaversineEstimator::default(),
        })
    }

    fn fetch_table(&self, points: &[Point]) -> Result<OsrmTableResponse, reqwest::Error> {
        let coords = points
            .iter()
            .map(|p| format!("{:.6},{:.6}", p.lng, p.lat))
            .collect::<Vec<_>>()
            .join(";");

        let url = format!(
            "{}/table/v1/{}/{}?annotations=distance,duration",
            self.config.base_url, self.config.profile, coords
        );

        debug!("Requesting OSRM table for {} points", points.len());

        self.client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmTableResponse>())
    }
}

impl CostMatrixProvider for OsrmClient {
    fn matrix_for(&self, points: &[Point]) -> CostMatrix {
        if points.is_empty() {
            return CostMatrix::new(0);
        }

        match self
            .fetch_table(points)
            .map(|body| matrix_from_response(body, points.len()))
        {
            Ok(Some(matrix)) => matrix,
            Ok(None) => {
                warn!("OSRM table response was malformed. Falling back to haversine estimates");
                self.fallback.matrix_for(points)
            }
            Err(err) => {
                warn!(
                    "OSRM table request failed: {}. Falling back to haversine estimates",
                    err
                );
                self.fallback.matrix_for(points)
            }
        }
    }
}

/// Convert an OSRM table body into a cost matrix.
///
/// Returns `None` when the response shape does not match the request
/// (missing annotation, wrong row or column count) or when any entry is
/// non-finite or negative; the caller then falls back to estimates.
fn matrix_from_response(body: OsrmTableResponse, n: usize) -> Option<CostMatrix> {
    let distances = body.distances?;
    let durations = body.durations?;

    if distances.len() != n || durations.len() != n {
        return None;
    }

    let mut matrix = CostMatrix::new(n);
    for i in 0..n {
        let distance_row = &distances[i];
        let duration_row = &durations[i];
        if distance_row.len() != n || duration_row.len() != n {
            return None;
        }
        for j in 0..n {
            // OSRM reports meters and seconds; the solver works in km and minutes.
            matrix.set(i, j, distance_row[j] / 1000.0, duration_row[j] / 60.0);
        }
    }

    if matrix.first_invalid_entry().is_some() {
        return None;
    }

    Some(matrix)
}

#[derive(Debug, Deserialize)]
struct OsrmTableResponse {
    distances: Option<Vec<Vec<f64>>>,
    durations: Option<Vec<Vec<f64>>>,
}
