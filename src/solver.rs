//! Two-phase tour solver: greedy construction followed by 2-opt refinement.
//!
//! The route always starts at a fixed start point and finishes at a fixed
//! end point; the solver only reorders the waypoints in between. Phase one
//! builds an initial visiting order by repeatedly walking to the nearest
//! unvisited waypoint. Phase two refines that order with bounded 2-opt:
//! reverse a segment whenever the reversal strictly shortens the route,
//! until no reversal helps or the sweep budget runs out.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::matrix::CostMatrix;
use crate::point::Point;
use crate::traits::CostMatrixProvider;

/// Hard ceiling on refinement sweeps regardless of input size.
const MAX_SWEEPS: usize = 1000;

/// Sweep budget granted per waypoint.
const SWEEPS_PER_WAYPOINT: usize = 50;

#[derive(Debug, Error, PartialEq)]
pub enum SolveError {
    /// A point has a non-finite or out-of-range coordinate. The index is
    /// the point's position in the combined sequence: 0 is the start,
    /// the last index is the end, everything between is a waypoint.
    #[error("point {index} has invalid coordinates ({lat}, {lng})")]
    InvalidCoordinate { index: usize, lat: f64, lng: f64 },

    /// The provider returned a matrix whose size does not match the
    /// number of points it was given.
    #[error("cost matrix is {got}x{got}, expected {expected}x{expected}")]
    MatrixSizeMismatch { got: usize, expected: usize },

    /// The provider returned a matrix containing a non-finite or
    /// negative entry.
    #[error("cost matrix entry ({from}, {to}) is not a finite non-negative number")]
    InvalidMatrixEntry { from: usize, to: usize },
}

/// A single hop of the planned route.
///
/// `from` and `to` index the combined input sequence (0 is the start,
/// the last index is the end). Distance and time are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: usize,
    pub to: usize,
    pub distance_km: f64,
    pub time_minutes: f64,
}

/// The planned tour.
///
/// `route` is the visiting order as indices into the combined input
/// sequence, always beginning with 0 (start) and ending with the end
/// point's index. `stops` holds the same order as full points, so any
/// caller-supplied metadata travels with the plan. Totals are rounded
/// for presentation (distance to one decimal, time to whole minutes);
/// the unrounded values live on the individual legs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourPlan {
    pub route: Vec<usize>,
    pub stops: Vec<Point>,
    pub legs: Vec<Leg>,
    pub total_distance_km: f64,
    pub total_time_minutes: f64,
}

impl TourPlan {
    fn empty() -> Self {
        Self {
            route: Vec::new(),
            stops: Vec::new(),
            legs: Vec::new(),
            total_distance_km: 0.0,
            total_time_minutes: 0.0,
        }
    }
}

/// Plan a tour from `start` through every waypoint to `end`.
///
/// All coordinates are validated before the provider is consulted, and
/// the provider's matrix is validated before any ordering work happens.
/// With no waypoints the result is an empty plan and the provider is
/// never called.
pub fn solve<P>(
    start: &Point,
    waypoints: &[Point],
    end: &Point,
    provider: &P,
) -> Result<TourPlan, SolveError>
where
    P: CostMatrixProvider,
{
    let mut points = Vec::with_capacity(waypoints.len() + 2);
    points.push(start.clone());
    points.extend_from_slice(waypoints);
    points.push(end.clone());

    validate_points(&points)?;

    if waypoints.is_empty() {
        debug!("No waypoints to order; returning an empty plan");
        return Ok(TourPlan::empty());
    }

    debug!("Planning a tour over {} waypoints", waypoints.len());

    let matrix = provider.matrix_for(&points);
    validate_matrix(&matrix, points.len())?;

    let mut tour = nearest_neighbor_tour(&matrix);
    let refined = two_opt(&matrix, &mut tour);
    debug!("Refinement settled at {:.3} km", refined);

    Ok(assemble_plan(&points, &matrix, &tour))
}

fn validate_points(points: &[Point]) -> Result<(), SolveError> {
    for (index, point) in points.iter().enumerate() {
        if !point.has_valid_coordinates() {
            return Err(SolveError::InvalidCoordinate {
                index,
                lat: point.lat,
                lng: point.lng,
            });
        }
    }
    Ok(())
}

fn validate_matrix(matrix: &CostMatrix, expected: usize) -> Result<(), SolveError> {
    if matrix.size() != expected {
        return Err(SolveError::MatrixSizeMismatch {
            got: matrix.size(),
            expected,
        });
    }
    if let Some((from, to)) = matrix.first_invalid_entry() {
        return Err(SolveError::InvalidMatrixEntry { from, to });
    }
    Ok(())
}

/// Build an initial tour by always walking to the nearest unvisited
/// waypoint, starting from the start point.
///
/// The matrix covers the combined sequence, so waypoints occupy indices
/// `1..size - 1`. Ties go to the lower index, which makes construction
/// deterministic for equal inputs.
pub fn nearest_neighbor_tour(matrix: &CostMatrix) -> Vec<usize> {
    let waypoint_count = matrix.size().saturating_sub(2);
    let mut remaining: Vec<usize> = (1..=waypoint_count).collect();
    let mut tour = Vec::with_capacity(waypoint_count);
    let mut current = 0;

    while !remaining.is_empty() {
        let mut best_position = 0;
        let mut best_distance = matrix.distance(current, remaining[0]);
        for (position, &candidate) in remaining.iter().enumerate().skip(1) {
            let distance = matrix.distance(current, candidate);
            if distance < best_distance {
                best_distance = distance;
                best_position = position;
            }
        }
        current = remaining.remove(best_position);
        tour.push(current);
    }

    tour
}

/// Refine a tour in place with first-improvement 2-opt.
///
/// Scans segment reversals in lexicographic `(i, j)` order and applies
/// the first one that strictly shortens the route, then rescans from the
/// top. Stops when a full scan finds no improvement or when the sweep
/// budget `min(1000, 50 * waypoints)` is spent. Acceptance considers
/// distance only. Returns the final route distance.
pub fn two_opt(matrix: &CostMatrix, tour: &mut [usize]) -> f64 {
    let mut best = bracketed_distance(matrix, tour);
    if tour.len() < 2 {
        return best;
    }

    let max_sweeps = MAX_SWEEPS.min(SWEEPS_PER_WAYPOINT * tour.len());
    for _ in 0..max_sweeps {
        match first_improving_reversal(matrix, tour, best) {
            Some((i, j, improved)) => {
                tour[i..=j].reverse();
                best = improved;
            }
            None => break,
        }
    }

    best
}

/// Total distance of the route formed by the start point, the tour in
/// order, and the end point.
///
/// # Panics
///
/// Panics if the matrix is empty or any tour entry is out of bounds; the
/// matrix must cover at least the two bracketing points.
pub fn bracketed_distance(matrix: &CostMatrix, tour: &[usize]) -> f64 {
    let end_index = matrix.size() - 1;
    let mut previous = 0;
    let mut total = 0.0;
    for &waypoint in tour {
        total += matrix.distance(previous, waypoint);
        previous = waypoint;
    }
    total + matrix.distance(previous, end_index)
}

fn first_improving_reversal(
    matrix: &CostMatrix,
    tour: &[usize],
    current: f64,
) -> Option<(usize, usize, f64)> {
    for i in 0..tour.len() - 1 {
        for j in i + 1..tour.len() {
            let candidate = reversed_distance(matrix, tour, i, j);
            if candidate < current {
                return Some((i, j, candidate));
            }
        }
    }
    None
}

/// Route distance with `tour[i..=j]` reversed, without materializing the
/// reversed tour. Adds the same leg terms in the same order as
/// [`bracketed_distance`] would on the rebuilt tour, so accepted moves
/// carry the exact distance a recomputation would produce.
fn reversed_distance(matrix: &CostMatrix, tour: &[usize], i: usize, j: usize) -> f64 {
    let end_index = matrix.size() - 1;
    let at = |position: usize| {
        if position >= i && position <= j {
            tour[j - (position - i)]
        } else {
            tour[position]
        }
    };

    let mut previous = 0;
    let mut total = 0.0;
    for position in 0..tour.len() {
        let waypoint = at(position);
        total += matrix.distance(previous, waypoint);
        previous = waypoint;
    }
    total + matrix.distance(previous, end_index)
}

fn assemble_plan(points: &[Point], matrix: &CostMatrix, tour: &[usize]) -> TourPlan {
    let end_index = matrix.size() - 1;

    let mut route = Vec::with_capacity(tour.len() + 2);
    route.push(0);
    route.extend_from_slice(tour);
    route.push(end_index);

    let mut legs = Vec::with_capacity(route.len() - 1);
    let mut total_distance = 0.0;
    let mut total_time = 0.0;
    for pair in route.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let distance_km = matrix.distance(from, to);
        let time_minutes = matrix.time(from, to);
        total_distance += distance_km;
        total_time += time_minutes;
        legs.push(Leg {
            from,
            to,
            distance_km,
            time_minutes,
        });
    }

    let stops = route.iter().map(|&index| points[index].clone()).collect();

    TourPlan {
        route,
        stops,
        legs,
        total_distance_km: round_to_tenths(total_distance),
        total_time_minutes: total_time.round(),
    }
}

fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
