//! Core trait for pluggable travel-cost estimation.
//!
//! The tour optimizer is indifferent to where pairwise costs come from;
//! anything that can turn an ordered point list into a complete cost matrix
//! can drive it.

use crate::matrix::CostMatrix;
use crate::point::Point;

/// Provides a pairwise distance/time matrix for an ordered list of points.
///
/// Implementations must return a square matrix indexed by the given point
/// order, with an entry for every ordered pair (zero on the diagonal), and
/// must not reorder or drop points. All entries must be finite and
/// non-negative; a provider that cannot satisfy that for a transient reason
/// is expected to recover internally (see the OSRM adapter's fallback)
/// rather than hand back a partial matrix.
pub trait CostMatrixProvider {
    fn matrix_for(&self, points: &[Point]) -> CostMatrix;
}
