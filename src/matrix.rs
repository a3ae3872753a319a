//! Dense pairwise cost matrix.

/// A square (from, to) → {distance, time} table stored row-major.
///
/// Row/column order is the order of the points the matrix was computed for;
/// the planner relies on index 0 being the start and the last index being
/// the end. Entries are directional (symmetry is not assumed) and the
/// diagonal is zero. Distances are kilometers, times are minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    distances: Vec<f64>,
    times: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a matrix of the given size with all entries zero.
    pub fn new(size: usize) -> Self {
        Self {
            distances: vec![0.0; size * size],
            times: vec![0.0; size * size],
            size,
        }
    }

    /// Distance in kilometers from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances[from * self.size + to]
    }

    /// Travel time in minutes from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn time(&self, from: usize, to: usize) -> f64 {
        self.times[from * self.size + to]
    }

    /// Sets both cost components for the ordered pair (`from`, `to`).
    pub fn set(&mut self, from: usize, to: usize, distance_km: f64, time_min: f64) {
        self.distances[from * self.size + to] = distance_km;
        self.times[from * self.size + to] = time_min;
    }

    /// Number of points covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// First (from, to) pair whose distance or time is non-finite or
    /// negative, if any. A `None` result means the matrix is safe to search.
    pub fn first_invalid_entry(&self) -> Option<(usize, usize)> {
        for from in 0..self.size {
            for to in 0..self.size {
                let km = self.distance(from, to);
                let minutes = self.time(from, to);
                if !km.is_finite() || km < 0.0 || !minutes.is_finite() || minutes < 0.0 {
                    return Some((from, to));
                }
            }
        }
        None
    }
}
