//! In-memory position history produced by the integrators.
//!
//! One snapshot per completed step, each a 3×N matrix of positions in
//! catalog order. Snapshot 0 is the state after the first step.

use nalgebra::Matrix3xX;

use crate::simulation::states::NVec3;

/// Snapshots reserved up front; longer runs grow the buffer as they go
const MAX_RESERVED_SNAPSHOTS: usize = 4096;

#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    n_bodies: usize,
    snapshots: Vec<Matrix3xX<f64>>,
}

impl Trajectory {
    /// Empty trajectory for `n_bodies`, reserving room for at most
    /// `MAX_RESERVED_SNAPSHOTS` of the expected `steps`
    pub fn with_capacity(n_bodies: usize, steps: usize) -> Self {
        Self {
            n_bodies,
            snapshots: Vec::with_capacity(steps.min(MAX_RESERVED_SNAPSHOTS)),
        }
    }

    pub(crate) fn record(&mut self, positions: Matrix3xX<f64>) {
        debug_assert_eq!(positions.ncols(), self.n_bodies);
        self.snapshots.push(positions);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn n_bodies(&self) -> usize {
        self.n_bodies
    }

    pub fn snapshot(&self, step: usize) -> Option<&Matrix3xX<f64>> {
        self.snapshots.get(step)
    }

    pub fn last(&self) -> Option<&Matrix3xX<f64>> {
        self.snapshots.last()
    }

    pub fn position(&self, step: usize, body: usize) -> Option<NVec3> {
        self.snapshots
            .get(step)
            .filter(|_| body < self.n_bodies)
            .map(|s| s.column(body).into_owned())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Matrix3xX<f64>> {
        self.snapshots.iter()
    }

    /// Every recorded position of one body, in step order (what a plotter draws)
    pub fn body_track(&self, body: usize) -> Vec<NVec3> {
        if body >= self.n_bodies {
            return Vec::new();
        }
        self.snapshots
            .iter()
            .map(|s| s.column(body).into_owned())
            .collect()
    }

    /// `[steps][N][3]` layout for consumers that want plain arrays
    pub fn to_nested(&self) -> Vec<Vec<[f64; 3]>> {
        self.snapshots
            .iter()
            .map(|s| s.column_iter().map(|c| [c[0], c[1], c[2]]).collect())
            .collect()
    }
}
