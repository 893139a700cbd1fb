//! Core state types for the N-body simulation.
//!
//! - `Body`  : one point mass with its initial position and velocity
//! - `State` : the joint integration variable, one 3×2N matrix where
//!   columns `[0, n)` are velocities and `[n, 2n)` are positions
//!
//! Column `i` and column `i + n` always belong to the same body.

use nalgebra::{DVector, Matrix3xX, Vector3};

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub m: f64,   // mass (kg)
    pub x: NVec3, // position (m)
    pub v: NVec3, // velocity (m/s)
}

impl Body {
    pub fn new(m: f64, x: NVec3, v: NVec3) -> Self {
        Self { m, x, v }
    }

    /// Body with zero initial velocity
    pub fn at_rest(m: f64, x: NVec3) -> Self {
        Self::new(m, x, NVec3::zeros())
    }
}

/// Velocities followed by positions for all bodies at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    n: usize,
    y: Matrix3xX<f64>,
}

impl State {
    /// Build the state from a body catalog, preserving catalog order.
    pub fn from_bodies(bodies: &[Body]) -> Self {
        let n = bodies.len();
        let columns: Vec<NVec3> = bodies
            .iter()
            .map(|b| b.v)
            .chain(bodies.iter().map(|b| b.x))
            .collect();
        let y = if columns.is_empty() {
            Matrix3xX::zeros(0)
        } else {
            Matrix3xX::from_columns(&columns)
        };
        Self { n, y }
    }

    pub fn n_bodies(&self) -> usize {
        self.n
    }

    pub fn velocity(&self, i: usize) -> NVec3 {
        self.y.column(i).into_owned()
    }

    pub fn position(&self, i: usize) -> NVec3 {
        self.y.column(self.n + i).into_owned()
    }

    /// Copy of the position half as a 3×N matrix
    pub fn positions(&self) -> Matrix3xX<f64> {
        self.y.columns(self.n, self.n).into_owned()
    }

    /// Copy of the velocity half as a 3×N matrix
    pub fn velocities(&self) -> Matrix3xX<f64> {
        self.y.columns(0, self.n).into_owned()
    }

    pub fn as_matrix(&self) -> &Matrix3xX<f64> {
        &self.y
    }

    pub(crate) fn as_matrix_mut(&mut self) -> &mut Matrix3xX<f64> {
        &mut self.y
    }

    /// First body holding a NaN or infinite component, with the offending half.
    pub fn first_non_finite(&self) -> Option<(usize, &'static str)> {
        self.y
            .column_iter()
            .position(|c| c.iter().any(|v| !v.is_finite()))
            .map(|col| {
                if col < self.n {
                    (col, "velocity")
                } else {
                    (col - self.n, "position")
                }
            })
    }
}

/// Gravitational parameter vector, `Gm[i] = G * m[i]`.
#[allow(non_snake_case)]
pub fn gravitational_parameters(bodies: &[Body], G: f64) -> DVector<f64> {
    DVector::from_iterator(bodies.len(), bodies.iter().map(|b| G * b.m))
}
