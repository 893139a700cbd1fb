//! Gravitational acceleration kernels
//!
//! Defines the `Acceleration` trait used by the integrators and the
//! softened Newtonian gravity that implements it, either through the
//! (N, 3, N) interaction tensor or through a direct pairwise sum.
//!
//! Both variants use the same softened distance:
//!
//! ```text
//! r_ij = x_j - x_i
//! d2   = |r_ij|^2 + softening^2
//! k_ij = d2^(-3/2)
//! a_i  = sum_{j != i} Gm_j * k_ij * r_ij
//! ```

use nalgebra::{DVector, Matrix3xX};
use rayon::prelude::*;

use crate::configuration::config::KernelConfig;
use crate::simulation::states::{gravitational_parameters, Body};

/// Source of per-body accelerations for a set of positions (3×N in, 3×N out)
pub trait Acceleration {
    fn acceleration(&self, positions: &Matrix3xX<f64>) -> Matrix3xX<f64>;
}

/// Interaction tensor `T[i, p, j] = k_ij * r_ij[p]`, stored as one 3×N slab per body i.
#[derive(Debug, Clone)]
pub struct InteractionTensor {
    slabs: Vec<Matrix3xX<f64>>,
}

impl InteractionTensor {
    /// Build the tensor for `positions` on the calling thread.
    pub fn build(positions: &Matrix3xX<f64>, softening: f64) -> Self {
        let soft2 = softening * softening;
        let slabs = (0..positions.ncols())
            .map(|i| interaction_slab(positions, i, soft2))
            .collect();
        Self { slabs }
    }

    /// Build the tensor with one rayon task per body.
    /// Slabs are independent, so the result is bit-identical to [`InteractionTensor::build`].
    pub fn build_par(positions: &Matrix3xX<f64>, softening: f64) -> Self {
        let soft2 = softening * softening;
        let slabs = (0..positions.ncols())
            .into_par_iter()
            .map(|i| interaction_slab(positions, i, soft2))
            .collect();
        Self { slabs }
    }

    pub fn n_bodies(&self) -> usize {
        self.slabs.len()
    }

    /// Entry `T[i, p, j]`
    pub fn entry(&self, i: usize, p: usize, j: usize) -> f64 {
        self.slabs[i][(p, j)]
    }

    pub fn slab(&self, i: usize) -> &Matrix3xX<f64> {
        &self.slabs[i]
    }

    /// Contract along j against the gravitational parameter vector: `a[:, i] = T[i] * gm`.
    pub fn contract(&self, gm: &DVector<f64>) -> Matrix3xX<f64> {
        let mut out = Matrix3xX::zeros(self.slabs.len());
        for (i, slab) in self.slabs.iter().enumerate() {
            out.set_column(i, &(slab * gm));
        }
        out
    }
}

/// Row `i` of the interaction tensor. The diagonal column stays zero so that
/// zero softening never evaluates 0 * inf for the self term.
fn interaction_slab(positions: &Matrix3xX<f64>, i: usize, soft2: f64) -> Matrix3xX<f64> {
    let n = positions.ncols();
    let mut slab = Matrix3xX::zeros(n);
    for j in 0..n {
        if j == i {
            continue;
        }
        // r is the displacement vector from i to j, body i is pulled along +r
        let r = positions.column(j) - positions.column(i);

        // Softened squared distance: d2 = |r|^2 + softening^2
        let d2 = r.norm_squared() + soft2;

        // Kernel weight k = 1 / d2^(3/2)
        let k = d2.powf(-1.5);

        // T[i, :, j] = k * r, mass weighting happens in the contraction
        slab.set_column(j, &(r * k));
    }
    slab
}

/// Softened accelerations for `positions` given `gm = G * m` per body.
///
/// Does not touch `positions`; returns a fresh 3×N matrix every call.
pub fn acceleration(
    positions: &Matrix3xX<f64>,
    gm: &DVector<f64>,
    softening: f64,
) -> Matrix3xX<f64> {
    InteractionTensor::build(positions, softening).contract(gm)
}

/// Upper-triangle variant: each unordered pair is evaluated once and applied
/// with opposite signs to both bodies.
pub fn acceleration_pairwise(
    positions: &Matrix3xX<f64>,
    gm: &DVector<f64>,
    softening: f64,
) -> Matrix3xX<f64> {
    let n = positions.ncols();
    let soft2 = softening * softening;
    let mut out = Matrix3xX::zeros(n);

    for i in 0..n {
        for j in (i + 1)..n {
            // r points from i to j, so i is pulled along +r and j along -r
            let r = positions.column(j) - positions.column(i);

            // Same softened distance and weight as the tensor kernel
            let d2 = r.norm_squared() + soft2;
            let k = d2.powf(-1.5);

            // Acceleration on body i due to body j, scaled by Gm of j
            let mut ai = out.column_mut(i);
            ai += r * (gm[j] * k);

            // Equal and opposite pull on body j, scaled by Gm of i
            let mut aj = out.column_mut(j);
            aj -= r * (gm[i] * k);
        }
    }
    out
}

/// Direct-summation softened Newtonian gravity
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    pub gm: DVector<f64>,   // G * m per body, fixed for the run
    pub softening: f64,     // softening length (m)
    pub kernel: KernelConfig,
    pub parallel: bool,     // build tensor slabs on the rayon pool
}

impl NewtonianGravity {
    #[allow(non_snake_case)]
    pub fn new(bodies: &[Body], G: f64, softening: f64) -> Self {
        Self::from_gm(gravitational_parameters(bodies, G), softening)
    }

    pub fn from_gm(gm: DVector<f64>, softening: f64) -> Self {
        Self {
            gm,
            softening,
            kernel: KernelConfig::Tensor,
            parallel: false,
        }
    }

    pub fn with_kernel(mut self, kernel: KernelConfig) -> Self {
        self.kernel = kernel;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn n_bodies(&self) -> usize {
        self.gm.len()
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, positions: &Matrix3xX<f64>) -> Matrix3xX<f64> {
        match self.kernel {
            KernelConfig::Tensor if self.parallel => {
                InteractionTensor::build_par(positions, self.softening).contract(&self.gm)
            }
            KernelConfig::Tensor => acceleration(positions, &self.gm, self.softening),
            KernelConfig::Pairwise => acceleration_pairwise(positions, &self.gm, self.softening),
        }
    }
}
