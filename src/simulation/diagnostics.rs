//! Conserved-quantity diagnostics
//!
//! Neither integrator corrects drift, so these are used to report how much
//! total energy and momentum moved over a run.

use crate::simulation::states::{NVec3, State};

pub fn total_momentum(masses: &[f64], state: &State) -> NVec3 {
    masses
        .iter()
        .enumerate()
        .fold(NVec3::zeros(), |p, (i, m)| p + state.velocity(i) * *m)
}

pub fn center_of_mass(masses: &[f64], state: &State) -> NVec3 {
    let total: f64 = masses.iter().sum();
    let weighted = masses
        .iter()
        .enumerate()
        .fold(NVec3::zeros(), |acc, (i, m)| acc + state.position(i) * *m);
    weighted / total
}

pub fn kinetic_energy(masses: &[f64], state: &State) -> f64 {
    masses
        .iter()
        .enumerate()
        .map(|(i, m)| 0.5 * m * state.velocity(i).norm_squared())
        .sum()
}

/// Softened pair potential, `-G m_i m_j / sqrt(r^2 + softening^2)`, summed over i < j
#[allow(non_snake_case)]
pub fn potential_energy(masses: &[f64], state: &State, G: f64, softening: f64) -> f64 {
    let soft2 = softening * softening;
    let n = masses.len();
    let mut u = 0.0;
    for i in 0..n {
        let xi = state.position(i);
        for j in (i + 1)..n {
            let r = state.position(j) - xi;
            u -= G * masses[i] * masses[j] / (r.norm_squared() + soft2).sqrt();
        }
    }
    u
}

#[allow(non_snake_case)]
pub fn total_energy(masses: &[f64], state: &State, G: f64, softening: f64) -> f64 {
    kinetic_energy(masses, state) + potential_energy(masses, state, G, softening)
}

/// `|e1 - e0| / |e0|`, or the absolute change when `e0` is zero
pub fn relative_energy_drift(e0: f64, e1: f64) -> f64 {
    if e0 == 0.0 {
        (e1 - e0).abs()
    } else {
        ((e1 - e0) / e0).abs()
    }
}
