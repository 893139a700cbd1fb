//! Numerical and physical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - step size and step count,
//! - softening length and gravitational constant (`softening`, `G`),
//! - whether each committed step is checked for NaN/inf

use crate::errors::{Result, SimError};

/// CODATA 2018 Newtonian constant of gravitation (m^3 kg^-1 s^-2)
pub const G_SI: f64 = 6.6743e-11;

/// Default softening length (m)
pub const DEFAULT_SOFTENING: f64 = 1.0e6;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size (s)
    pub steps: usize, // number of steps
    pub softening: f64, // softening length (m), squared once inside the kernel
    pub G: f64, // gravitational constant
    pub check_finite: bool, // fail the run on non-finite state after a step
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 600.0,
            steps: 6 * 24 * 365,
            softening: DEFAULT_SOFTENING,
            G: G_SI,
            check_finite: true,
        }
    }
}

impl Parameters {
    /// Reject parameters no run could use
    pub fn validate(&self) -> Result<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidTimeStep { dt: self.dt });
        }
        if !(self.softening.is_finite() && self.softening >= 0.0) {
            return Err(SimError::InvalidSoftening { softening: self.softening });
        }
        if !(self.G.is_finite() && self.G > 0.0) {
            return Err(SimError::InvalidGravitationalConstant { g: self.G });
        }
        Ok(())
    }

    /// Simulated time covered by the run
    pub fn duration(&self) -> f64 {
        self.dt * self.steps as f64
    }
}
