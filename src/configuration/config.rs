//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator and kernel selection
//! - [`ParametersConfig`] – step size, step count and physical constants
//! - a body source: either a built-in `catalog` name or a list of [`BodyConfig`]
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A two-body scenario matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "rk4"       # or "verlet"
//!   kernel: "tensor"        # or "pairwise"
//!   parallel: false
//!
//! parameters:
//!   dt: 3600.0              # step size (s)
//!   steps: 8760             # number of steps
//!   softening: 1.0e6        # softening length (m), optional
//!   G: 6.6743e-11           # gravitational constant, optional
//!   check_finite: true      # optional
//!
//! bodies:
//!   - m: 1.9885e30
//!     x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!   - m: 5.9722e24
//!     x: [ 1.495978707e11, 0.0, 0.0 ]
//!     v: [ 0.0, 2.9785e4, 0.0 ]
//! ```
//!
//! Instead of `bodies`, a scenario may name a built-in set with
//! `catalog: "inner_solar_system"`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{Result, SimError};
use crate::simulation::params::{DEFAULT_SOFTENING, G_SI};

/// Which integrator method used by the engine
/// `integrator: "rk4"` or `integrator: "verlet"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[default]
    #[serde(rename = "rk4")] // Classical 4th-order Runge–Kutta, four force evaluations per step
    Rk4,

    // Velocity Verlet (kick-drift-kick), symplectic, two force evaluations per step
    #[serde(rename = "verlet")]
    Verlet,
}

/// How accelerations are evaluated
/// `kernel: "tensor"` or `kernel: "pairwise"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelConfig {
    #[default]
    #[serde(rename = "tensor")] // Full (N, 3, N) interaction tensor contracted against G*m
    Tensor,

    #[serde(rename = "pairwise")] // Upper-triangle pair loop, each pair evaluated once
    Pairwise,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub integrator: IntegratorConfig, // Time integrator used for advancing the system state
    #[serde(default)]
    pub kernel: KernelConfig, // Acceleration kernel variant
    #[serde(default)]
    pub parallel: bool, // `true` - build the interaction tensor on the rayon thread pool
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,      // time step size (s)
    pub steps: usize, // number of steps to integrate
    #[serde(default = "default_softening")]
    pub softening: f64, // softening length (m) - prevent singular forces at very small separations
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default = "default_check_finite")]
    pub check_finite: bool, // abort with an error if a step produces NaN/inf
}

fn default_softening() -> f64 {
    DEFAULT_SOFTENING
}

fn default_g() -> f64 {
    G_SI
}

fn default_check_finite() -> bool {
    true
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub m: f64,      // Mass of the body (kg)
    pub x: Vec<f64>, // Initial position (m), three components
    pub v: Vec<f64>, // Initial velocity (m/s), three components
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Engine-level configuration
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    #[serde(default)]
    pub catalog: Option<String>, // Name of a built-in body catalog
    #[serde(default)]
    pub bodies: Option<Vec<BodyConfig>>, // Explicit initial state of every body
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        let file = File::open(path).map_err(|e| SimError::ScenarioFile {
            path: display.clone(),
            source: e,
        })?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).map_err(|e| SimError::ScenarioParse {
            path: display,
            source: e,
        })
    }
}
