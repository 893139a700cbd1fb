//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a validated runtime
//! bundle containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the body catalog in index order
//!
//! Every configuration error is reported here, before any stepping begins.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::errors::{Result, SimError};
use crate::simulation::catalog;
use crate::simulation::engine::Engine;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, State};
use crate::simulation::trajectory::Trajectory;

/// Runtime bundle constructed from a [`ScenarioConfig`]: engine settings,
/// parameters and the initial bodies
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub bodies: Vec<Body>,
}

impl Scenario {
    /// Assemble and validate a scenario from already-built parts
    pub fn new(engine: Engine, parameters: Parameters, bodies: Vec<Body>) -> Result<Self> {
        let scenario = Self {
            engine,
            parameters,
            bodies,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Bodies: either a named catalog or an explicit list, never both
        let bodies = match (cfg.catalog, cfg.bodies) {
            (Some(_), Some(_)) => return Err(SimError::AmbiguousBodies),
            (Some(name), None) => {
                catalog::by_name(&name).ok_or(SimError::UnknownCatalog { name })?
            }
            (None, Some(list)) => list
                .iter()
                .enumerate()
                .map(|(i, bc)| body_from_config(i, bc))
                .collect::<Result<Vec<Body>>>()?,
            (None, None) => return Err(SimError::NoBodies),
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            steps: p_cfg.steps,
            softening: p_cfg.softening,
            G: p_cfg.G,
            check_finite: p_cfg.check_finite,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            integrator: cfg.engine.integrator,
            kernel: cfg.engine.kernel,
            parallel: cfg.engine.parallel,
        };

        Self::new(engine, parameters, bodies)
    }

    pub fn validate(&self) -> Result<()> {
        self.parameters.validate()?;
        if self.bodies.is_empty() {
            return Err(SimError::NoBodies);
        }
        for (index, b) in self.bodies.iter().enumerate() {
            if !(b.m.is_finite() && b.m > 0.0) {
                return Err(SimError::InvalidMass { index, mass: b.m });
            }
            if !b.x.iter().all(|c| c.is_finite()) {
                return Err(SimError::NonFiniteBody { index, field: "position" });
            }
            if !b.v.iter().all(|c| c.is_finite()) {
                return Err(SimError::NonFiniteBody { index, field: "velocity" });
            }
        }
        Ok(())
    }

    pub fn masses(&self) -> Vec<f64> {
        self.bodies.iter().map(|b| b.m).collect()
    }

    pub fn initial_state(&self) -> State {
        State::from_bodies(&self.bodies)
    }

    /// Gravity term configured from the engine and parameters
    pub fn forces(&self) -> NewtonianGravity {
        NewtonianGravity::new(&self.bodies, self.parameters.G, self.parameters.softening)
            .with_kernel(self.engine.kernel)
            .with_parallel(self.engine.parallel)
    }

    /// Integrate from the initial state and return the trajectory with the final state
    pub fn run(&self) -> Result<(Trajectory, State)> {
        self.validate()?;
        let mut state = self.initial_state();
        let forces = self.forces();
        let trajectory =
            integrator::run(&mut state, &forces, &self.parameters, self.engine.integrator)?;
        Ok((trajectory, state))
    }
}

fn vec3(index: usize, field: &'static str, v: &[f64]) -> Result<NVec3> {
    match v {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(SimError::VectorLength {
            index,
            field,
            found: v.len(),
        }),
    }
}

fn body_from_config(index: usize, bc: &BodyConfig) -> Result<Body> {
    Ok(Body::new(
        bc.m,
        vec3(index, "position", &bc.x)?,
        vec3(index, "velocity", &bc.v)?,
    ))
}
