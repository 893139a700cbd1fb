//! Fixed-step time integrators for the N-body system
//!
//! Provides the classical 4th-order Runge–Kutta step and a velocity–Verlet
//! (kick-drift-kick) step, both driven by an [`Acceleration`] source and
//! operating in place on a [`State`], plus the run loop that records the
//! trajectory.
//!
//! Neither integrator corrects energy or momentum drift.

use log::{debug, error, info};
use nalgebra::{DVector, Matrix3xX};

use super::forces::{Acceleration, NewtonianGravity};
use super::params::Parameters;
use super::states::State;
use super::trajectory::Trajectory;
use crate::configuration::config::IntegratorConfig;
use crate::errors::{Result, SimError};

/// State derivative `f(y) = [a(x); v]` for a 3×2N state matrix `y`
pub fn derivative<A>(forces: &A, y: &Matrix3xX<f64>, n: usize) -> Matrix3xX<f64>
where
    A: Acceleration + ?Sized,
{
    let acc = forces.acceleration(&y.columns(n, n).into_owned());

    let mut dy = Matrix3xX::zeros(2 * n);
    dy.columns_mut(0, n).copy_from(&acc);
    dy.columns_mut(n, n).copy_from(&y.columns(0, n));
    dy
}

/// Advance the state by one RK4 step of size `h`.
/// The four stage derivatives are dropped when the step returns.
pub fn rk4_step<A>(state: &mut State, forces: &A, h: f64)
where
    A: Acceleration + ?Sized,
{
    let n = state.n_bodies();
    let half_h = 0.5 * h;
    let y = state.as_matrix_mut();

    let k1 = derivative(forces, y, n);
    let k2 = derivative(forces, &(&*y + &k1 * half_h), n);
    let k3 = derivative(forces, &(&*y + &k2 * half_h), n);
    let k4 = derivative(forces, &(&*y + &k3 * h), n);

    *y += (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0);
}

/// Advance the state by one velocity–Verlet step of size `h`.
/// Uses two force evaluations per step.
pub fn verlet_step<A>(state: &mut State, forces: &A, h: f64)
where
    A: Acceleration + ?Sized,
{
    let n = state.n_bodies();
    let half_h = 0.5 * h;
    let y = state.as_matrix_mut();

    // a_n from x_n
    let a_old = forces.acceleration(&y.columns(n, n).into_owned());

    // Kick: v_n+1/2 = v_n + (dt/2) * a_n
    {
        let mut v = y.columns_mut(0, n);
        v += &a_old * half_h;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1/2
    let drift = y.columns(0, n) * h;
    {
        let mut x = y.columns_mut(n, n);
        x += drift;
    }

    // a_n+1 from x_n+1
    let a_new = forces.acceleration(&y.columns(n, n).into_owned());

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    let mut v = y.columns_mut(0, n);
    v += &a_new * half_h;
}

/// Run `params.steps` steps of `method`, recording positions after every step.
///
/// Either every step completes and the full trajectory is returned, or the run
/// aborts with an error and nothing is returned.
pub fn run<A>(
    state: &mut State,
    forces: &A,
    params: &Parameters,
    method: IntegratorConfig,
) -> Result<Trajectory>
where
    A: Acceleration + ?Sized,
{
    params.validate()?;
    let n = state.n_bodies();
    if n == 0 {
        return Err(SimError::NoBodies);
    }

    info!(
        "integrating {} bodies: {:?}, dt = {} s, {} steps",
        n, method, params.dt, params.steps
    );

    let mut trajectory = Trajectory::with_capacity(n, params.steps);
    let report_every = (params.steps / 10).max(1);

    for step in 0..params.steps {
        match method {
            IntegratorConfig::Rk4 => rk4_step(state, forces, params.dt),
            IntegratorConfig::Verlet => verlet_step(state, forces, params.dt),
        }

        if params.check_finite {
            if let Some((body, field)) = state.first_non_finite() {
                error!("non-finite {} for body {} after step {}", field, body, step);
                return Err(SimError::InvalidState { step, body, field });
            }
        }

        trajectory.record(state.positions());

        if (step + 1) % report_every == 0 {
            debug!("step {}/{}", step + 1, params.steps);
        }
    }

    info!("finished {} steps", trajectory.len());
    Ok(trajectory)
}

/// RK4 over the tensor kernel: `initial` and `gm` in, `[steps][N][3]` positions out.
pub fn integrate(
    initial: State,
    gm: &DVector<f64>,
    softening: f64,
    dt: f64,
    steps: usize,
) -> Result<Trajectory> {
    let n = initial.n_bodies();
    if gm.len() != n {
        return Err(SimError::ParameterCountMismatch {
            expected: n,
            found: gm.len(),
        });
    }
    if let Some(index) = gm.iter().position(|g| !(g.is_finite() && *g > 0.0)) {
        return Err(SimError::InvalidMass {
            index,
            mass: gm[index],
        });
    }

    let params = Parameters {
        dt,
        steps,
        softening,
        ..Parameters::default()
    };
    let forces = NewtonianGravity::from_gm(gm.clone(), softening);

    let mut state = initial;
    run(&mut state, &forces, &params, IntegratorConfig::Rk4)
}
