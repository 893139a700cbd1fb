use std::time::Instant;

use nalgebra::Matrix3xX;

use crate::configuration::config::KernelConfig;
use crate::simulation::forces::{Acceleration, NewtonianGravity};
use crate::simulation::integrator::rk4_step;
use crate::simulation::states::{Body, NVec3, State};

/// Deterministic cloud of `n` unit-mass bodies, no rand needed
fn make_bodies(n: usize) -> Vec<Body> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            let x = NVec3::new(
                (i_f * 0.37).sin() * 5.0,
                (i_f * 0.13).cos() * 5.0,
                (i_f * 0.07).sin() * 5.0,
            );
            Body::at_rest(1.0, x)
        })
        .collect()
}

fn make_gravity(bodies: &[Body], kernel: KernelConfig, parallel: bool) -> NewtonianGravity {
    NewtonianGravity::new(bodies, 0.1, 1e-2)
        .with_kernel(kernel)
        .with_parallel(parallel)
}

fn time_kernel(gravity: &NewtonianGravity, positions: &Matrix3xX<f64>) -> f64 {
    // Warm up
    gravity.acceleration(positions);

    let t0 = Instant::now();
    gravity.acceleration(positions);
    t0.elapsed().as_secs_f64()
}

/// Time one kernel evaluation for the tensor, parallel tensor and pairwise variants
pub fn bench_kernel() {
    let ns = [100, 200, 400, 800, 1600];

    for n in ns {
        let bodies = make_bodies(n);
        let positions = State::from_bodies(&bodies).positions();

        let tensor = time_kernel(&make_gravity(&bodies, KernelConfig::Tensor, false), &positions);
        let par = time_kernel(&make_gravity(&bodies, KernelConfig::Tensor, true), &positions);
        let pairwise =
            time_kernel(&make_gravity(&bodies, KernelConfig::Pairwise, false), &positions);

        println!(
            "N = {n:5}, tensor = {:8.6} s, tensor(par) = {:8.6} s, pairwise = {:8.6} s",
            tensor, par, pairwise
        );
    }
}

/// ms per RK4 step against N, printed as CSV
/// Paste output directly into a spreadsheet to graph
pub fn bench_rk4_curve() {
    println!("N,tensor_ms,pairwise_ms");

    for n in (100..=1600).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 400 { 5 } else { 1 };
        let bodies = make_bodies(n);

        let ms_tensor = time_rk4(&bodies, KernelConfig::Tensor, steps);
        let ms_pairwise = time_rk4(&bodies, KernelConfig::Pairwise, steps);

        println!("{},{:.6},{:.6}", n, ms_tensor, ms_pairwise);
    }
}

fn time_rk4(bodies: &[Body], kernel: KernelConfig, steps: usize) -> f64 {
    let gravity = make_gravity(bodies, kernel, false);
    let mut state = State::from_bodies(bodies);

    let t0 = Instant::now();
    for _ in 0..steps {
        rk4_step(&mut state, &gravity, 1e-3);
    }
    t0.elapsed().as_secs_f64() * 1000.0 / steps as f64
}

/// Which benchmark the CLI should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BenchKind {
    Kernel,
    Rk4,
}

pub fn run_bench(kind: BenchKind) {
    match kind {
        BenchKind::Kernel => bench_kernel(),
        BenchKind::Rk4 => bench_rk4_curve(),
    }
}

