pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod errors;
pub mod logging;

pub use simulation::states::{Body, State, NVec3, gravitational_parameters};
pub use simulation::forces::{
    Acceleration, InteractionTensor, NewtonianGravity, acceleration, acceleration_pairwise,
};
pub use simulation::integrator::{integrate, rk4_step, verlet_step};
pub use simulation::trajectory::Trajectory;
pub use simulation::scenario::Scenario;
pub use configuration::config::{
    IntegratorConfig, KernelConfig, EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig,
};
pub use errors::{SimError, Result};
pub use benchmark::benchmark::{bench_kernel, bench_rk4_curve, BenchKind};
