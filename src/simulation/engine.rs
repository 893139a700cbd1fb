//! High-level runtime engine settings
//!
//! Selects the integrator and the acceleration kernel used when
//! running a `Scenario`

use crate::configuration::config::{IntegratorConfig, KernelConfig};

#[derive(Debug, Clone, Copy)]
pub struct Engine {
    pub integrator: IntegratorConfig, // rk4 or verlet
    pub kernel: KernelConfig, // interaction tensor or pairwise sum
    pub parallel: bool, // build tensor slabs on the rayon pool
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::Rk4,
            kernel: KernelConfig::Tensor,
            parallel: false,
        }
    }
}
