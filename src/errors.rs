//! Error type shared by the simulation, configuration and catalog layers.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    // File I/O errors
    #[error("Failed to open scenario file '{path}': {source}")]
    ScenarioFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scenario '{path}': {source}")]
    ScenarioParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    // Configuration errors
    #[error("Time step must be positive and finite, got {dt}")]
    InvalidTimeStep { dt: f64 },

    #[error("Softening length must be non-negative and finite, got {softening}")]
    InvalidSoftening { softening: f64 },

    #[error("Gravitational constant must be positive and finite, got {g}")]
    InvalidGravitationalConstant { g: f64 },

    #[error("Body {index} has invalid mass {mass} (must be positive and finite)")]
    InvalidMass { index: usize, mass: f64 },

    #[error("Body {index} has a non-finite initial {field}")]
    NonFiniteBody { index: usize, field: &'static str },

    #[error("Body {index}: expected 3 components for {field}, found {found}")]
    VectorLength {
        index: usize,
        field: &'static str,
        found: usize,
    },

    #[error("Gravitational parameter vector has {found} entries for {expected} bodies")]
    ParameterCountMismatch { expected: usize, found: usize },

    #[error("No bodies defined in scenario")]
    NoBodies,

    #[error("Scenario defines both a catalog and an explicit body list")]
    AmbiguousBodies,

    #[error("Unknown catalog '{name}'")]
    UnknownCatalog { name: String },

    // Numerical errors
    #[error("Non-finite {field} for body {body} after step {step}")]
    InvalidState {
        step: usize,
        body: usize,
        field: &'static str,
    },
}

impl SimError {
    /// True for errors raised while validating a scenario, before any stepping.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            SimError::InvalidState { .. }
                | SimError::ScenarioFile { .. }
                | SimError::ScenarioParse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
