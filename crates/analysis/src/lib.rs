//! Sampling and statistics over assembly indices.
//!
//! Draws random bit-strings, measures their estimated assembly index, and
//! aggregates the results into length/probability sweeps, entropy scatters
//! and a least-squares fit. Rendering is left to the caller.
//!
//! Sweep points can also be measured concurrently on tokio's blocking pool
//! (see [`run_sweep_parallel`]); each worker owns its own context.

pub mod fit;
pub mod parallel;
pub mod random;
pub mod stats;
pub mod sweep;

pub use fit::LinearFit;
pub use parallel::run_sweep_parallel;
pub use random::random_bit_string;
pub use stats::{Summary, binary_entropy};
pub use sweep::{
    EntropyPoint, MAX_PROBABILITY_STEPS, Measurement, SamplePoint, entropy_scatter, length_sweep,
    measure, point_seed, probability_sweep, run_sweep,
};

/// Errors from the analysis subsystem.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("engine error: {0}")]
    Engine(#[from] pathways_core::Error),

    #[error("probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("probability step must lie in [1e-6, 1], got {0}")]
    InvalidStep(f64),

    #[error("cannot summarise an empty sample")]
    EmptySample,

    #[error("sweep worker failed: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
