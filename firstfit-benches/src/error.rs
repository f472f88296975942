//! Benchmark setup error type.

use firstfit_core::{SimulationError, SweepError};

/// Errors that may occur while preparing a benchmark.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A simulation could not be configured or run.
    #[error("simulation failed: {0}")]
    Simulation(#[from] SimulationError),
    /// A sweep could not be planned or executed.
    #[error("sweep failed: {0}")]
    Sweep(#[from] SweepError),
}
