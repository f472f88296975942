//! Seeded workloads shared by the benchmarks.

use firstfit_core::{Simulation, SimulationBuilder, SweepPlan, UniformAdversary};
use rand::{RngCore, SeedableRng, rngs::SmallRng};

use crate::{
    error::BenchSetupError,
    params::{SimulateBenchParams, SweepBenchParams},
};

/// Seed used for every benchmark workload.
pub const SEED: u64 = 42;

/// Builds the simulation described by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::Simulation`] when the parameters are invalid.
pub fn simulation(params: SimulateBenchParams) -> Result<Simulation, BenchSetupError> {
    Ok(SimulationBuilder::new()
        .with_node_count(params.node_count)
        .with_inductiveness(params.inductiveness)
        .with_sampling(params.sampling)
        .build()?)
}

/// Deterministic source of adversaries, one per benchmark iteration, so
/// iterations do not replay the same graph.
#[derive(Debug)]
pub struct SeedStream(SmallRng);

impl SeedStream {
    /// Starts the stream at [`SEED`].
    #[must_use]
    pub fn new() -> Self {
        Self(SmallRng::seed_from_u64(SEED))
    }

    /// Returns an adversary seeded with the next value in the stream.
    pub fn next_adversary(&mut self) -> UniformAdversary<SmallRng> {
        UniformAdversary::seeded(self.0.next_u64())
    }
}

impl Default for SeedStream {
    fn default() -> Self {
        Self::new()
    }
}

/// Plans the sweep described by `params`, starting at `inductiveness + 1`.
///
/// # Errors
/// Returns [`BenchSetupError::Sweep`] when the plan is invalid.
pub fn sweep_plan(params: SweepBenchParams) -> Result<SweepPlan, BenchSetupError> {
    Ok(SweepPlan::new(
        params.inductiveness,
        params.inductiveness + 1..params.end,
        params.step,
    )?
    .with_seed(SEED))
}
