//! Benchmark parameter types.

use std::fmt;

use firstfit_core::SamplingMode;

/// Parameters for a single-run benchmark.
#[derive(Clone, Copy, Debug)]
pub struct SimulateBenchParams {
    /// Number of vertices in the run.
    pub node_count: usize,
    /// Edges requested per arriving vertex.
    pub inductiveness: usize,
    /// Neighbour sampling mode.
    pub sampling: SamplingMode,
}

impl fmt::Display for SimulateBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},d={},{}",
            self.node_count, self.inductiveness, self.sampling
        )
    }
}

/// Parameters for a sweep benchmark.
#[derive(Clone, Copy, Debug)]
pub struct SweepBenchParams {
    /// Edges requested per arriving vertex.
    pub inductiveness: usize,
    /// Largest node count (exclusive).
    pub end: usize,
    /// Distance between node counts.
    pub step: usize,
}

impl fmt::Display for SweepBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d={},end={},step={}", self.inductiveness, self.end, self.step)
    }
}
