//! Parameter sweeps over node count and inductiveness.
//!
//! A sweep runs one independent simulation per `(node_count, inductiveness)`
//! pair on a grid and records how many colours first-fit needed. Either axis
//! may hold a single value, so the same plan covers a node-count sweep at a
//! fixed `d`, an inductiveness sweep at a fixed `N`, and the full grid. Every
//! run owns its graph and draws from its own generator, seeded from the base
//! seed and both parameters, so the report is identical whether runs execute
//! sequentially or on the `rayon` pool.

use std::{
    ops::Range,
    time::{Duration, Instant},
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::{
    adversary::{UniformAdversary, derive_run_seed},
    builder::{SamplingMode, SimulationBuilder},
    error::SweepError,
    summary::ColouringSummary,
};

/// Describes a grid of runs over node counts and inductiveness values.
///
/// Every planned pair is validated on construction, so a plan that builds
/// never fails on configuration once executed.
///
/// # Examples
/// ```
/// use firstfit_core::SweepPlan;
///
/// let plan = SweepPlan::new(2, 10..40, 10)?.with_seed(9);
/// let report = plan.execute()?;
/// let counts: Vec<usize> = report.points().iter().map(|p| p.node_count()).collect();
/// assert_eq!(counts, vec![10, 20, 30]);
/// assert!(report.points().iter().all(|p| p.colours_used() <= 3));
///
/// let grid = SweepPlan::grid(50..101, 50, 1..4, 1)?.with_seed(9);
/// let pairs: Vec<(usize, usize)> = grid.pairs().collect();
/// assert_eq!(pairs, vec![(50, 1), (50, 2), (50, 3), (100, 1), (100, 2), (100, 3)]);
/// # Ok::<(), firstfit_core::SweepError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
    node_counts: Range<usize>,
    step: usize,
    inductiveness: Range<usize>,
    inductiveness_step: usize,
    sampling: SamplingMode,
    seed: Option<u64>,
}

impl SweepPlan {
    /// Plans runs for every `node_count` in `node_counts` stepping by `step`,
    /// all at the same `inductiveness`.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Self::grid`].
    pub fn new(
        inductiveness: usize,
        node_counts: Range<usize>,
        step: usize,
    ) -> Result<Self, SweepError> {
        Self::grid(
            node_counts,
            step,
            inductiveness..inductiveness.saturating_add(1),
            1,
        )
    }

    /// Plans one run per pair of a node count from `node_counts` (stepping by
    /// `step`) and an inductiveness from `inductiveness` (stepping by
    /// `inductiveness_step`).
    ///
    /// # Errors
    /// Returns [`SweepError::ZeroStep`] or
    /// [`SweepError::ZeroInductivenessStep`] when a step is zero,
    /// [`SweepError::EmptyRange`] or [`SweepError::EmptyInductivenessRange`]
    /// when a range holds no values, and [`SweepError::Simulation`] for the
    /// first planned pair that cannot be simulated.
    pub fn grid(
        node_counts: Range<usize>,
        step: usize,
        inductiveness: Range<usize>,
        inductiveness_step: usize,
    ) -> Result<Self, SweepError> {
        if step == 0 {
            return Err(SweepError::ZeroStep);
        }
        if inductiveness_step == 0 {
            return Err(SweepError::ZeroInductivenessStep);
        }
        if node_counts.is_empty() {
            return Err(SweepError::EmptyRange {
                start: node_counts.start,
                end: node_counts.end,
            });
        }
        if inductiveness.is_empty() {
            return Err(SweepError::EmptyInductivenessRange {
                start: inductiveness.start,
                end: inductiveness.end,
            });
        }
        let plan = Self {
            node_counts,
            step,
            inductiveness,
            inductiveness_step,
            sampling: SamplingMode::default(),
            seed: None,
        };
        for (node_count, inductiveness) in plan.pairs() {
            plan.builder(node_count, inductiveness)
                .build()
                .map_err(|error| SweepError::Simulation {
                    node_count,
                    inductiveness,
                    error,
                })?;
        }
        Ok(plan)
    }

    /// Fixes the base seed so the sweep is reproducible.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Selects the neighbour sampling mode used by every run.
    #[must_use]
    pub const fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    /// Iterates over the node counts the sweep will simulate.
    pub fn node_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.node_counts.clone().step_by(self.step)
    }

    /// Iterates over the inductiveness values the sweep will simulate.
    pub fn inductiveness_values(&self) -> impl Iterator<Item = usize> + '_ {
        self.inductiveness.clone().step_by(self.inductiveness_step)
    }

    /// Iterates over every planned `(node_count, inductiveness)` pair,
    /// node count first.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.node_counts().flat_map(move |node_count| {
            self.inductiveness_values()
                .map(move |inductiveness| (node_count, inductiveness))
        })
    }

    /// Runs every planned simulation and collects the results ordered by
    /// node count, then inductiveness.
    ///
    /// # Errors
    /// Returns [`SweepError::Simulation`] for the first run that fails.
    #[instrument(
        name = "core.sweep",
        err,
        skip(self),
        fields(
            node_counts = self.node_counts().count(),
            inductiveness_values = self.inductiveness_values().count(),
        ),
    )]
    pub fn execute(&self) -> Result<SweepReport, SweepError> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let pairs: Vec<(usize, usize)> = self.pairs().collect();
        let started = Instant::now();

        #[cfg(feature = "parallel")]
        let points = pairs
            .par_iter()
            .map(|&(node_count, inductiveness)| self.run_point(node_count, inductiveness, seed))
            .collect::<Result<Vec<_>, _>>()?;
        #[cfg(not(feature = "parallel"))]
        let points = pairs
            .iter()
            .map(|&(node_count, inductiveness)| self.run_point(node_count, inductiveness, seed))
            .collect::<Result<Vec<_>, _>>()?;

        let report = SweepReport {
            seed,
            points,
            elapsed: started.elapsed(),
        };
        info!(
            runs = report.points.len(),
            seed,
            elapsed_ms = report.elapsed.as_millis(),
            "sweep completed"
        );
        Ok(report)
    }

    fn builder(&self, node_count: usize, inductiveness: usize) -> SimulationBuilder {
        SimulationBuilder::new()
            .with_node_count(node_count)
            .with_inductiveness(inductiveness)
            .with_sampling(self.sampling)
    }

    fn run_point(
        &self,
        node_count: usize,
        inductiveness: usize,
        base_seed: u64,
    ) -> Result<SweepPoint, SweepError> {
        let wrap = |error| SweepError::Simulation {
            node_count,
            inductiveness,
            error,
        };
        let simulation = self.builder(node_count, inductiveness).build().map_err(wrap)?;
        let adversary = UniformAdversary::seeded(point_seed(base_seed, node_count, inductiveness));

        let started = Instant::now();
        let graph = simulation.run(adversary).map_err(wrap)?;
        let elapsed = started.elapsed();

        let summary = ColouringSummary::from_graph(&graph, inductiveness);
        debug!(%summary, elapsed_ms = elapsed.as_millis(), "sweep point finished");
        Ok(SweepPoint { summary, elapsed })
    }
}

/// Seed for the run at `(node_count, inductiveness)`, independent of the
/// order in which runs execute.
fn point_seed(base_seed: u64, node_count: usize, inductiveness: usize) -> u64 {
    derive_run_seed(
        derive_run_seed(base_seed, node_count as u64),
        inductiveness as u64,
    )
}

/// Outcome of a single run within a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPoint {
    summary: ColouringSummary,
    elapsed: Duration,
}

impl SweepPoint {
    /// Returns the number of vertices in this run.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.summary.vertices()
    }

    /// Returns the inductiveness of this run.
    #[must_use]
    pub const fn inductiveness(&self) -> usize {
        self.summary.inductiveness()
    }

    /// Returns the number of distinct colours first-fit used.
    #[must_use]
    pub const fn colours_used(&self) -> usize {
        self.summary.colours_used()
    }

    /// Returns the full summary of the run.
    #[must_use]
    pub const fn summary(&self) -> &ColouringSummary {
        &self.summary
    }

    /// Returns the wall-clock time the run took.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Results of [`SweepPlan::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    seed: u64,
    points: Vec<SweepPoint>,
    elapsed: Duration,
}

impl SweepReport {
    /// Returns the base seed the runs were derived from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns one point per planned pair, ordered by node count and then
    /// inductiveness.
    #[must_use]
    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    /// Returns the wall-clock time for the whole sweep.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
