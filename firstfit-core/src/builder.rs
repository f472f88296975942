//! Builder utilities for configuring simulation runs.
//!
//! Exposes the sampling mode selection surface and the parameter validation
//! performed before a [`Simulation`] can be constructed.

use std::{fmt, num::NonZeroUsize};

use tracing::warn;

use crate::{Result, engine::Simulation, error::SimulationError};

const DEFAULT_NODE_COUNT: usize = 10;
const DEFAULT_INDUCTIVENESS: usize = 2;

/// Controls how the `d` neighbours of an arriving vertex are drawn.
///
/// # Examples
/// ```
/// use firstfit_core::SamplingMode;
///
/// assert_eq!(SamplingMode::default(), SamplingMode::WithReplacement);
/// assert_eq!(SamplingMode::Distinct.to_string(), "distinct");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SamplingMode {
    /// Each of the `d` draws is independent; repeated draws collapse into a
    /// single edge, so fewer than `d` distinct neighbours may result.
    #[default]
    WithReplacement,
    /// Draws never repeat a neighbour, giving exactly `min(d, existing)`
    /// distinct edges per arrival.
    Distinct,
}

impl fmt::Display for SamplingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WithReplacement => "with-replacement",
            Self::Distinct => "distinct",
        })
    }
}

/// Configures and constructs [`Simulation`] instances.
///
/// # Examples
/// ```
/// use firstfit_core::{SamplingMode, SimulationBuilder};
///
/// let simulation = SimulationBuilder::new()
///     .with_node_count(100)
///     .with_inductiveness(5)
///     .with_sampling(SamplingMode::Distinct)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(simulation.node_count().get(), 100);
/// assert_eq!(simulation.inductiveness(), 5);
/// assert_eq!(simulation.sampling(), SamplingMode::Distinct);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    node_count: usize,
    inductiveness: usize,
    sampling: SamplingMode,
    palette_limit: Option<NonZeroUsize>,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            inductiveness: DEFAULT_INDUCTIVENESS,
            sampling: SamplingMode::default(),
            palette_limit: None,
        }
    }
}

impl SimulationBuilder {
    /// Creates a builder populated with the ten-vertex, 2-inductive sample
    /// configuration.
    ///
    /// # Examples
    /// ```
    /// use firstfit_core::SimulationBuilder;
    ///
    /// let builder = SimulationBuilder::new();
    /// assert_eq!(builder.node_count(), 10);
    /// assert_eq!(builder.inductiveness(), 2);
    /// assert_eq!(builder.palette_limit(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of vertices `N` in the run.
    #[must_use]
    pub const fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Returns the configured node count.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Overrides the number of edges `d` requested by each arriving vertex.
    #[must_use]
    pub const fn with_inductiveness(mut self, inductiveness: usize) -> Self {
        self.inductiveness = inductiveness;
        self
    }

    /// Returns the configured inductiveness.
    #[must_use]
    pub const fn inductiveness(&self) -> usize {
        self.inductiveness
    }

    /// Selects how neighbours are drawn.
    #[must_use]
    pub const fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    /// Returns the configured sampling mode.
    #[must_use]
    pub const fn sampling(&self) -> SamplingMode {
        self.sampling
    }

    /// Caps the number of colours the caller can represent.
    ///
    /// The cap is checked after first-fit picks a colour; a colour at or
    /// beyond `limit` aborts the run with
    /// [`SimulationError::ExhaustedPalette`].
    ///
    /// # Examples
    /// ```
    /// use std::num::NonZeroUsize;
    /// use firstfit_core::SimulationBuilder;
    ///
    /// let limit = NonZeroUsize::new(3).expect("non-zero");
    /// let builder = SimulationBuilder::new().with_palette_limit(limit);
    /// assert_eq!(builder.palette_limit(), Some(limit));
    /// ```
    #[must_use]
    pub const fn with_palette_limit(mut self, limit: NonZeroUsize) -> Self {
        self.palette_limit = Some(limit);
        self
    }

    /// Returns the configured palette cap, if any.
    #[must_use]
    pub const fn palette_limit(&self) -> Option<NonZeroUsize> {
        self.palette_limit
    }

    /// Validates the configuration and constructs a [`Simulation`].
    ///
    /// A single-vertex run never requests edges, so any inductiveness is
    /// accepted when `node_count` is one.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidNodeCount`] when `node_count` is
    /// zero and [`SimulationError::InductivenessTooLarge`] when
    /// `inductiveness >= node_count` for runs with more than one vertex.
    ///
    /// # Examples
    /// ```
    /// use firstfit_core::{SimulationBuilder, SimulationError};
    ///
    /// let err = SimulationBuilder::new()
    ///     .with_node_count(3)
    ///     .with_inductiveness(3)
    ///     .build()
    ///     .expect_err("three vertices cannot be 3-inductive");
    /// assert!(err.is_configuration());
    /// ```
    pub fn build(self) -> Result<Simulation> {
        let Some(node_count) = NonZeroUsize::new(self.node_count) else {
            warn!(node_count = self.node_count, "rejecting empty simulation");
            return Err(SimulationError::InvalidNodeCount {
                got: self.node_count,
            });
        };
        if node_count.get() > 1 && self.inductiveness >= node_count.get() {
            warn!(
                node_count = node_count.get(),
                inductiveness = self.inductiveness,
                "inductiveness exceeds available neighbours"
            );
            return Err(SimulationError::InductivenessTooLarge {
                inductiveness: self.inductiveness,
                node_count: node_count.get(),
            });
        }

        Ok(Simulation::new(
            node_count,
            self.inductiveness,
            self.sampling,
            self.palette_limit,
        ))
    }
}
