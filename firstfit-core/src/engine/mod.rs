//! Online first-fit colouring of a d-inductive graph under adversarial
//! arrivals.
//!
//! A run starts from a single vertex `N` coloured [`Colour::FIRST`]. Vertices
//! `N - 1` down to `1` then arrive one at a time. Each arrival is joined to
//! `d` existing vertices chosen by an [`Adversary`] and immediately receives
//! its first-fit colour. Colours are never revised.

mod step;

use std::num::NonZeroUsize;

use tracing::{info, instrument, trace};

use crate::{
    Result,
    adversary::Adversary,
    builder::SamplingMode,
    colouring::{Colour, first_fit},
    error::SimulationError,
    graph::{IncrementalGraph, VertexId},
};

pub use self::step::StepRecord;

/// Validated parameters of a simulation run.
///
/// Built by [`crate::SimulationBuilder`]. A `Simulation` holds no graph
/// state; every call to [`Self::run`] or [`Self::start`] creates a fresh,
/// independently owned graph.
///
/// # Examples
/// ```
/// use firstfit_core::{SimulationBuilder, UniformAdversary};
///
/// let simulation = SimulationBuilder::new()
///     .with_node_count(10)
///     .with_inductiveness(2)
///     .build()
///     .expect("configuration is valid");
/// let graph = simulation
///     .run(UniformAdversary::seeded(1))
///     .expect("run must succeed");
/// assert_eq!(graph.vertex_count(), 10);
/// assert!(graph.unique_colours().len() <= 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    node_count: NonZeroUsize,
    inductiveness: usize,
    sampling: SamplingMode,
    palette_limit: Option<NonZeroUsize>,
}

impl Simulation {
    pub(crate) const fn new(
        node_count: NonZeroUsize,
        inductiveness: usize,
        sampling: SamplingMode,
        palette_limit: Option<NonZeroUsize>,
    ) -> Self {
        Self {
            node_count,
            inductiveness,
            sampling,
            palette_limit,
        }
    }

    /// Returns the number of vertices a run produces.
    #[must_use]
    pub const fn node_count(&self) -> NonZeroUsize {
        self.node_count
    }

    /// Returns the number of edges requested by each arriving vertex.
    #[must_use]
    pub const fn inductiveness(&self) -> usize {
        self.inductiveness
    }

    /// Returns the neighbour sampling mode.
    #[must_use]
    pub const fn sampling(&self) -> SamplingMode {
        self.sampling
    }

    /// Returns the caller-imposed palette cap, if any.
    #[must_use]
    pub const fn palette_limit(&self) -> Option<NonZeroUsize> {
        self.palette_limit
    }

    /// Initialises a run that advances one arrival per [`Run::step`].
    ///
    /// # Examples
    /// ```
    /// use firstfit_core::{Colour, SimulationBuilder, UniformAdversary, VertexId};
    ///
    /// let simulation = SimulationBuilder::new()
    ///     .with_node_count(3)
    ///     .with_inductiveness(1)
    ///     .build()?;
    /// let mut run = simulation.start(UniformAdversary::seeded(5));
    /// assert_eq!(run.graph().colour(VertexId::new(3))?, Some(Colour::FIRST));
    ///
    /// let record = run.step()?.expect("vertex 2 arrives");
    /// assert_eq!(record.vertex(), VertexId::new(2));
    /// assert_eq!(record.colour(), Colour::new(1));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn start<A: Adversary>(&self, adversary: A) -> Run<A> {
        Run::new(self, adversary)
    }

    /// Executes a full run and returns the coloured graph.
    ///
    /// # Errors
    /// Returns [`SimulationError::ExhaustedPalette`] when a palette cap is
    /// configured and exceeded, and adversary or graph errors as described
    /// on [`Run::step`].
    #[instrument(
        name = "core.simulate",
        err,
        skip(self, adversary),
        fields(
            node_count = self.node_count.get(),
            inductiveness = self.inductiveness,
            sampling = %self.sampling
        ),
    )]
    pub fn run<A: Adversary>(&self, adversary: A) -> Result<IncrementalGraph> {
        let mut run = self.start(adversary);
        while run.step()?.is_some() {}
        Ok(self.complete(run))
    }

    /// Executes a full run and also returns one [`StepRecord`] per arrival.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Self::run`].
    #[instrument(
        name = "core.simulate",
        err,
        skip(self, adversary),
        fields(
            node_count = self.node_count.get(),
            inductiveness = self.inductiveness,
            sampling = %self.sampling
        ),
    )]
    pub fn run_traced<A: Adversary>(
        &self,
        adversary: A,
    ) -> Result<(IncrementalGraph, Vec<StepRecord>)> {
        let mut run = self.start(adversary);
        let mut records = Vec::with_capacity(self.node_count.get().saturating_sub(1));
        while let Some(record) = run.step()? {
            records.push(record);
        }
        Ok((self.complete(run), records))
    }

    fn complete<A>(&self, run: Run<A>) -> IncrementalGraph {
        let graph = run.into_graph();
        let colours_used = graph.unique_colours().len();
        #[cfg(feature = "metrics")]
        metrics::histogram!("firstfit_colours_used")
            .record(u32::try_from(colours_used).map_or(f64::from(u32::MAX), f64::from));
        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            colours_used,
            inductiveness = self.inductiveness,
            "simulation completed"
        );
        graph
    }
}

/// In-progress simulation run.
///
/// The run is in its initial state after [`Simulation::start`], advances
/// one arrival per [`Self::step`], and is done once `step` returns
/// `Ok(None)`. A failed step leaves the run failed: the arrival that failed
/// stays in the graph uncoloured and every later `step` returns the same
/// error.
#[derive(Debug)]
pub struct Run<A> {
    graph: IncrementalGraph,
    arrivals: Vec<VertexId>,
    next: u64,
    inductiveness: usize,
    sampling: SamplingMode,
    palette_limit: Option<NonZeroUsize>,
    adversary: A,
    failure: Option<SimulationError>,
}

impl<A> Run<A> {
    /// Returns the graph built so far.
    #[must_use]
    pub const fn graph(&self) -> &IncrementalGraph {
        &self.graph
    }

    /// Returns the number of arrivals still to come.
    #[must_use]
    pub const fn remaining(&self) -> u64 {
        self.next
    }

    /// Reports whether every vertex has arrived and been coloured.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.next == 0
    }

    /// Returns the error that stopped the run, if a step has failed.
    #[must_use]
    pub const fn failure(&self) -> Option<&SimulationError> {
        self.failure.as_ref()
    }

    /// Consumes the run and returns its graph, whatever its progress.
    #[must_use]
    pub fn into_graph(self) -> IncrementalGraph {
        self.graph
    }
}

impl<A: Adversary> Run<A> {
    fn new(simulation: &Simulation, adversary: A) -> Self {
        let node_count = simulation.node_count.get();
        let first = VertexId::new(node_count as u64);
        let mut graph = IncrementalGraph::new();
        graph.add_coloured_vertex(first, Colour::FIRST);
        let mut arrivals = Vec::with_capacity(node_count);
        arrivals.push(first);
        Self {
            graph,
            arrivals,
            next: first.get() - 1,
            inductiveness: simulation.inductiveness,
            sampling: simulation.sampling,
            palette_limit: simulation.palette_limit,
            adversary,
            failure: None,
        }
    }

    /// Adds the next vertex, wires its edges, and colours it.
    ///
    /// Returns `Ok(None)` once the run is done.
    ///
    /// # Errors
    /// Once a step has failed, this and every later call return that error
    /// without touching the graph or the adversary.
    ///
    /// Returns [`SimulationError::EmptyCandidates`] or
    /// [`SimulationError::AdversaryOutOfRange`] when the adversary cannot
    /// supply a valid neighbour, [`SimulationError::ExhaustedPalette`] when
    /// the colour exceeds the palette cap, and [`SimulationError::Graph`]
    /// when a graph query fails.
    pub fn step(&mut self) -> Result<Option<StepRecord>> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.advance().inspect_err(|error| self.failure = Some(error.clone()))
    }

    fn advance(&mut self) -> Result<Option<StepRecord>> {
        if self.is_done() {
            return Ok(None);
        }
        let vertex = VertexId::new(self.next);
        self.graph.add_vertex(vertex);

        let requested = match self.sampling {
            SamplingMode::WithReplacement => self.wire_with_replacement(vertex)?,
            SamplingMode::Distinct => self.wire_distinct(vertex)?,
        };
        let back_degree = self.graph.degree(vertex)?;

        let colour = first_fit(&self.graph, vertex)?;
        if let Some(limit) = self.palette_limit.filter(|limit| colour.get() >= limit.get()) {
            return Err(SimulationError::ExhaustedPalette {
                colour,
                palette_size: limit.get(),
            });
        }
        self.graph.set_colour(vertex, colour)?;
        self.arrivals.push(vertex);
        self.next -= 1;

        #[cfg(feature = "metrics")]
        metrics::counter!("firstfit_vertices_coloured").increment(1);
        trace!(vertex = %vertex, back_degree, colour = %colour, "vertex coloured");
        Ok(Some(StepRecord::new(vertex, requested, back_degree, colour)))
    }

    /// Drives the remaining arrivals and returns the finished graph.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Self::step`].
    pub fn finish(mut self) -> Result<IncrementalGraph> {
        while self.step()?.is_some() {}
        Ok(self.graph)
    }

    fn wire_with_replacement(&mut self, vertex: VertexId) -> Result<Vec<VertexId>> {
        let mut requested = Vec::with_capacity(self.inductiveness);
        for _ in 0..self.inductiveness {
            let index = self.choose(vertex, 0)?;
            let target = self.arrival(vertex, index)?;
            self.graph.add_edge(vertex, target)?;
            requested.push(target);
        }
        Ok(requested)
    }

    /// Partial Fisher-Yates over `arrivals`: the draw for `slot` picks from
    /// the unchosen tail `arrivals[slot..]` and swaps the pick into `slot`.
    fn wire_distinct(&mut self, vertex: VertexId) -> Result<Vec<VertexId>> {
        let draws = self.inductiveness.min(self.arrivals.len());
        let mut requested = Vec::with_capacity(draws);
        for slot in 0..draws {
            let index = self.choose(vertex, slot)?;
            self.arrivals.swap(slot, index);
            let target = self.arrival(vertex, slot)?;
            self.graph.add_edge(vertex, target)?;
            requested.push(target);
        }
        Ok(requested)
    }

    /// Asks the adversary for a neighbour among `arrivals[offset..]` and
    /// returns its absolute position in `arrivals`.
    fn choose(&mut self, vertex: VertexId, offset: usize) -> Result<usize> {
        let pool = self
            .arrivals
            .get(offset..)
            .filter(|pool| !pool.is_empty())
            .ok_or(SimulationError::EmptyCandidates { vertex })?;
        let index = self.adversary.pick(vertex, pool);
        if index >= pool.len() {
            return Err(SimulationError::AdversaryOutOfRange {
                vertex,
                index,
                candidates: pool.len(),
            });
        }
        Ok(offset + index)
    }

    fn arrival(&self, vertex: VertexId, index: usize) -> Result<VertexId> {
        self.arrivals
            .get(index)
            .copied()
            .ok_or(SimulationError::EmptyCandidates { vertex })
    }
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod property;
