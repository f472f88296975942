//! Statistics read off a finished run.

use std::fmt;

use crate::{colouring::Colour, graph::IncrementalGraph};

/// Headline numbers for a coloured graph.
///
/// # Examples
/// ```
/// use firstfit_core::{ColouringSummary, SimulationBuilder, UniformAdversary};
///
/// let graph = SimulationBuilder::new()
///     .with_node_count(1)
///     .build()?
///     .run(UniformAdversary::seeded(0))?;
/// let summary = ColouringSummary::from_graph(&graph, 2);
/// assert_eq!(summary.colours_used(), 1);
/// assert_eq!(
///     summary.to_string(),
///     "Number of nodes: 1, 2-inductive, Number of colours: 1"
/// );
/// # Ok::<(), firstfit_core::SimulationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColouringSummary {
    vertices: usize,
    edges: usize,
    inductiveness: usize,
    colours_used: usize,
    max_colour: Option<Colour>,
}

impl ColouringSummary {
    /// Summarises `graph`, recording the `inductiveness` it was built with.
    #[must_use]
    pub fn from_graph(graph: &IncrementalGraph, inductiveness: usize) -> Self {
        let colours = graph.unique_colours();
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            inductiveness,
            colours_used: colours.len(),
            max_colour: colours.last().copied(),
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertices(&self) -> usize {
        self.vertices
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub const fn edges(&self) -> usize {
        self.edges
    }

    /// Returns the inductiveness the graph was built with.
    #[must_use]
    pub const fn inductiveness(&self) -> usize {
        self.inductiveness
    }

    /// Returns the number of distinct colours assigned.
    #[must_use]
    pub const fn colours_used(&self) -> usize {
        self.colours_used
    }

    /// Returns the largest colour assigned, or `None` if nothing is coloured.
    #[must_use]
    pub const fn max_colour(&self) -> Option<Colour> {
        self.max_colour
    }
}

impl fmt::Display for ColouringSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Number of nodes: {}, {}-inductive, Number of colours: {}",
            self.vertices, self.inductiveness, self.colours_used
        )
    }
}
