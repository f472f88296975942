//! Incremental undirected graph with per-vertex colour labels.
//!
//! Vertices and edges can only be added. Edges are stored as symmetric
//! membership in both endpoints' neighbour sets; there is no separate edge
//! table, so `v ∈ neighbours(u)` holds exactly when `u ∈ neighbours(v)`.

mod vertex;

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::{colouring::Colour, error::GraphError};

pub(crate) use self::vertex::Vertex;
pub use self::vertex::VertexId;

/// Undirected edge reported by [`IncrementalGraph::edges`].
///
/// Endpoints are canonicalised so that `low < high`.
///
/// # Examples
/// ```
/// use firstfit_core::{Edge, VertexId};
///
/// let edge = Edge::new(VertexId::new(4), VertexId::new(2));
/// assert_eq!(edge.low(), VertexId::new(2));
/// assert_eq!(edge.high(), VertexId::new(4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    low: VertexId,
    high: VertexId,
}

impl Edge {
    /// Builds a canonical edge from two endpoints in any order.
    #[must_use]
    pub fn new(left: VertexId, right: VertexId) -> Self {
        Self {
            low: left.min(right),
            high: left.max(right),
        }
    }

    /// Returns the endpoint with the smaller identifier.
    #[must_use]
    pub const fn low(&self) -> VertexId {
        self.low
    }

    /// Returns the endpoint with the larger identifier.
    #[must_use]
    pub const fn high(&self) -> VertexId {
        self.high
    }
}

/// Graph that grows one vertex or edge at a time.
///
/// Every identifier referenced from a neighbour set is also a key of the
/// vertex map; [`Self::add_edge`] creates missing endpoints before linking
/// them. Queries against absent vertices fail with
/// [`GraphError::VertexNotFound`] instead of creating the vertex.
///
/// # Examples
/// ```
/// use firstfit_core::{Colour, IncrementalGraph, VertexId};
///
/// let mut graph = IncrementalGraph::new();
/// let (a, b) = (VertexId::new(1), VertexId::new(2));
/// graph.add_coloured_vertex(a, Colour::new(0));
/// graph.add_edge(a, b)?;
/// assert!(graph.neighbours(b)?.contains(&a));
/// assert_eq!(graph.colour(b)?, None);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), firstfit_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncrementalGraph {
    vertices: BTreeMap<VertexId, Vertex>,
    edge_count: usize,
}

impl IncrementalGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an uncoloured vertex.
    ///
    /// Returns `false` and leaves the existing record untouched when `id`
    /// is already present.
    pub fn add_vertex(&mut self, id: VertexId) -> bool {
        self.insert_vertex(id, None)
    }

    /// Inserts a vertex that already carries `colour`.
    ///
    /// Returns `false` without recolouring when `id` is already present.
    pub fn add_coloured_vertex(&mut self, id: VertexId, colour: Colour) -> bool {
        self.insert_vertex(id, Some(colour))
    }

    fn insert_vertex(&mut self, id: VertexId, colour: Option<Colour>) -> bool {
        if self.vertices.contains_key(&id) {
            trace!(vertex = %id, "vertex already present");
            return false;
        }
        self.vertices.insert(id, Vertex::with_colour(colour));
        true
    }

    /// Joins `left` and `right` with an undirected edge.
    ///
    /// Missing endpoints are added uncoloured. Returns `Ok(false)` when the
    /// edge already existed, leaving both neighbour sets unchanged.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when both endpoints are the same
    /// vertex.
    pub fn add_edge(&mut self, left: VertexId, right: VertexId) -> Result<bool, GraphError> {
        if left == right {
            return Err(GraphError::SelfLoop { vertex: left });
        }
        let forward = self.vertices.entry(left).or_default().link(right);
        let backward = self.vertices.entry(right).or_default().link(left);
        debug_assert_eq!(forward, backward, "neighbour sets must stay symmetric");
        if forward {
            self.edge_count += 1;
        }
        Ok(forward)
    }

    /// Returns the neighbour set of `id`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] when `id` is absent.
    pub fn neighbours(&self, id: VertexId) -> Result<&BTreeSet<VertexId>, GraphError> {
        self.vertex(id).map(Vertex::neighbours)
    }

    /// Returns the number of neighbours of `id`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] when `id` is absent.
    pub fn degree(&self, id: VertexId) -> Result<usize, GraphError> {
        self.neighbours(id).map(BTreeSet::len)
    }

    /// Returns the colour of `id`, or `None` while it is uncoloured.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] when `id` is absent.
    pub fn colour(&self, id: VertexId) -> Result<Option<Colour>, GraphError> {
        self.vertex(id).map(Vertex::colour)
    }

    /// Assigns `colour` to `id`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] when `id` is absent; the
    /// vertex is not created.
    pub fn set_colour(&mut self, id: VertexId, colour: Colour) -> Result<(), GraphError> {
        let vertex = self
            .vertices
            .get_mut(&id)
            .ok_or(GraphError::VertexNotFound { vertex: id })?;
        vertex.set_colour(colour);
        Ok(())
    }

    /// Reports whether `id` is present.
    #[must_use]
    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Iterates over all vertex identifiers in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Iterates over `(vertex, colour)` pairs in ascending vertex order.
    pub fn colours(&self) -> impl Iterator<Item = (VertexId, Option<Colour>)> + '_ {
        self.vertices
            .iter()
            .map(|(&id, vertex)| (id, vertex.colour()))
    }

    /// Iterates over every undirected edge exactly once.
    ///
    /// Edges are yielded in ascending `(low, high)` order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices.iter().flat_map(|(&low, vertex)| {
            vertex
                .neighbours()
                .range((std::ops::Bound::Excluded(low), std::ops::Bound::Unbounded))
                .map(move |&high| Edge { low, high })
        })
    }

    /// Returns the distinct colours assigned to coloured vertices.
    #[must_use]
    pub fn unique_colours(&self) -> BTreeSet<Colour> {
        self.vertices.values().filter_map(Vertex::colour).collect()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Reports whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn vertex(&self, id: VertexId) -> Result<&Vertex, GraphError> {
        self.vertices
            .get(&id)
            .ok_or(GraphError::VertexNotFound { vertex: id })
    }
}
