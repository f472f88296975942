//! Vertex identifiers and per-vertex records.

use std::{collections::BTreeSet, fmt};

use crate::colouring::Colour;

/// Caller-assigned identifier of a vertex.
///
/// Identifiers only need to be unique within a graph; no ordering or
/// contiguity is assumed by [`crate::IncrementalGraph`].
///
/// # Examples
/// ```
/// use firstfit_core::VertexId;
///
/// let id = VertexId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u64);

impl VertexId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(raw: u64) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage record for a single vertex.
///
/// `colour` is `None` until first-fit runs on the vertex.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Vertex {
    colour: Option<Colour>,
    neighbours: BTreeSet<VertexId>,
}

impl Vertex {
    pub(crate) const fn with_colour(colour: Option<Colour>) -> Self {
        Self {
            colour,
            neighbours: BTreeSet::new(),
        }
    }

    pub(crate) const fn colour(&self) -> Option<Colour> {
        self.colour
    }

    pub(crate) fn set_colour(&mut self, colour: Colour) {
        self.colour = Some(colour);
    }

    pub(crate) const fn neighbours(&self) -> &BTreeSet<VertexId> {
        &self.neighbours
    }

    /// Returns `true` when `other` was not yet a neighbour.
    pub(crate) fn link(&mut self, other: VertexId) -> bool {
        self.neighbours.insert(other)
    }
}
