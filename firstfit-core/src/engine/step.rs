//! Per-arrival observations produced by [`super::Run::step`].

use crate::{colouring::Colour, graph::VertexId};

/// What happened when one vertex arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    vertex: VertexId,
    requested: Vec<VertexId>,
    back_degree: usize,
    colour: Colour,
}

impl StepRecord {
    pub(crate) const fn new(
        vertex: VertexId,
        requested: Vec<VertexId>,
        back_degree: usize,
        colour: Colour,
    ) -> Self {
        Self {
            vertex,
            requested,
            back_degree,
            colour,
        }
    }

    /// Returns the vertex that arrived.
    #[must_use]
    pub const fn vertex(&self) -> VertexId {
        self.vertex
    }

    /// Returns the neighbours drawn for this vertex, in draw order.
    ///
    /// With [`crate::SamplingMode::WithReplacement`] a neighbour can appear
    /// more than once.
    #[must_use]
    pub fn requested(&self) -> &[VertexId] {
        &self.requested
    }

    /// Returns the number of distinct neighbours when the vertex was coloured.
    #[must_use]
    pub const fn back_degree(&self) -> usize {
        self.back_degree
    }

    /// Returns the colour first-fit assigned.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.colour
    }
}
