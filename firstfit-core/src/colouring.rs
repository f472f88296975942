//! Colour labels and the first-fit selection rule.
//!
//! First-fit gives a vertex the minimum excludant (mex) of its coloured
//! neighbours' labels: the smallest non-negative integer none of them uses.

use std::fmt;

use crate::{
    error::GraphError,
    graph::{IncrementalGraph, VertexId},
};

/// Non-negative colour label.
///
/// Labels are plain integers; mapping them to display colours is left to the
/// presentation layer.
///
/// # Examples
/// ```
/// use firstfit_core::Colour;
///
/// assert_eq!(Colour::FIRST, Colour::new(0));
/// assert_eq!(Colour::new(3).get(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Colour(usize);

impl Colour {
    /// The lowest-numbered colour, given to the first vertex of a run.
    pub const FIRST: Self = Self(0);

    /// Wraps a raw colour label.
    #[must_use]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw colour label.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the smallest colour absent from `used`.
///
/// Duplicates are allowed. With `k` inputs the answer is at most `k`, so only
/// `k + 1` candidates are ever inspected.
///
/// # Examples
/// ```
/// use firstfit_core::{Colour, minimum_excludant};
///
/// let used = [0, 1, 3, 1].map(Colour::new);
/// assert_eq!(minimum_excludant(used), Colour::new(2));
/// assert_eq!(minimum_excludant([]), Colour::FIRST);
/// ```
#[must_use]
pub fn minimum_excludant<I>(used: I) -> Colour
where
    I: IntoIterator<Item = Colour>,
{
    let used: Vec<Colour> = used.into_iter().collect();
    let mut occupied = vec![false; used.len() + 1];
    for colour in used {
        if let Some(slot) = occupied.get_mut(colour.get()) {
            *slot = true;
        }
    }
    let mex = occupied
        .iter()
        .position(|taken| !taken)
        .unwrap_or(occupied.len());
    Colour::new(mex)
}

/// Selects the first-fit colour for `vertex` from its current neighbours.
///
/// Uncoloured neighbours contribute nothing. The graph is not modified; the
/// caller commits the result with [`IncrementalGraph::set_colour`].
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] when `vertex` or one of its
/// neighbours is absent.
///
/// # Examples
/// ```
/// use firstfit_core::{Colour, IncrementalGraph, VertexId, first_fit};
///
/// let mut graph = IncrementalGraph::new();
/// let (a, b, c) = (VertexId::new(3), VertexId::new(2), VertexId::new(1));
/// graph.add_coloured_vertex(a, Colour::new(0));
/// graph.add_coloured_vertex(b, Colour::new(1));
/// graph.add_edge(c, a)?;
/// graph.add_edge(c, b)?;
/// assert_eq!(first_fit(&graph, c)?, Colour::new(2));
/// # Ok::<(), firstfit_core::GraphError>(())
/// ```
pub fn first_fit(graph: &IncrementalGraph, vertex: VertexId) -> Result<Colour, GraphError> {
    let mut used = Vec::new();
    for &neighbour in graph.neighbours(vertex)? {
        if let Some(colour) = graph.colour(neighbour)? {
            used.push(colour);
        }
    }
    Ok(minimum_excludant(used))
}
