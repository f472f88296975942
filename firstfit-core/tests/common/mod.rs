use firstfit_core::{Adversary, VertexId};

/// Always joins the candidate with the smallest identifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowestId;

impl Adversary for LowestId {
    fn pick(&mut self, _vertex: VertexId, candidates: &[VertexId]) -> usize {
        candidates
            .iter()
            .enumerate()
            .min_by_key(|(_, id)| **id)
            .map_or(0, |(index, _)| index)
    }
}

/// Always joins the most recent arrival, producing a path.
#[derive(Clone, Copy, Debug, Default)]
pub struct Newest;

impl Adversary for Newest {
    fn pick(&mut self, _vertex: VertexId, candidates: &[VertexId]) -> usize {
        candidates.len().saturating_sub(1)
    }
}
