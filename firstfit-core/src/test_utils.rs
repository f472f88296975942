//! Shared test utilities for `firstfit-core`.

use firstfit_test_support::proptest_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{adversary::Adversary, graph::VertexId};

/// Builds a standard proptest configuration from the shared run profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        ..ProptestConfig::default()
    }
}

/// Adversary that always joins the candidate with the smallest identifier.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LowestId;

impl Adversary for LowestId {
    fn pick(&mut self, _vertex: VertexId, candidates: &[VertexId]) -> usize {
        candidates
            .iter()
            .enumerate()
            .min_by_key(|(_, id)| **id)
            .map_or(0, |(index, _)| index)
    }
}

/// Adversary that replays a fixed script of indices, wrapping around.
#[derive(Clone, Debug)]
pub(crate) struct Scripted {
    picks: Vec<usize>,
    cursor: usize,
}

impl Scripted {
    pub(crate) fn new(picks: Vec<usize>) -> Self {
        Self { picks, cursor: 0 }
    }
}

impl Adversary for Scripted {
    fn pick(&mut self, _vertex: VertexId, _candidates: &[VertexId]) -> usize {
        let pick = self
            .picks
            .get(self.cursor % self.picks.len().max(1))
            .copied()
            .unwrap_or_default();
        self.cursor += 1;
        pick
    }
}
