//! Property-based tests for the online colouring engine.
//!
//! Each case draws a node count, an inductiveness below it, a sampling mode
//! and a seed, runs the simulation with a seeded [`UniformAdversary`], and
//! checks the finished graph against the invariants of first-fit colouring.

use proptest::{
    prelude::*,
    test_runner::{TestCaseError, TestCaseResult},
};

use crate::{
    adversary::UniformAdversary,
    builder::{SamplingMode, SimulationBuilder},
    colouring::{Colour, minimum_excludant},
    engine::{Simulation, StepRecord},
    graph::{IncrementalGraph, VertexId},
    test_utils::suite_proptest_config,
};

const MAX_NODES: usize = 120;
const MAX_INDUCTIVENESS: usize = 8;

#[derive(Clone, Copy, Debug)]
struct Case {
    node_count: usize,
    inductiveness: usize,
    sampling: SamplingMode,
    seed: u64,
}

impl Case {
    fn simulation(&self) -> Result<Simulation, TestCaseError> {
        SimulationBuilder::new()
            .with_node_count(self.node_count)
            .with_inductiveness(self.inductiveness)
            .with_sampling(self.sampling)
            .build()
            .map_err(|err| TestCaseError::fail(format!("invalid case {self:?}: {err}")))
    }

    fn run(&self) -> Result<(IncrementalGraph, Vec<StepRecord>), TestCaseError> {
        self.simulation()?
            .run_traced(UniformAdversary::seeded(self.seed))
            .map_err(|err| TestCaseError::fail(format!("run failed for {self:?}: {err}")))
    }
}

fn case_strategy() -> impl Strategy<Value = Case> {
    (1..=MAX_NODES)
        .prop_flat_map(|node_count| {
            let max_d = MAX_INDUCTIVENESS.min(node_count.saturating_sub(1));
            (
                Just(node_count),
                0..=max_d,
                prop_oneof![Just(SamplingMode::WithReplacement), Just(SamplingMode::Distinct)],
                any::<u64>(),
            )
        })
        .prop_map(|(node_count, inductiveness, sampling, seed)| Case {
            node_count,
            inductiveness,
            sampling,
            seed,
        })
}

fn colour_of(graph: &IncrementalGraph, vertex: VertexId) -> Result<Colour, TestCaseError> {
    graph
        .colour(vertex)
        .map_err(|err| TestCaseError::fail(err.to_string()))?
        .ok_or_else(|| TestCaseError::fail(format!("vertex {vertex} left uncoloured")))
}

fn check_proper_colouring(graph: &IncrementalGraph) -> TestCaseResult {
    for edge in graph.edges() {
        let (low, high) = (colour_of(graph, edge.low())?, colour_of(graph, edge.high())?);
        prop_assert_ne!(low, high, "edge {:?} is monochromatic", edge);
    }
    Ok(())
}

/// Neighbours with larger identifiers arrived earlier, so they are exactly
/// the neighbours that were coloured when `vertex` was.
fn check_mex(graph: &IncrementalGraph) -> TestCaseResult {
    for vertex in graph.vertices() {
        let neighbours = graph
            .neighbours(vertex)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let earlier = neighbours
            .iter()
            .filter(|&&neighbour| neighbour > vertex)
            .map(|&neighbour| colour_of(graph, neighbour))
            .collect::<Result<Vec<_>, _>>()?;
        prop_assert_eq!(colour_of(graph, vertex)?, minimum_excludant(earlier));
    }
    Ok(())
}

fn check_records(case: &Case, records: &[StepRecord]) -> TestCaseResult {
    prop_assert_eq!(records.len(), case.node_count - 1);
    for record in records {
        prop_assert!(record.back_degree() <= case.inductiveness);
        if case.inductiveness >= 1 {
            prop_assert!(record.back_degree() >= 1);
        }
        if case.sampling == SamplingMode::Distinct {
            let existing = case.node_count - usize::try_from(record.vertex().get())
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
            prop_assert_eq!(record.back_degree(), existing.min(case.inductiveness));
        }
        prop_assert!(record.colour().get() <= record.back_degree());
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn colouring_is_proper(case in case_strategy()) {
        let (graph, _) = case.run()?;
        check_proper_colouring(&graph)?;
    }

    #[test]
    fn every_colour_is_the_mex_of_earlier_neighbours(case in case_strategy()) {
        let (graph, _) = case.run()?;
        check_mex(&graph)?;
    }

    #[test]
    fn colours_never_exceed_inductiveness(case in case_strategy()) {
        let (graph, _) = case.run()?;
        let max = graph.unique_colours().last().copied().unwrap_or(Colour::FIRST);
        prop_assert!(max.get() <= case.inductiveness);
        prop_assert!(!graph.unique_colours().is_empty());
    }

    #[test]
    fn back_degree_stays_within_bounds(case in case_strategy()) {
        let (_, records) = case.run()?;
        check_records(&case, &records)?;
    }

    #[test]
    fn seeded_runs_are_deterministic(case in case_strategy()) {
        let (first, first_records) = case.run()?;
        let (second, second_records) = case.run()?;
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_records, second_records);
    }

    #[test]
    fn every_vertex_is_present_and_coloured(case in case_strategy()) {
        let (graph, _) = case.run()?;
        prop_assert_eq!(graph.vertex_count(), case.node_count);
        for vertex in graph.vertices() {
            colour_of(&graph, vertex)?;
        }
    }

    #[test]
    fn repeated_edges_leave_the_graph_unchanged(
        pairs in prop::collection::vec((1_u64..30, 1_u64..30), 0..60),
    ) {
        let mut once = IncrementalGraph::new();
        let mut twice = IncrementalGraph::new();
        for &(left, right) in pairs.iter().filter(|(left, right)| left != right) {
            let (left, right) = (VertexId::new(left), VertexId::new(right));
            once.add_edge(left, right).map_err(|err| TestCaseError::fail(err.to_string()))?;
            twice.add_edge(left, right).map_err(|err| TestCaseError::fail(err.to_string()))?;
            let repeated = twice
                .add_edge(right, left)
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
            prop_assert!(!repeated);
        }
        prop_assert_eq!(once, twice);
    }
}
