//! Unit tests for the online colouring engine.

use std::num::NonZeroUsize;

use rstest::rstest;

use crate::{
    Result,
    adversary::UniformAdversary,
    builder::{SamplingMode, SimulationBuilder},
    colouring::Colour,
    engine::Simulation,
    error::SimulationError,
    graph::{Edge, IncrementalGraph, VertexId},
    test_utils::{LowestId, Scripted},
};

fn simulation(node_count: usize, inductiveness: usize, sampling: SamplingMode) -> Simulation {
    SimulationBuilder::new()
        .with_node_count(node_count)
        .with_inductiveness(inductiveness)
        .with_sampling(sampling)
        .build()
        .expect("test configuration must be valid")
}

fn colours_by_vertex(graph: &IncrementalGraph) -> Vec<(u64, Option<usize>)> {
    graph
        .colours()
        .map(|(id, colour)| (id.get(), colour.map(Colour::get)))
        .collect()
}

#[rstest]
fn single_vertex_run_is_one_precoloured_vertex() -> Result<()> {
    let graph = simulation(1, 0, SamplingMode::WithReplacement).run(LowestId)?;
    assert_eq!(colours_by_vertex(&graph), vec![(1, Some(0))]);
    assert_eq!(graph.edge_count(), 0);
    Ok(())
}

#[rstest]
fn single_vertex_run_accepts_any_inductiveness() -> Result<()> {
    let graph = simulation(1, 7, SamplingMode::WithReplacement).run(LowestId)?;
    assert_eq!(graph.vertex_count(), 1);
    Ok(())
}

#[rstest]
#[case::with_replacement(SamplingMode::WithReplacement)]
#[case::distinct(SamplingMode::Distinct)]
fn lowest_id_adversary_builds_alternating_path(#[case] sampling: SamplingMode) -> Result<()> {
    let graph = simulation(4, 1, sampling).run(LowestId)?;
    let edges: Vec<(u64, u64)> = graph
        .edges()
        .map(|edge| (edge.low().get(), edge.high().get()))
        .collect();
    assert_eq!(edges, vec![(1, 2), (2, 3), (3, 4)]);
    assert_eq!(
        colours_by_vertex(&graph),
        vec![(1, Some(1)), (2, Some(0)), (3, Some(1)), (4, Some(0))]
    );
    Ok(())
}

#[rstest]
fn repeated_draws_collapse_into_one_edge() -> Result<()> {
    let (_, records) = simulation(5, 4, SamplingMode::WithReplacement).run_traced(LowestId)?;
    for record in &records {
        assert_eq!(record.requested().len(), 4);
        assert_eq!(record.back_degree(), 1);
    }
    Ok(())
}

#[rstest]
fn distinct_sampling_with_maximal_inductiveness_builds_a_clique() -> Result<()> {
    let graph = simulation(5, 4, SamplingMode::Distinct).run(LowestId)?;
    assert_eq!(graph.edge_count(), 10);
    let expected: Vec<Colour> = (0..5).map(Colour::new).collect();
    assert_eq!(graph.unique_colours().into_iter().collect::<Vec<_>>(), expected);
    Ok(())
}

#[rstest]
fn distinct_sampling_requests_each_neighbour_once() -> Result<()> {
    let (_, records) =
        simulation(30, 6, SamplingMode::Distinct).run_traced(UniformAdversary::seeded(17))?;
    for record in &records {
        let existing = usize::try_from(30 - record.vertex().get()).expect("fits in usize");
        let mut requested = record.requested().to_vec();
        requested.sort();
        requested.dedup();
        assert_eq!(requested.len(), record.requested().len());
        assert_eq!(record.back_degree(), existing.min(6));
    }
    Ok(())
}

#[rstest]
fn step_walks_the_state_machine() -> Result<()> {
    let simulation = simulation(3, 1, SamplingMode::WithReplacement);
    let mut run = simulation.start(LowestId);
    assert_eq!(run.remaining(), 2);
    assert_eq!(run.graph().vertex_count(), 1);

    let first = run.step()?.expect("vertex 2 arrives");
    assert_eq!(first.vertex(), VertexId::new(2));
    assert_eq!(first.requested(), &[VertexId::new(3)]);
    assert_eq!(first.colour(), Colour::new(1));

    let second = run.step()?.expect("vertex 1 arrives");
    assert_eq!(second.vertex(), VertexId::new(1));
    assert!(run.is_done());
    assert_eq!(run.step()?, None);
    assert_eq!(run.graph().vertex_count(), 3);
    Ok(())
}

#[rstest]
fn finish_completes_a_partial_run() -> Result<()> {
    let simulation = simulation(6, 2, SamplingMode::WithReplacement);
    let mut run = simulation.start(UniformAdversary::seeded(4));
    run.step()?;
    let finished = run.finish()?;
    let direct = simulation.run(UniformAdversary::seeded(4))?;
    assert_eq!(finished, direct);
    Ok(())
}

#[rstest]
fn out_of_range_pick_is_reported() {
    let err = simulation(3, 1, SamplingMode::WithReplacement)
        .run(Scripted::new(vec![5]))
        .expect_err("index 5 is outside a single candidate");
    assert_eq!(
        err,
        SimulationError::AdversaryOutOfRange {
            vertex: VertexId::new(2),
            index: 5,
            candidates: 1,
        }
    );
}

#[rstest]
fn palette_limit_is_enforced_after_selection() {
    let limit = NonZeroUsize::new(1).expect("non-zero");
    let simulation = SimulationBuilder::new()
        .with_node_count(4)
        .with_inductiveness(1)
        .with_palette_limit(limit)
        .build()
        .expect("configuration must be valid");
    let err = simulation
        .run(LowestId)
        .expect_err("the second vertex needs colour 1");
    assert_eq!(
        err,
        SimulationError::ExhaustedPalette {
            colour: Colour::new(1),
            palette_size: 1,
        }
    );
}

#[rstest]
fn failed_run_repeats_its_error_without_advancing() {
    let limit = NonZeroUsize::new(1).expect("non-zero");
    let simulation = SimulationBuilder::new()
        .with_node_count(4)
        .with_inductiveness(1)
        .with_palette_limit(limit)
        .build()
        .expect("configuration must be valid");
    let mut run = simulation.start(LowestId);
    let expected = SimulationError::ExhaustedPalette {
        colour: Colour::new(1),
        palette_size: 1,
    };

    assert_eq!(run.step(), Err(expected.clone()));
    let graph = run.graph().clone();
    assert_eq!(graph.colour(VertexId::new(3)), Ok(None));
    assert_eq!(run.failure(), Some(&expected));

    for _ in 0..3 {
        assert_eq!(run.step(), Err(expected.clone()));
    }
    assert_eq!(run.remaining(), 3);
    assert_eq!(run.graph(), &graph);
    assert_eq!(run.finish(), Err(expected));
}

#[rstest]
fn generous_palette_limit_changes_nothing() -> Result<()> {
    let limit = NonZeroUsize::new(3).expect("non-zero");
    let capped = SimulationBuilder::new()
        .with_palette_limit(limit)
        .build()?
        .run(UniformAdversary::seeded(8))?;
    let uncapped = SimulationBuilder::new()
        .build()?
        .run(UniformAdversary::seeded(8))?;
    assert_eq!(capped, uncapped);
    Ok(())
}

#[rstest]
fn zero_inductiveness_colours_everything_zero() -> Result<()> {
    let graph = simulation(12, 0, SamplingMode::WithReplacement).run(LowestId)?;
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.unique_colours().len(), 1);
    Ok(())
}

#[rstest]
fn sample_run_stays_within_three_colours() -> Result<()> {
    let graph =
        simulation(10, 2, SamplingMode::WithReplacement).run(UniformAdversary::seeded(99))?;
    let used = graph.unique_colours().len();
    assert!((1..=3).contains(&used), "used {used} colours");
    assert!(graph.edges().all(|edge: Edge| edge.low() != edge.high()));
    Ok(())
}

#[rstest]
#[case(0, 5, SimulationError::InvalidNodeCount { got: 0 })]
#[case(4, 4, SimulationError::InductivenessTooLarge { inductiveness: 4, node_count: 4 })]
#[case(2, 9, SimulationError::InductivenessTooLarge { inductiveness: 9, node_count: 2 })]
fn builder_rejects_invalid_parameters(
    #[case] node_count: usize,
    #[case] inductiveness: usize,
    #[case] expected: SimulationError,
) {
    let err = SimulationBuilder::new()
        .with_node_count(node_count)
        .with_inductiveness(inductiveness)
        .build()
        .expect_err("configuration must be rejected");
    assert!(err.is_configuration());
    assert_eq!(err, expected);
}
