use std::error::Error as _;

use firstfit_core::{
    Colour, GraphError, GraphErrorCode, SimulationError, SimulationErrorCode, SweepError,
    SweepErrorCode, VertexId,
};
use rstest::rstest;

#[rstest]
#[case(
    GraphError::VertexNotFound { vertex: VertexId::new(3) },
    GraphErrorCode::VertexNotFound,
    "GRAPH_VERTEX_NOT_FOUND",
)]
#[case(
    GraphError::SelfLoop { vertex: VertexId::new(1) },
    GraphErrorCode::SelfLoop,
    "GRAPH_SELF_LOOP",
)]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] text: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), text);
    assert_eq!(expected.to_string(), text);
}

#[rstest]
#[case(
    SimulationError::InvalidNodeCount { got: 0 },
    SimulationErrorCode::InvalidNodeCount,
    None,
)]
#[case(
    SimulationError::InductivenessTooLarge { inductiveness: 4, node_count: 4 },
    SimulationErrorCode::InductivenessTooLarge,
    None,
)]
#[case(
    SimulationError::ExhaustedPalette { colour: Colour::new(7), palette_size: 7 },
    SimulationErrorCode::ExhaustedPalette,
    None,
)]
#[case(
    SimulationError::EmptyCandidates { vertex: VertexId::new(2) },
    SimulationErrorCode::EmptyCandidates,
    None,
)]
#[case(
    SimulationError::AdversaryOutOfRange { vertex: VertexId::new(2), index: 9, candidates: 1 },
    SimulationErrorCode::AdversaryOutOfRange,
    None,
)]
#[case(
    SimulationError::Graph(GraphError::SelfLoop { vertex: VertexId::new(5) }),
    SimulationErrorCode::GraphFailure,
    Some(GraphErrorCode::SelfLoop),
)]
fn returns_expected_simulation_code(
    #[case] error: SimulationError,
    #[case] expected: SimulationErrorCode,
    #[case] graph_code: Option<GraphErrorCode>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
    assert_eq!(error.graph_code(), graph_code);
}

#[rstest]
#[case(SweepError::ZeroStep, SweepErrorCode::ZeroStep, None)]
#[case(
    SweepError::EmptyRange { start: 5, end: 5 },
    SweepErrorCode::EmptyRange,
    None,
)]
#[case(SweepError::ZeroInductivenessStep, SweepErrorCode::ZeroInductivenessStep, None)]
#[case(
    SweepError::EmptyInductivenessRange { start: 9, end: 2 },
    SweepErrorCode::EmptyInductivenessRange,
    None,
)]
#[case(
    SweepError::Simulation {
        node_count: 3,
        inductiveness: 3,
        error: SimulationError::InductivenessTooLarge { inductiveness: 3, node_count: 3 },
    },
    SweepErrorCode::SimulationFailure,
    Some(SimulationErrorCode::InductivenessTooLarge),
)]
fn returns_expected_sweep_code(
    #[case] error: SweepError,
    #[case] expected: SweepErrorCode,
    #[case] simulation_code: Option<SimulationErrorCode>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.simulation_code(), simulation_code);
}

#[rstest]
fn exhausted_palette_message_names_colour_and_size() {
    let error = SimulationError::ExhaustedPalette {
        colour: Colour::new(12),
        palette_size: 12,
    };
    assert_eq!(
        error.to_string(),
        "colour 12 does not fit a palette of 12 colours"
    );
}

#[rstest]
fn sweep_failures_expose_their_source() {
    let error = SweepError::Simulation {
        node_count: 2,
        inductiveness: 1,
        error: SimulationError::InvalidNodeCount { got: 0 },
    };
    assert!(error.to_string().starts_with("run with 2 vertices at inductiveness 1 failed"));
    let source = error.source().expect("simulation error is the source");
    assert_eq!(source.to_string(), "node_count must be at least 1 (got 0)");
}

#[rstest]
fn graph_errors_convert_into_simulation_errors() {
    let error: SimulationError = GraphError::VertexNotFound {
        vertex: VertexId::new(8),
    }
    .into();
    assert_eq!(error.to_string(), "vertex 8 is not present in the graph");
    assert!(!error.is_configuration());
}
