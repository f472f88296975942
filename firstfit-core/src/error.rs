//! Error types for the firstfit core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::{colouring::Colour, graph::VertexId};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::IncrementalGraph`] queries and mutations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The vertex is not present in the graph.
    #[error("vertex {vertex} is not present in the graph")]
    VertexNotFound {
        /// Identifier that failed to resolve.
        vertex: VertexId,
    },
    /// An edge was requested from a vertex to itself.
    #[error("vertex {vertex} cannot be joined to itself")]
    SelfLoop {
        /// Both endpoints of the rejected edge.
        vertex: VertexId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The vertex is not present in the graph.
        VertexNotFound => VertexNotFound { .. } => "GRAPH_VERTEX_NOT_FOUND",
        /// An edge was requested from a vertex to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
    }
}

/// Error type produced when configuring or running a [`crate::Simulation`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SimulationError {
    /// The node count must be at least one.
    #[error("node_count must be at least 1 (got {got})")]
    InvalidNodeCount {
        /// The invalid node count supplied by the caller.
        got: usize,
    },
    /// Every arrival would request more distinct neighbours than exist.
    #[error(
        "inductiveness {inductiveness} must be smaller than node_count {node_count}"
    )]
    InductivenessTooLarge {
        /// Edges requested per arriving vertex.
        inductiveness: usize,
        /// Number of vertices in the run.
        node_count: usize,
    },
    /// First-fit produced a colour beyond the caller's palette.
    #[error("colour {colour} does not fit a palette of {palette_size} colours")]
    ExhaustedPalette {
        /// Colour selected by first-fit.
        colour: Colour,
        /// Number of colours the caller can represent.
        palette_size: usize,
    },
    /// The adversary was asked to choose from an empty candidate set.
    #[error("no candidate neighbours exist for vertex {vertex}")]
    EmptyCandidates {
        /// Vertex being wired into the graph.
        vertex: VertexId,
    },
    /// The adversary answered with an index outside the candidate slice.
    #[error("adversary picked index {index} for vertex {vertex} but only {candidates} candidates exist")]
    AdversaryOutOfRange {
        /// Vertex being wired into the graph.
        vertex: VertexId,
        /// Index returned by the adversary.
        index: usize,
        /// Number of candidates offered.
        candidates: usize,
    },
    /// A graph operation failed while running the protocol.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`SimulationError`] variants.
    enum SimulationErrorCode for SimulationError {
        /// The node count must be at least one.
        InvalidNodeCount => InvalidNodeCount { .. } => "SIMULATION_INVALID_NODE_COUNT",
        /// Every arrival would request more distinct neighbours than exist.
        InductivenessTooLarge => InductivenessTooLarge { .. } => "SIMULATION_INDUCTIVENESS_TOO_LARGE",
        /// First-fit produced a colour beyond the caller's palette.
        ExhaustedPalette => ExhaustedPalette { .. } => "SIMULATION_EXHAUSTED_PALETTE",
        /// The adversary was asked to choose from an empty candidate set.
        EmptyCandidates => EmptyCandidates { .. } => "SIMULATION_EMPTY_CANDIDATES",
        /// The adversary answered with an index outside the candidate slice.
        AdversaryOutOfRange => AdversaryOutOfRange { .. } => "SIMULATION_ADVERSARY_OUT_OF_RANGE",
        /// A graph operation failed while running the protocol.
        GraphFailure => Graph(..) => "SIMULATION_GRAPH_FAILURE",
    }
}

impl SimulationError {
    /// Reports whether the error stems from invalid construction parameters.
    ///
    /// # Examples
    /// ```
    /// use firstfit_core::SimulationError;
    ///
    /// assert!(SimulationError::InvalidNodeCount { got: 0 }.is_configuration());
    /// ```
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidNodeCount { .. } | Self::InductivenessTooLarge { .. }
        )
    }

    /// Retrieve the inner [`GraphErrorCode`] when the error originated in the graph.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Error type produced when planning or executing a [`crate::SweepPlan`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SweepError {
    /// The node-count step must be positive.
    #[error("sweep step must be at least 1")]
    ZeroStep,
    /// The node-count range holds no values.
    #[error("sweep range {start}..{end} is empty")]
    EmptyRange {
        /// First node count requested.
        start: usize,
        /// Exclusive upper bound requested.
        end: usize,
    },
    /// The inductiveness step must be positive.
    #[error("inductiveness step must be at least 1")]
    ZeroInductivenessStep,
    /// The inductiveness range holds no values.
    #[error("inductiveness range {start}..{end} is empty")]
    EmptyInductivenessRange {
        /// First inductiveness requested.
        start: usize,
        /// Exclusive upper bound requested.
        end: usize,
    },
    /// A run within the sweep could not be configured or completed.
    #[error("run with {node_count} vertices at inductiveness {inductiveness} failed: {error}")]
    Simulation {
        /// Node count of the failing run.
        node_count: usize,
        /// Inductiveness of the failing run.
        inductiveness: usize,
        #[source]
        /// Underlying simulation error.
        error: SimulationError,
    },
}

define_error_codes! {
    /// Stable codes describing [`SweepError`] variants.
    enum SweepErrorCode for SweepError {
        /// The node-count step must be positive.
        ZeroStep => ZeroStep => "SWEEP_ZERO_STEP",
        /// The node-count range holds no values.
        EmptyRange => EmptyRange { .. } => "SWEEP_EMPTY_RANGE",
        /// The inductiveness step must be positive.
        ZeroInductivenessStep => ZeroInductivenessStep => "SWEEP_ZERO_INDUCTIVENESS_STEP",
        /// The inductiveness range holds no values.
        EmptyInductivenessRange => EmptyInductivenessRange { .. } => "SWEEP_EMPTY_INDUCTIVENESS_RANGE",
        /// A run within the sweep could not be configured or completed.
        SimulationFailure => Simulation { .. } => "SWEEP_SIMULATION_FAILURE",
    }
}

impl SweepError {
    /// Retrieve the inner [`SimulationErrorCode`] when a run failed.
    #[must_use]
    pub const fn simulation_code(&self) -> Option<SimulationErrorCode> {
        match self {
            Self::Simulation { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the simulation API.
pub type Result<T> = core::result::Result<T, SimulationError>;
