//! Online first-fit colouring of d-inductive graphs.
//!
//! Vertices arrive one at a time, each joined to `d` earlier vertices chosen
//! by an [`Adversary`], and first-fit immediately gives every arrival the
//! smallest colour none of its neighbours uses. The crate measures how many
//! colours that greedy rule needs as the graph grows.
//!
//! - [`IncrementalGraph`] stores vertices, symmetric neighbour sets, and
//!   optional colour labels.
//! - [`Simulation`] (built by [`SimulationBuilder`]) drives the arrival
//!   protocol; [`Run`] exposes it one step at a time.
//! - [`SweepPlan`] repeats runs over a grid of node counts and inductiveness
//!   values.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the engine emits:
//!
//! - `firstfit_vertices_coloured` (counter)
//! - `firstfit_colours_used` (histogram, recorded once per completed run)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adversary;
mod builder;
mod colouring;
mod engine;
mod error;
mod graph;
mod summary;
mod sweep;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    adversary::{Adversary, UniformAdversary, derive_run_seed},
    builder::{SamplingMode, SimulationBuilder},
    colouring::{Colour, first_fit, minimum_excludant},
    engine::{Run, Simulation, StepRecord},
    error::{
        GraphError, GraphErrorCode, Result, SimulationError, SimulationErrorCode, SweepError,
        SweepErrorCode,
    },
    graph::{Edge, IncrementalGraph, VertexId},
    summary::ColouringSummary,
    sweep::{SweepPlan, SweepPoint, SweepReport},
};
