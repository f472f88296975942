//! Benchmark support crate for firstfit.
//!
//! Provides parameter types, setup errors, and seeded workloads shared by
//! the Criterion benchmarks for single runs and node-count sweeps.

pub mod error;
pub mod params;
pub mod workload;
