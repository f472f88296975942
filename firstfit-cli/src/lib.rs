//! Support library for the `firstfit` binary.
//!
//! Exposes the command pipeline and logging setup so doctests and
//! integration tests can drive commands without spawning a process.

pub mod cli;
pub mod logging;
