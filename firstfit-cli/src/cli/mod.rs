//! Command-line interface for the firstfit simulator.
//!
//! `sample` runs one simulation and prints its colouring, optionally with a
//! per-arrival trace and a Graphviz rendering. `sweep` repeats runs over a
//! range of node counts and reports how many colours each needed.

mod commands;
mod palette;
mod render;

pub use commands::{
    Cli, CliError, Command, Outcome, SampleCommand, SampleOutcome, SamplingArg, SweepCommand,
    SweepFormat, SweepOutcome, run_cli,
};
pub use palette::{MAX_PALETTE_SIZE, Palette};
pub use render::{dot_document, render_outcome};
