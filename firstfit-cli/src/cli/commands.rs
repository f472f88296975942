//! Command implementations and argument parsing for the firstfit CLI.

use std::{fs, io, num::NonZeroUsize, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use firstfit_core::{
    ColouringSummary, IncrementalGraph, SamplingMode, SimulationBuilder, SimulationError,
    StepRecord, SweepError, SweepPlan, SweepReport, UniformAdversary,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::{
    palette::{MAX_PALETTE_SIZE, Palette},
    render::dot_document,
};

const DEFAULT_NODES: usize = 10;
const DEFAULT_SAMPLE_INDUCTIVENESS: usize = 2;
const DEFAULT_SWEEP_INDUCTIVENESS: usize = 5;
const DEFAULT_SWEEP_START: usize = 100;
const DEFAULT_SWEEP_END: usize = 10_001;
const DEFAULT_SWEEP_STEP: usize = 100;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "firstfit",
    about = "Simulate online first-fit colouring of d-inductive graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run one simulation and print its colouring.
    Sample(SampleCommand),
    /// Run one simulation per node count and inductiveness and print how many
    /// colours each used.
    Sweep(SweepCommand),
}

/// Options accepted by the `sample` command.
#[derive(Debug, Args, Clone)]
pub struct SampleCommand {
    /// Number of vertices.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Edges requested by each arriving vertex.
    #[arg(long, short = 'd', default_value_t = DEFAULT_SAMPLE_INDUCTIVENESS)]
    pub inductiveness: usize,

    /// Seed for the random adversary; drawn from entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// How the adversary draws neighbours.
    #[arg(long, value_enum, default_value_t = SamplingArg::WithReplacement)]
    pub sampling: SamplingArg,

    /// Print one line per arrival.
    #[arg(long)]
    pub trace: bool,

    /// Write a Graphviz rendering of the coloured graph to this path.
    #[arg(long)]
    pub dot: Option<PathBuf>,

    /// Number of display colours; defaults to one more than the inductiveness.
    #[arg(long)]
    pub palette_size: Option<NonZeroUsize>,

    /// Seed for the display palette.
    #[arg(long, default_value_t = 0)]
    pub palette_seed: u64,
}

/// Options accepted by the `sweep` command.
#[derive(Debug, Args, Clone)]
pub struct SweepCommand {
    /// Edges requested by each arriving vertex; the first value when
    /// `--inductiveness-end` is given.
    #[arg(long, short = 'd', default_value_t = DEFAULT_SWEEP_INDUCTIVENESS)]
    pub inductiveness: usize,

    /// Exclusive upper bound on the inductiveness; sweeps a single value
    /// when omitted.
    #[arg(long)]
    pub inductiveness_end: Option<usize>,

    /// Distance between consecutive inductiveness values.
    #[arg(long, default_value_t = 1)]
    pub inductiveness_step: usize,

    /// Smallest node count.
    #[arg(long, default_value_t = DEFAULT_SWEEP_START)]
    pub start: usize,

    /// Exclusive upper bound on the node count.
    #[arg(long, default_value_t = DEFAULT_SWEEP_END)]
    pub end: usize,

    /// Distance between consecutive node counts.
    #[arg(long, default_value_t = DEFAULT_SWEEP_STEP)]
    pub step: usize,

    /// Base seed; drawn from entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// How the adversary draws neighbours.
    #[arg(long, value_enum, default_value_t = SamplingArg::WithReplacement)]
    pub sampling: SamplingArg,

    /// Output format.
    #[arg(long, value_enum, default_value_t = SweepFormat::Text)]
    pub format: SweepFormat,
}

/// Neighbour sampling modes accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SamplingArg {
    /// Draw each neighbour independently; repeats collapse into one edge.
    WithReplacement,
    /// Draw distinct neighbours.
    Distinct,
}

impl From<SamplingArg> for SamplingMode {
    fn from(value: SamplingArg) -> Self {
        match value {
            SamplingArg::WithReplacement => Self::WithReplacement,
            SamplingArg::Distinct => Self::Distinct,
        }
    }
}

/// Output formats for the `sweep` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SweepFormat {
    /// One summary line per run and the total elapsed time.
    Text,
    /// `node_count,inductiveness,colours_used,elapsed_ms` rows.
    Csv,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing an output file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The requested palette holds more colours than `#rrggbb` can express.
    #[error("palette size {requested} exceeds the {max} available display colours")]
    PaletteTooLarge {
        /// Palette size requested.
        requested: usize,
        /// Largest supported palette.
        max: usize,
    },
    /// A simulation could not be configured, run or rendered.
    #[error(transparent)]
    Core(#[from] SimulationError),
    /// A sweep could not be planned or executed.
    #[error(transparent)]
    Sweep(#[from] SweepError),
}

impl CliError {
    /// Returns the stable code of the underlying library error, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Core(error) => Some(error.code().as_str()),
            Self::Sweep(error) => Some(error.code().as_str()),
            Self::Io { .. } | Self::PaletteTooLarge { .. } => None,
        }
    }
}

/// Result of the `sample` command.
#[derive(Debug, Clone)]
pub struct SampleOutcome {
    /// Headline statistics of the run.
    pub summary: ColouringSummary,
    /// The finished graph.
    pub graph: IncrementalGraph,
    /// Per-arrival records when `--trace` was given.
    pub steps: Option<Vec<StepRecord>>,
    /// Seed the adversary used.
    pub seed: u64,
}

/// Result of the `sweep` command.
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    /// Collected sweep results.
    pub report: SweepReport,
    /// Format requested for rendering.
    pub format: SweepFormat,
}

/// Outcome of any CLI command, ready for rendering.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Produced by `sample`.
    Sample(SampleOutcome),
    /// Produced by `sweep`.
    Sweep(SweepOutcome),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the parameters are rejected, a run fails, or an
/// output file cannot be written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use firstfit_cli::cli::{Cli, Outcome, run_cli};
/// # use clap::Parser;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli::try_parse_from(["firstfit", "sample", "--seed", "7"])?;
/// let Outcome::Sample(sample) = run_cli(cli)? else {
///     unreachable!("sample was requested");
/// };
/// assert_eq!(sample.summary.vertices(), 10);
/// assert_eq!(sample.seed, 7);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<Outcome, CliError> {
    match cli.command {
        Command::Sample(sample) => {
            Span::current().record("command", "sample");
            run_sample(sample).map(Outcome::Sample)
        }
        Command::Sweep(sweep) => {
            Span::current().record("command", "sweep");
            run_sweep(sweep).map(Outcome::Sweep)
        }
    }
}

#[instrument(
    name = "cli.sample",
    err,
    skip(command),
    fields(
        nodes = command.nodes,
        inductiveness = command.inductiveness,
        seed = field::Empty,
    ),
)]
pub(super) fn run_sample(command: SampleCommand) -> Result<SampleOutcome, CliError> {
    let palette_size = command
        .palette_size
        .unwrap_or_else(|| NonZeroUsize::MIN.saturating_add(command.inductiveness));
    let simulation = SimulationBuilder::new()
        .with_node_count(command.nodes)
        .with_inductiveness(command.inductiveness)
        .with_sampling(command.sampling.into())
        .with_palette_limit(palette_size)
        .build()?;
    let palette = match &command.dot {
        Some(_) => Some(
            Palette::generate(palette_size.get(), command.palette_seed).ok_or(
                CliError::PaletteTooLarge {
                    requested: palette_size.get(),
                    max: MAX_PALETTE_SIZE,
                },
            )?,
        ),
        None => None,
    };

    let seed = command.seed.unwrap_or_else(rand::random);
    Span::current().record("seed", seed);
    let adversary = UniformAdversary::seeded(seed);
    let (graph, steps) = if command.trace {
        let (graph, steps) = simulation.run_traced(adversary)?;
        (graph, Some(steps))
    } else {
        (simulation.run(adversary)?, None)
    };

    if let (Some(path), Some(palette)) = (&command.dot, &palette) {
        let document = dot_document(&graph, palette)?;
        fs::write(path, document).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "graph rendering written");
    }

    let summary = ColouringSummary::from_graph(&graph, simulation.inductiveness());
    info!(%summary, seed, "sample completed");
    Ok(SampleOutcome {
        summary,
        graph,
        steps,
        seed,
    })
}

#[instrument(
    name = "cli.sweep",
    err,
    skip(command),
    fields(
        inductiveness = command.inductiveness,
        inductiveness_end = command.inductiveness_end,
        start = command.start,
        end = command.end,
        step = command.step,
    ),
)]
pub(super) fn run_sweep(command: SweepCommand) -> Result<SweepOutcome, CliError> {
    let inductiveness_end = command
        .inductiveness_end
        .unwrap_or_else(|| command.inductiveness.saturating_add(1));
    let plan = SweepPlan::grid(
        command.start..command.end,
        command.step,
        command.inductiveness..inductiveness_end,
        command.inductiveness_step,
    )?
    .with_sampling(command.sampling.into());
    let plan = match command.seed {
        Some(seed) => plan.with_seed(seed),
        None => plan,
    };
    let report = plan.execute()?;
    info!(
        runs = report.points().len(),
        seed = report.seed(),
        "sweep command completed"
    );
    Ok(SweepOutcome {
        report,
        format: command.format,
    })
}
