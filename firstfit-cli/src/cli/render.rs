//! Text, CSV and Graphviz renderings of command outcomes.

use std::io::{self, Write};

use firstfit_core::{IncrementalGraph, SimulationError, StepRecord, SweepReport};

use super::{
    commands::{Outcome, SampleOutcome, SweepFormat, SweepOutcome},
    palette::Palette,
};

/// Renders `outcome` to `writer` in the format its command selected.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use firstfit_cli::cli::{Cli, render_outcome, run_cli};
/// # use clap::Parser;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli::try_parse_from(["firstfit", "sample", "--nodes", "3", "--seed", "1"])?;
/// let outcome = run_cli(cli)?;
/// let mut buffer = Vec::new();
/// render_outcome(&outcome, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("Number of nodes: 3, 2-inductive"));
/// # Ok(())
/// # }
/// ```
pub fn render_outcome(outcome: &Outcome, writer: impl Write) -> io::Result<()> {
    match outcome {
        Outcome::Sample(sample) => render_sample(sample, writer),
        Outcome::Sweep(sweep) => render_sweep(sweep, writer),
    }
}

fn render_sample(sample: &SampleOutcome, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{}", sample.summary)?;
    if let Some(steps) = &sample.steps {
        for (index, record) in steps.iter().enumerate() {
            writeln!(writer, "{}", trace_line(index + 1, record))?;
        }
    }
    let mut colours: Vec<_> = sample.graph.colours().collect();
    colours.reverse();
    for (vertex, colour) in colours {
        match colour {
            Some(colour) => writeln!(writer, "{vertex}\t{colour}")?,
            None => writeln!(writer, "{vertex}\t-")?,
        }
    }
    for edge in sample.graph.edges() {
        writeln!(writer, "{}\t{}", edge.low(), edge.high())?;
    }
    Ok(())
}

fn trace_line(step: usize, record: &StepRecord) -> String {
    let requested = record
        .requested()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "step {step}\t{}\t{}\t{}\t{requested}",
        record.vertex(),
        record.back_degree(),
        record.colour()
    )
}

fn render_sweep(sweep: &SweepOutcome, writer: impl Write) -> io::Result<()> {
    match sweep.format {
        SweepFormat::Text => render_sweep_text(&sweep.report, writer),
        SweepFormat::Csv => render_sweep_csv(&sweep.report, writer),
    }
}

fn render_sweep_text(report: &SweepReport, mut writer: impl Write) -> io::Result<()> {
    for point in report.points() {
        writeln!(writer, "{}", point.summary())?;
    }
    writeln!(
        writer,
        "Elapsed time: {:.3}s",
        report.elapsed().as_secs_f64()
    )
}

fn render_sweep_csv(report: &SweepReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "node_count,inductiveness,colours_used,elapsed_ms")?;
    for point in report.points() {
        writeln!(
            writer,
            "{},{},{},{}",
            point.node_count(),
            point.inductiveness(),
            point.colours_used(),
            point.elapsed().as_millis()
        )?;
    }
    Ok(())
}

/// Builds a Graphviz DOT document for `graph`, filling each vertex with its
/// palette colour. Uncoloured vertices are left unfilled.
///
/// # Errors
/// Returns [`SimulationError::ExhaustedPalette`] when a vertex carries a
/// colour past the end of `palette`.
///
/// # Examples
/// ```
/// use firstfit_cli::cli::{Palette, dot_document};
/// use firstfit_core::{Colour, IncrementalGraph, VertexId};
///
/// let mut graph = IncrementalGraph::new();
/// graph.add_coloured_vertex(VertexId::new(2), Colour::new(0));
/// graph.add_coloured_vertex(VertexId::new(1), Colour::new(1));
/// graph.add_edge(VertexId::new(1), VertexId::new(2))?;
///
/// let palette = Palette::generate(2, 0).expect("size is within range");
/// let dot = dot_document(&graph, &palette)?;
/// assert!(dot.starts_with("graph firstfit {"));
/// assert!(dot.contains("  1 -- 2;"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn dot_document(
    graph: &IncrementalGraph,
    palette: &Palette,
) -> Result<String, SimulationError> {
    let mut lines = vec![
        "graph firstfit {".to_owned(),
        "  node [style=filled];".to_owned(),
    ];
    for (vertex, colour) in graph.colours() {
        lines.push(match colour {
            Some(colour) => {
                let fill = palette.hex(colour)?;
                format!(
                    "  {vertex} [label=\"{vertex}\", fillcolor=\"{fill}\", \
                     tooltip=\"colour {colour}\"];"
                )
            }
            None => format!("  {vertex} [label=\"{vertex}\", style=\"\"];"),
        });
    }
    lines.extend(
        graph
            .edges()
            .map(|edge| format!("  {} -- {};", edge.low(), edge.high())),
    );
    lines.push("}\n".to_owned());
    Ok(lines.join("\n"))
}
