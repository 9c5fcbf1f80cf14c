use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use paint_robot_core::{GridPainter, PaintConfig, PaintResult, parse_instructions, wander};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("source").args(["instructions", "file", "wander"])))]
struct Args {
    /// Directions to run, in order (up, down, left, right)
    #[arg(value_name = "DIRECTION")]
    instructions: Vec<String>,

    /// Instruction file with one direction per line
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Run this many randomly generated directions
    #[arg(long, value_name = "COUNT")]
    wander: Option<usize>,

    /// Seed for --wander
    #[arg(long, requires = "wander")]
    seed: Option<u64>,

    /// Number of rows in the grid
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Number of columns in the grid
    #[arg(long, default_value_t = 10)]
    columns: usize,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("paint_robot_core={level},paint_robot_cli={level}"))
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Picks the instruction source named on the command line and runs it.
fn run(args: &Args) -> Result<PaintResult> {
    let config = PaintConfig::new(args.rows, args.columns);
    let painter = GridPainter::new(config).context("Invalid grid size")?;

    if let Some(path) = &args.file {
        info!(path = %path.display(), "reading instructions");
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read instruction file {}", path.display()))?;
        let directions = parse_instructions(&text)
            .with_context(|| format!("Failed to parse instruction file {}", path.display()))?;
        return painter
            .paint_directions(&directions)
            .context("Paint run failed");
    }

    if let Some(count) = args.wander {
        let seed = args.seed.unwrap_or(0);
        debug!(count, seed, "generating instructions");
        return painter
            .paint_directions(&wander(count, seed))
            .context("Paint run failed");
    }

    painter.paint(&args.instructions).context("Paint run failed")
}

fn render(result: &PaintResult, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(result).context("Failed to encode result");
    }
    Ok(format!(
        "final_location: [{}, {}]\npainted_spaces: {}",
        result.final_location.x, result.final_location.y, result.painted_spaces
    ))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = run(&args)?;
    println!("{}", render(&result, args.json)?);

    Ok(())
}
