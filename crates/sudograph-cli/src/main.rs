mod records;
mod runner;

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::debug;
use sudograph_core::Solver;

use runner::run_batch;

/// Batch-solve Sudoku puzzles from a CSV dataset
#[derive(Parser)]
#[command(name = "sudograph", version, about)]
struct Cli {
    /// Puzzle dataset (CSV with id,puzzle,solution,clues,difficulty columns)
    file: PathBuf,

    /// Maximum number of puzzles to solve
    #[arg(long, default_value_t = 100)]
    limit: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let solver = Solver::new();
    debug!("constraint graph ready: {} edges", solver.graph().edge_count());

    let file = File::open(&cli.file)
        .with_context(|| format!("failed to open {}", cli.file.display()))?;

    let stdout = io::stdout();
    let summary = run_batch(&solver, file, cli.limit, &mut stdout.lock())?;

    println!("Total Solved: {}", summary.solved);
    println!("Total Failed: {}", summary.failed);

    Ok(())
}
