use std::io::{Read, Write};
use std::time::Instant;

use anyhow::Context;
use log::debug;
use sudograph_core::Solver;

use crate::records::PuzzleRecord;

/// Aggregate outcome of a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub solved: usize,
    pub failed: usize,
}

/// Solve up to `limit` puzzles from a CSV source.
///
/// Writes a report block per puzzle to `out` — the rendered board, the clue
/// count and difficulty echoed from the record, and the solve outcome with
/// elapsed wall time — and returns the solved/failed totals. Puzzles are
/// processed strictly sequentially; the solver's constraint graph is the
/// only state shared between them.
pub fn run_batch<R: Read, W: Write>(
    solver: &Solver,
    input: R,
    limit: usize,
    out: &mut W,
) -> anyhow::Result<BatchSummary> {
    let mut reader = csv::Reader::from_reader(input);
    let mut summary = BatchSummary::default();

    for (index, result) in reader.deserialize().take(limit).enumerate() {
        let record: PuzzleRecord = result.context("failed to read puzzle record")?;
        let mut board = record.grid()?;

        let start = Instant::now();
        let solved = solver.solve(&mut board);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        if solved {
            summary.solved += 1;
        } else {
            summary.failed += 1;
        }
        debug!("puzzle {}: solved={} in {:.3} ms", record.id, solved, elapsed_ms);

        writeln!(out, "Puzzle #{}", index + 1)?;
        writeln!(out, "{}", board)?;
        writeln!(out, "Clues: {}, Difficulty: {}", record.clues, record.difficulty)?;
        writeln!(
            out,
            "Solved: {}, Time: {:.1} ms",
            if solved { "Yes" } else { "No" },
            elapsed_ms
        )?;
        writeln!(out)?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    // Complete except for row 8's last three cells; the duplicated 9 in
    // row 7 makes the remainder impossible to fill.
    const UNSOLVABLE: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419639345286000";

    fn dataset(rows: &[(&str, &str)]) -> String {
        let mut data = String::from("id,puzzle,solution,clues,difficulty\n");
        for (id, puzzle) in rows {
            data.push_str(&format!("{},{},,30,1.5\n", id, puzzle));
        }
        data
    }

    #[test]
    fn test_batch_counts_solved_and_failed() {
        let data = dataset(&[("1", CLASSIC), ("2", UNSOLVABLE)]);
        let solver = Solver::new();
        let mut out = Vec::new();

        let summary = run_batch(&solver, data.as_bytes(), 100, &mut out).unwrap();
        assert_eq!(summary, BatchSummary { solved: 1, failed: 1 });

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("Puzzle #1"));
        assert!(report.contains("Puzzle #2"));
        assert!(report.contains("Solved: Yes"));
        assert!(report.contains("Solved: No"));
        assert!(report.contains("Clues: 30, Difficulty: 1.5"));
    }

    #[test]
    fn test_batch_honors_limit() {
        let data = dataset(&[("1", CLASSIC), ("2", CLASSIC), ("3", CLASSIC)]);
        let solver = Solver::new();
        let mut out = Vec::new();

        let summary = run_batch(&solver, data.as_bytes(), 2, &mut out).unwrap();
        assert_eq!(summary.solved, 2);
        assert_eq!(summary.failed, 0);

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("Puzzle #2"));
        assert!(!report.contains("Puzzle #3"));
    }

    #[test]
    fn test_malformed_row_fails_the_run() {
        let data = dataset(&[("1", "too-short")]);
        let solver = Solver::new();
        let mut out = Vec::new();

        assert!(run_batch(&solver, data.as_bytes(), 100, &mut out).is_err());
    }

    #[test]
    fn test_empty_dataset() {
        let data = dataset(&[]);
        let solver = Solver::new();
        let mut out = Vec::new();

        let summary = run_batch(&solver, data.as_bytes(), 100, &mut out).unwrap();
        assert_eq!(summary, BatchSummary::default());
        assert!(out.is_empty());
    }
}
