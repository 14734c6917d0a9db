use anyhow::anyhow;
use serde::Deserialize;
use sudograph_core::Grid;

/// One row of a puzzle dataset.
///
/// Matches the `id,puzzle,solution,clues,difficulty` column layout of the
/// common CSV Sudoku datasets. The `solution` column travels with the data
/// but is never consulted; `clues` and `difficulty` are echoed in reports,
/// not derived.
#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleRecord {
    pub id: String,
    pub puzzle: String,
    #[serde(default)]
    pub solution: String,
    pub clues: u32,
    pub difficulty: f64,
}

impl PuzzleRecord {
    /// Convert the 81-character clue string into a board.
    pub fn grid(&self) -> anyhow::Result<Grid> {
        Grid::from_string(&self.puzzle)
            .ok_or_else(|| anyhow!("puzzle {}: not a valid 81-character clue string", self.id))
    }
}
