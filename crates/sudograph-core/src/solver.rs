use crate::{ConstraintGraph, Grid, Position};

/// Backtracking Sudoku solver backed by the constraint graph.
///
/// Cells are filled in row-major order, candidates tried 1–9 ascending, so
/// the first solution found is deterministic for a given puzzle.
pub struct Solver {
    graph: ConstraintGraph,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver, building the constraint graph once.
    pub fn new() -> Self {
        Self {
            graph: ConstraintGraph::new(),
        }
    }

    /// The underlying constraint graph.
    pub fn graph(&self) -> &ConstraintGraph {
        &self.graph
    }

    /// Solve the grid in place.
    ///
    /// Returns `true` with the grid fully filled when a completion exists,
    /// or `false` with the grid restored to its original state when the
    /// search exhausts. A grid whose givens already contradict each other
    /// is not detected up front; it exhausts and returns `false` like any
    /// other unsolvable puzzle.
    pub fn solve(&self, grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => return true,
        };

        for digit in 1..=9 {
            if self.is_safe(grid, pos, digit) {
                grid.set(pos, digit);
                if self.solve(grid) {
                    return true;
                }
                grid.set(pos, 0);
            }
        }

        false
    }

    /// Solve a copy, leaving the input untouched.
    pub fn solution(&self, grid: &Grid) -> Option<Grid> {
        let mut working = *grid;
        if self.solve(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// A digit is safe at `pos` when no graph neighbor currently holds it.
    fn is_safe(&self, grid: &Grid, pos: Position, digit: u8) -> bool {
        self.graph
            .neighbors(pos)
            .iter()
            .all(|&neighbor| grid.get(neighbor) != digit)
    }
}
