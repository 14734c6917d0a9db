//! Constraint-graph Sudoku engine.
//!
//! The 81 cells of a 9×9 board form a fixed graph in which two cells are
//! adjacent when they must hold different digits (same row, column, or 3×3
//! box). [`ConstraintGraph`] builds that adjacency once; [`Solver`] runs a
//! depth-first backtracking search over a [`Grid`], testing each candidate
//! digit against the cell's neighbor set.

mod graph;
mod grid;
mod solver;

pub use graph::ConstraintGraph;
pub use grid::{Grid, Position};
pub use solver::Solver;
