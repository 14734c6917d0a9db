//! Basic example of using the constraint-graph Sudoku engine

use sudograph_core::{Grid, Solver};

fn main() {
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let puzzle = Grid::from_string(puzzle_string).expect("valid 81-character clue string");

    println!("Puzzle:");
    println!("{}", puzzle);
    println!("Given cells: {}", puzzle.given_count());
    println!("Empty cells: {}", puzzle.empty_count());

    let solver = Solver::new();
    println!("Constraint graph edges: {}", solver.graph().edge_count());

    println!("\nSolving...\n");
    match solver.solution(&puzzle) {
        Some(solution) => {
            println!("Solution:");
            println!("{}", solution);
        }
        None => println!("No solution found"),
    }
}
