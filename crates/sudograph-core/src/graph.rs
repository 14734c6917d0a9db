use crate::Position;
use std::collections::HashSet;

/// Adjacency structure over the 81 cells of the board.
///
/// Two cells are neighbors when they must hold different digits: same row,
/// same column, or same 3×3 box. The graph depends only on board geometry,
/// so one instance serves every puzzle; it is never mutated after
/// construction. Each cell has exactly 20 neighbors (8 row + 8 column + 4
/// remaining box peers) and the relation is symmetric.
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    /// Neighbor lists indexed by `Position::index()`
    neighbors: Vec<Vec<Position>>,
}

impl Default for ConstraintGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintGraph {
    /// Build the graph for the fixed 9×9 topology.
    pub fn new() -> Self {
        let mut neighbors = Vec::with_capacity(81);

        for row in 0..9 {
            for col in 0..9 {
                let mut peers = HashSet::new();

                for c in 0..9 {
                    if c != col {
                        peers.insert(Position::new(row, c));
                    }
                }

                for r in 0..9 {
                    if r != row {
                        peers.insert(Position::new(r, col));
                    }
                }

                let box_row = (row / 3) * 3;
                let box_col = (col / 3) * 3;
                for r in box_row..box_row + 3 {
                    for c in box_col..box_col + 3 {
                        if r != row || c != col {
                            peers.insert(Position::new(r, c));
                        }
                    }
                }

                let mut list: Vec<Position> = peers.into_iter().collect();
                list.sort_unstable();
                neighbors.push(list);
            }
        }

        Self { neighbors }
    }

    /// Cells that must differ from `pos`
    pub fn neighbors(&self, pos: Position) -> &[Position] {
        &self.neighbors[pos.index()]
    }

    /// Number of neighbors of `pos` (20 for every cell)
    pub fn degree(&self, pos: Position) -> usize {
        self.neighbors[pos.index()].len()
    }

    /// Total number of undirected edges, as a diagnostic.
    ///
    /// Half the sum of all neighbor-list lengths; not used by solving.
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }
}
