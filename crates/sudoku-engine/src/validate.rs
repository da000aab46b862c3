//! Cell- and grid-level validation against a reference solution.
//!
//! Everything here is derived state: recomputed on demand, never stored,
//! so it cannot go stale against the grid it describes.

use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Position};
use crate::rules::is_move_valid;

/// Validation status of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    /// The cell is empty.
    Empty,
    /// The cell matches the reference solution.
    Correct,
    /// The cell is filled but disagrees with the reference solution.
    Incorrect,
}

/// Compare one cell of `grid` against the reference `solution`.
pub fn validate_cell(grid: &Grid, row: usize, col: usize, solution: &Grid) -> CellStatus {
    let pos = Position::new(row, col);
    match grid.get(pos) {
        None => CellStatus::Empty,
        Some(value) if solution.get(pos) == Some(value) => CellStatus::Correct,
        Some(_) => CellStatus::Incorrect,
    }
}

/// Exact cell-by-cell equality between `grid` and `solution`.
pub fn check_puzzle_complete(grid: &Grid, solution: &Grid) -> bool {
    Position::all().all(|pos| grid.get(pos) == solution.get(pos))
}

/// Whether any filled cell breaks the row/column/box rules.
///
/// Independent of the reference solution: catches player-introduced
/// duplicates even when no single cell can be called "the wrong one".
pub fn has_errors(grid: &Grid) -> bool {
    Position::all().any(|pos| match grid.get(pos) {
        Some(value) => !is_move_valid(grid, pos.row, pos.col, value),
        None => false,
    })
}
