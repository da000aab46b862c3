//! Row/column/box uniqueness rules.

use crate::grid::{Grid, BOX_SIZE, GRID_SIZE};

/// Check whether placing `value` at (`row`, `col`) is legal.
///
/// Returns false if `value` already occurs elsewhere in the same row,
/// column, or 3x3 box. The probed cell itself is excluded from the
/// comparison, so a value already written at (`row`, `col`) can be
/// re-validated in place. Pure: the grid is never modified.
pub fn is_move_valid(grid: &Grid, row: usize, col: usize, value: u8) -> bool {
    let values = grid.values();

    for x in 0..GRID_SIZE {
        if x != col && values[row][x] == Some(value) {
            return false;
        }
        if x != row && values[x][col] == Some(value) {
            return false;
        }
    }

    let start_row = row / BOX_SIZE * BOX_SIZE;
    let start_col = col / BOX_SIZE * BOX_SIZE;

    for r in start_row..start_row + BOX_SIZE {
        for c in start_col..start_col + BOX_SIZE {
            if (r != row || c != col) && values[r][c] == Some(value) {
                return false;
            }
        }
    }

    true
}
