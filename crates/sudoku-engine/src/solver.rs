//! Backtracking Sudoku solver.

use crate::grid::{Grid, Position};
use crate::rules::is_move_valid;

/// Exhaustive depth-first solver.
///
/// Empty cells are visited in row-major order and candidates tried in
/// ascending order 1-9, so the result is deterministic for a fixed
/// input grid. Stateless; all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning the completed grid if one exists.
    ///
    /// Works on a private copy; the caller's grid is never mutated.
    /// When the input admits several completions (the generator does not
    /// guarantee uniqueness) the deterministic search returns the first
    /// one found.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        if solve_recursive(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Verify that a fully-filled grid is self-consistent.
    ///
    /// Checks every cell against the row/column/box rules without
    /// reference to any stored solution, so an alternate-but-valid
    /// completion passes. Returns false if any cell is empty.
    pub fn check_solution(&self, grid: &Grid) -> bool {
        for pos in Position::all() {
            match grid.get(pos) {
                Some(value) => {
                    if !is_move_valid(grid, pos.row, pos.col, value) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

fn solve_recursive(grid: &mut Grid) -> bool {
    let pos = match grid.first_empty() {
        Some(pos) => pos,
        None => return true,
    };

    for value in 1..=9 {
        if is_move_valid(grid, pos.row, pos.col, value) {
            grid.set(pos, Some(value));
            if solve_recursive(grid) {
                return true;
            }
            grid.set(pos, None);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_solve_known_puzzle() {
        let grid = Grid::from_string(EASY).unwrap();
        let solver = Solver::new();
        let solution = solver.solve(&grid).unwrap();

        assert!(solution.is_full());
        assert!(solver.check_solution(&solution));

        // Givens are preserved.
        for pos in Position::all() {
            if let Some(v) = grid.get(pos) {
                assert_eq!(solution.get(pos), Some(v));
            }
        }
    }

    #[test]
    fn test_input_grid_not_mutated() {
        let grid = Grid::from_string(EASY).unwrap();
        let before = grid.clone();
        Solver::new().solve(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_unsatisfiable_grid() {
        // Two 5s in the first row make the puzzle contradictory.
        let mut grid = Grid::from_string(EASY).unwrap();
        grid.set(Position::new(0, 2), Some(5));
        assert!(Solver::new().solve(&grid).is_none());
    }

    #[test]
    fn test_solve_is_deterministic() {
        let grid = Grid::from_string(EASY).unwrap();
        let solver = Solver::new();
        let a = solver.solve(&grid).unwrap();
        let b = solver.solve(&grid).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_resolve_cleared_cell() {
        // Clearing one cell of a valid completion must re-solve to the
        // same completion.
        let solved =
            "123456789456789123789123456234567891567891234891234567345678912678912345912345678";
        let full = Grid::from_string(solved).unwrap();
        let mut punched = full.clone();
        punched.set(Position::new(0, 0), None);

        let result = Solver::new().solve(&punched).unwrap();
        assert_eq!(result, full);
    }

    #[test]
    fn test_check_solution_rejects_incomplete() {
        let grid = Grid::from_string(EASY).unwrap();
        assert!(!Solver::new().check_solution(&grid));
    }

    #[test]
    fn test_check_solution_rejects_duplicates() {
        let solved =
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
        let mut grid = Grid::from_string(solved).unwrap();
        grid.set(Position::new(0, 0), Some(3));
        assert!(!Solver::new().check_solution(&grid));
    }

    #[test]
    fn test_solve_empty_grid() {
        let solution = Solver::new().solve(&Grid::new()).unwrap();
        assert!(solution.is_full());
        assert!(Solver::new().check_solution(&solution));
    }
}
