//! Core Sudoku engine.
//!
//! Pure puzzle logic with no I/O: the grid data model, the row/column/box
//! constraint checker, an exhaustive backtracking solver, a randomized
//! puzzle generator, and solution-comparison validation. Session state,
//! persistence, and presentation live in the `sudoku-session` crate.

mod generator;
mod grid;
mod rules;
mod solver;
mod types;
mod validate;

pub use generator::Generator;
pub use grid::{Grid, Position, BOX_SIZE, GRID_SIZE};
pub use rules::is_move_valid;
pub use solver::Solver;
pub use types::{Difficulty, GameMode};
pub use validate::{check_puzzle_complete, has_errors, validate_cell, CellStatus};
