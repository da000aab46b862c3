//! The play-session state machine.
//!
//! A `GameSession` owns all mutable state of one puzzle-playing instance:
//! the working grid, the fixed original puzzle, the reference solution,
//! the undo/redo snapshot history, hints, timer, and completion flag.
//! Every operation is an atomic step: it reads the current state,
//! computes the next one, and publishes it; nothing blocks.

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use sudoku_engine::{
    check_puzzle_complete, validate_cell, CellStatus, Difficulty, GameMode, Generator, Grid,
    Position, Solver,
};

use crate::error::SessionError;

/// One immutable grid snapshot plus its creation time (unix seconds).
///
/// Entries are never mutated once appended; `current` always holds its
/// own copy, so a snapshot cannot be edited through an alias.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub grid: Grid,
    pub timestamp: u64,
}

/// A hint that was applied to the working grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub pos: Position,
    pub value: u8,
}

/// The full mutable state of one puzzle-playing instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// The player's working grid.
    current: Grid,
    /// The immutable starting puzzle; non-empty cells here are fixed.
    original: Grid,
    /// The completed grid computed at session creation.
    solution: Grid,
    /// Difficulty selected at creation; immutable for the session.
    difficulty: Difficulty,
    /// Mode selected at creation; immutable for the session.
    mode: GameMode,
    /// Elapsed whole seconds; advances only while incomplete and timed.
    timer_secs: u64,
    /// Hints left, bounded by the difficulty's allowance.
    hints_remaining: u32,
    /// True once `current` exactly equals `solution`.
    is_complete: bool,
    /// Snapshot history; `history[history_index]` is the active entry.
    history: Vec<HistoryEntry>,
    history_index: usize,
}

impl GameSession {
    /// Start a new game: generate a puzzle and solve it for bookkeeping.
    ///
    /// On `Err` the caller's previous session (if any) is untouched --
    /// construction either yields a fully-initialized session or nothing.
    pub fn new(difficulty: Difficulty, mode: GameMode) -> Result<Self, SessionError> {
        Self::with_generator(&mut Generator::new(), difficulty, mode)
    }

    /// Start a new game from a caller-supplied (possibly seeded) generator.
    pub fn with_generator(
        generator: &mut Generator,
        difficulty: Difficulty,
        mode: GameMode,
    ) -> Result<Self, SessionError> {
        let puzzle = generator.generate(difficulty);

        // Generation always starts from a valid filled grid, so this
        // cannot fail in practice; handled anyway so a solver bug cannot
        // corrupt the caller's state.
        let solution = Solver::new().solve(&puzzle).ok_or(SessionError::Unsolvable)?;

        info!("new {} game at {}", mode, difficulty);
        Ok(Self::from_parts(puzzle, solution, difficulty, mode, difficulty.hint_allowance()))
    }

    /// Start a session from a custom puzzle supplied by the player.
    ///
    /// The puzzle is solved to obtain the reference solution; an
    /// unsolvable grid is rejected. Custom sessions run in `Solver` mode
    /// with no hint allowance.
    pub fn from_custom_puzzle(grid: Grid) -> Result<Self, SessionError> {
        let solution = Solver::new().solve(&grid).ok_or(SessionError::Unsolvable)?;
        info!("loaded custom puzzle with {} givens", grid.filled_count());
        Ok(Self::from_parts(grid, solution, Difficulty::Medium, GameMode::Solver, 0))
    }

    fn from_parts(
        puzzle: Grid,
        solution: Grid,
        difficulty: Difficulty,
        mode: GameMode,
        hints: u32,
    ) -> Self {
        let history = vec![HistoryEntry {
            grid: puzzle.clone(),
            timestamp: unix_now(),
        }];
        Self {
            current: puzzle.clone(),
            original: puzzle,
            solution,
            difficulty,
            mode,
            timer_secs: 0,
            hints_remaining: hints,
            is_complete: false,
            history,
            history_index: 0,
        }
    }

    /// Write `value` (or clear with `None`) at (`row`, `col`).
    ///
    /// Fixed cells are immutable: writing to one is a silent no-op, not
    /// an error. Each applied move snapshots the new grid, discarding any
    /// redoable future (branch-on-write), and recomputes completion.
    /// Returns whether the move was applied.
    pub fn set_value(&mut self, row: usize, col: usize, value: Option<u8>) -> bool {
        if self.is_complete {
            return false;
        }
        let pos = Position::new(row, col);
        if self.original.get(pos).is_some() {
            return false;
        }

        let mut next = self.current.clone();
        next.set(pos, value);
        self.commit(next);
        true
    }

    /// Step back one history entry. No-op at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if self.is_complete || self.history_index == 0 {
            return false;
        }
        self.history_index -= 1;
        self.current = self.history[self.history_index].grid.clone();
        true
    }

    /// Step forward one history entry. No-op at the newest entry.
    pub fn redo(&mut self) -> bool {
        if self.is_complete || self.history_index + 1 >= self.history.len() {
            return false;
        }
        self.history_index += 1;
        self.current = self.history[self.history_index].grid.clone();
        true
    }

    /// Fill one random empty cell from the solution.
    ///
    /// No-op when the session is complete, no hints remain, or no empty
    /// cell exists. An applied hint goes through the same history
    /// discipline as a move.
    pub fn hint(&mut self) -> Option<Hint> {
        self.hint_with(&mut rand::thread_rng())
    }

    /// `hint` with a caller-supplied RNG, for deterministic tests.
    pub fn hint_with<R: Rng>(&mut self, rng: &mut R) -> Option<Hint> {
        if self.is_complete || self.hints_remaining == 0 {
            return None;
        }

        let empty = self.current.empty_positions();
        if empty.is_empty() {
            return None;
        }

        let pos = empty[rng.gen_range(0..empty.len())];
        // The solution grid is full by construction.
        let value = self.solution.get(pos)?;

        let mut next = self.current.clone();
        next.set(pos, Some(value));
        self.commit(next);
        self.hints_remaining -= 1;

        debug!(
            "hint applied at ({}, {}); {} remaining",
            pos.row, pos.col, self.hints_remaining
        );
        Some(Hint { pos, value })
    }

    /// Auto-solve: copy the solution into the working grid.
    ///
    /// Terminal action -- deliberately not recorded in history, so it
    /// cannot be undone. Starting or restarting the session is the only
    /// way out of the completed state.
    pub fn solve(&mut self) {
        self.current = self.solution.clone();
        self.is_complete = true;
        info!("session auto-solved after {}s", self.timer_secs);
    }

    /// Reset play state while keeping the same puzzle and solution.
    pub fn restart(&mut self) {
        self.current = self.original.clone();
        self.timer_secs = 0;
        self.is_complete = false;
        self.hints_remaining = self.difficulty.hint_allowance();
        self.history = vec![HistoryEntry {
            grid: self.original.clone(),
            timestamp: unix_now(),
        }];
        self.history_index = 0;
        debug!("session restarted");
    }

    /// Advance the clock by one second.
    ///
    /// Guarded here as well as at the ticker: a stale tick reaching a
    /// finished or untimed session changes nothing.
    pub fn tick(&mut self) {
        if !self.is_complete && self.mode.is_timed() {
            self.timer_secs += 1;
        }
    }

    /// Validation status of one cell against the stored solution.
    pub fn validate_cell(&self, row: usize, col: usize) -> CellStatus {
        validate_cell(&self.current, row, col, &self.solution)
    }

    /// Snapshot the new grid, truncating any redo branch.
    fn commit(&mut self, next: Grid) {
        self.history.truncate(self.history_index + 1);
        self.history.push(HistoryEntry {
            grid: next.clone(),
            timestamp: unix_now(),
        });
        self.history_index = self.history.len() - 1;
        self.current = next;

        if check_puzzle_complete(&self.current, &self.solution) {
            self.is_complete = true;
            info!(
                "puzzle completed in {}s at {}",
                self.timer_secs, self.difficulty
            );
        }
    }

    // Getters

    pub fn current(&self) -> &Grid {
        &self.current
    }
    pub fn original(&self) -> &Grid {
        &self.original
    }
    pub fn solution(&self) -> &Grid {
        &self.solution
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    pub fn mode(&self) -> GameMode {
        self.mode
    }
    pub fn timer_secs(&self) -> u64 {
        self.timer_secs
    }
    pub fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
    pub fn history_index(&self) -> usize {
        self.history_index
    }
    pub fn can_undo(&self) -> bool {
        !self.is_complete && self.history_index > 0
    }
    pub fn can_redo(&self) -> bool {
        !self.is_complete && self.history_index + 1 < self.history.len()
    }

    /// Format the elapsed time as MM:SS.
    pub fn timer_string(&self) -> String {
        format!("{:02}:{:02}", self.timer_secs / 60, self.timer_secs % 60)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
