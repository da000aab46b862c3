use thiserror::Error;

/// Failures surfaced by session construction.
///
/// Everything else in the state machine degrades to a no-op that leaves
/// the session unchanged (writes to fixed cells, undo/redo at the
/// history bounds, hints with none remaining).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The solver found no completion for the puzzle.
    #[error("puzzle has no solution")]
    Unsolvable,
}

/// Failures from persistence collaborators.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt stored data: {0}")]
    Corrupt(#[from] serde_json::Error),
}
