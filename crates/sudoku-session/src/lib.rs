//! Sudoku play-session management.
//!
//! Builds on `sudoku-engine` to provide the stateful side of a game:
//! the [`GameSession`] state machine (moves, snapshot history with
//! undo/redo, hints, timing, completion), a cancellable one-second
//! [`Ticker`] for the clock, and persistence/leaderboard collaborators
//! for the hosting application.

mod error;
mod leaderboard;
mod session;
mod storage;
mod timer;

pub use error::{SessionError, StoreError};
pub use leaderboard::{Leaderboard, LocalLeaderboard, MockLeaderboard, ScoreEntry};
pub use session::{GameSession, Hint, HistoryEntry};
pub use storage::{FileSessionStore, MemorySessionStore, SessionStore};
pub use timer::{spawn_session_clock, Ticker, TICK_PERIOD};
