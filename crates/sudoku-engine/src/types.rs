use serde::{Deserialize, Serialize};

/// Difficulty level of a puzzle.
///
/// Difficulty is approximated by the number of cells removed from a
/// completed grid; harder levels leave fewer givens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Number of cells removed from a completed grid (out of 81).
    pub fn removal_count(&self) -> usize {
        match self {
            Difficulty::Easy => 35,
            Difficulty::Medium => 45,
            Difficulty::Hard => 52,
            Difficulty::Expert => 60,
        }
    }

    /// Hints available for a fresh session at this difficulty.
    pub fn hint_allowance(&self) -> u32 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 3,
            Difficulty::Hard => 2,
            Difficulty::Expert => 1,
        }
    }

    /// All levels, easiest first.
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::Expert => write!(f, "Expert"),
        }
    }
}

/// How a session is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Regular timed play.
    Play,
    /// Assisted solving of a custom puzzle; the clock does not run.
    Solver,
    /// Timed challenge.
    Challenge,
    /// Daily puzzle.
    Daily,
}

impl GameMode {
    /// Whether the session clock advances in this mode.
    pub fn is_timed(&self) -> bool {
        !matches!(self, GameMode::Solver)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Play => write!(f, "Play"),
            GameMode::Solver => write!(f, "Solver"),
            GameMode::Challenge => write!(f, "Challenge"),
            GameMode::Daily => write!(f, "Daily"),
        }
    }
}
