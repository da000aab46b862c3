//! Leaderboard backend abstraction.
//!
//! The session layer only appends completed-game entries and reads a
//! ranked top-N view; how entries are stored is the backend's business.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;
use sudoku_engine::Difficulty;

use crate::error::StoreError;

/// Entries kept per backend; older slow times fall off the end.
const MAX_ENTRIES: usize = 1000;

/// One completed game on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub time_secs: u64,
    pub difficulty: Difficulty,
    /// Completion date, ISO `YYYY-MM-DD`, supplied by the host.
    pub date: String,
}

/// Leaderboard collaborator. Append-only from the session's point of view.
pub trait Leaderboard: Send + Sync {
    /// Record a completed game.
    fn submit(&self, entry: ScoreEntry) -> Result<(), StoreError>;

    /// Top `limit` entries by ascending completion time, optionally
    /// filtered by difficulty. Position in the returned vector is rank.
    fn top(
        &self,
        difficulty: Option<Difficulty>,
        limit: usize,
    ) -> Result<Vec<ScoreEntry>, StoreError>;
}

/// Insert preserving ascending-time order, bounded to `MAX_ENTRIES`.
fn insert_ranked(entries: &mut Vec<ScoreEntry>, entry: ScoreEntry) {
    let pos = entries
        .iter()
        .position(|e| e.time_secs > entry.time_secs)
        .unwrap_or(entries.len());
    entries.insert(pos, entry);
    entries.truncate(MAX_ENTRIES);
}

fn ranked_view(
    entries: &[ScoreEntry],
    difficulty: Option<Difficulty>,
    limit: usize,
) -> Vec<ScoreEntry> {
    entries
        .iter()
        .filter(|e| difficulty.is_none_or(|d| e.difficulty == d))
        .take(limit)
        .cloned()
        .collect()
}

/// File-backed leaderboard under the platform data directory.
pub struct LocalLeaderboard {
    path: PathBuf,
    cache: Mutex<Option<Vec<ScoreEntry>>>,
}

impl LocalLeaderboard {
    pub fn new() -> Self {
        let path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sudoku_leaderboard.json");
        Self::with_path(path)
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            cache: Mutex::new(None),
        }
    }

    fn load(&self) -> Result<Vec<ScoreEntry>, StoreError> {
        let mut cache = self.cache.lock().unwrap();
        if let Some(ref entries) = *cache {
            return Ok(entries.clone());
        }

        let entries = match std::fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str(&json)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        *cache = Some(entries.clone());
        Ok(entries)
    }

    fn store(&self, entries: Vec<ScoreEntry>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, json)?;
        *self.cache.lock().unwrap() = Some(entries);
        Ok(())
    }
}

impl Default for LocalLeaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Leaderboard for LocalLeaderboard {
    fn submit(&self, entry: ScoreEntry) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        insert_ranked(&mut entries, entry);
        self.store(entries)
    }

    fn top(
        &self,
        difficulty: Option<Difficulty>,
        limit: usize,
    ) -> Result<Vec<ScoreEntry>, StoreError> {
        Ok(ranked_view(&self.load()?, difficulty, limit))
    }
}

/// In-memory leaderboard for tests.
#[derive(Default)]
pub struct MockLeaderboard {
    entries: Mutex<Vec<ScoreEntry>>,
}

impl MockLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

impl Leaderboard for MockLeaderboard {
    fn submit(&self, entry: ScoreEntry) -> Result<(), StoreError> {
        insert_ranked(&mut self.entries.lock().unwrap(), entry);
        Ok(())
    }

    fn top(
        &self,
        difficulty: Option<Difficulty>,
        limit: usize,
    ) -> Result<Vec<ScoreEntry>, StoreError> {
        Ok(ranked_view(&self.entries.lock().unwrap(), difficulty, limit))
    }
}
