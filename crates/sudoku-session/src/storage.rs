//! Session persistence.
//!
//! A store holds at most one serialized session snapshot under a fixed
//! key, so a reload of the hosting application can resume where the
//! player left off. The snapshot format is opaque JSON produced by the
//! session's serde implementation.

use log::warn;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::StoreError;
use crate::session::GameSession;

/// Persistence collaborator for session snapshots.
pub trait SessionStore: Send + Sync {
    /// Persist a snapshot, replacing any previous one.
    fn save(&self, session: &GameSession) -> Result<(), StoreError>;

    /// Restore the stored snapshot, if any. A missing snapshot is `Ok(None)`.
    fn load(&self) -> Result<Option<GameSession>, StoreError>;

    /// Remove the stored snapshot.
    fn clear(&self) -> Result<(), StoreError>;
}

/// File-backed store under the platform data directory.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store at the default location (`sudoku_session.json` in the
    /// platform's local data directory).
    pub fn new() -> Self {
        let path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sudoku_session.json");
        Self { path }
    }

    /// Store at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &GameSession) -> Result<(), StoreError> {
        let json = serde_json::to_string(session)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<GameSession>, StoreError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&json) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // A corrupt save should not brick the host; report it and
                // let the caller start fresh.
                warn!("discarding corrupt session snapshot: {}", e);
                Err(e.into())
            }
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &GameSession) -> Result<(), StoreError> {
        let json = serde_json::to_string(session)?;
        *self.slot.lock().unwrap() = Some(json);
        Ok(())
    }

    fn load(&self) -> Result<Option<GameSession>, StoreError> {
        match self.slot.lock().unwrap().as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudoku_engine::{Difficulty, GameMode, Generator};

    fn sample_session() -> GameSession {
        let mut generator = Generator::with_seed(42);
        GameSession::with_generator(&mut generator, Difficulty::Easy, GameMode::Play).unwrap()
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert!(store.load().unwrap().is_none());

        let mut session = sample_session();
        session.tick();
        store.save(&session).unwrap();

        let restored = store.load().unwrap().unwrap();
        assert_eq!(restored.current(), session.current());
        assert_eq!(restored.timer_secs(), 1);

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store_save_replaces() {
        let store = MemorySessionStore::new();
        let mut session = sample_session();
        store.save(&session).unwrap();

        let pos = session.current().first_empty().unwrap();
        session.set_value(pos.row, pos.col, Some(1));
        store.save(&session).unwrap();

        let restored = store.load().unwrap().unwrap();
        assert_eq!(restored.history_len(), 2);
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "sudoku_session_test_{}.json",
            std::process::id()
        ));
        let store = FileSessionStore::with_path(path.clone());
        let _ = store.clear();

        assert!(store.load().unwrap().is_none());

        let session = sample_session();
        store.save(&session).unwrap();
        let restored = store.load().unwrap().unwrap();
        assert_eq!(restored.original(), session.original());

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_file_store_corrupt_data_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "sudoku_session_corrupt_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::with_path(path.clone());
        assert!(store.load().is_err());
        let _ = std::fs::remove_file(path);
    }
}
