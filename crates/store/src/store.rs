//! Mode-keyed persistence for saved games
//!
//! One save slot per mode, stored under `"GameState_" + mode`. Saves
//! merge over the stored snapshot (see [`merge_snapshot`]) and loads
//! are defensive: anything unreadable or structurally invalid is
//! reported as no save at all.

use anyhow::Result;

use blockfit_types::Mode;

use crate::kv::KvStore;
use crate::merge::merge_snapshot;
use crate::snapshot::GameSnapshot;

/// Storage key for a mode's save slot
pub fn state_key(mode: Mode) -> String {
    format!("GameState_{}", mode.as_str())
}

/// Saved-game store over any key-value backend
#[derive(Debug, Clone)]
pub struct GameStateStore<S: KvStore> {
    kv: S,
}

impl<S: KvStore> GameStateStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn backend(&self) -> &S {
        &self.kv
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.kv
    }

    pub fn into_backend(self) -> S {
        self.kv
    }

    /// Persist a snapshot into its mode's slot
    ///
    /// Load-merge-save: sticky fields missing from `snapshot` are kept
    /// from the stored save instead of being dropped.
    pub fn save(&mut self, mode: Mode, snapshot: &GameSnapshot) -> Result<()> {
        let merged = match self.load(mode) {
            Some(stored) => merge_snapshot(&stored, snapshot),
            None => snapshot.clone(),
        };
        let json = serde_json::to_string(&merged)?;
        self.kv.set(&state_key(mode), json);
        Ok(())
    }

    /// Load the snapshot saved for `mode`
    ///
    /// Returns `None` when the key is absent, the JSON does not parse,
    /// the mode tag does not match the slot, or the snapshot fails
    /// structural validation.
    pub fn load(&self, mode: Mode) -> Option<GameSnapshot> {
        let raw = self.kv.get(&state_key(mode))?;
        let snapshot: GameSnapshot = serde_json::from_str(&raw).ok()?;
        if Mode::from(snapshot.mode) != mode || !snapshot.is_valid() {
            return None;
        }
        Some(snapshot)
    }

    /// Drop the save for `mode`, if any
    pub fn delete(&mut self, mode: Mode) {
        self.kv.remove(&state_key(mode));
    }

    /// Whether a loadable save exists for `mode`
    pub fn has_save(&self, mode: Mode) -> bool {
        self.load(mode).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use blockfit_core::GameSession;
    use blockfit_types::GameRules;

    fn snapshot(mode: Mode) -> GameSnapshot {
        GameSnapshot::capture(&GameSession::new(mode, GameRules::default(), 9, 0))
    }

    #[test]
    fn test_keys_are_mode_scoped() {
        assert_eq!(state_key(Mode::Classic), "GameState_classic");
        assert_eq!(state_key(Mode::Timed), "GameState_timed");
        assert_eq!(state_key(Mode::Adventure), "GameState_adventure");
    }

    #[test]
    fn test_save_load_delete() {
        let mut store = GameStateStore::new(MemoryStore::new());
        assert!(!store.has_save(Mode::Classic));

        store.save(Mode::Classic, &snapshot(Mode::Classic)).unwrap();
        assert!(store.has_save(Mode::Classic));
        // Other modes are untouched
        assert!(!store.has_save(Mode::Timed));

        store.delete(Mode::Classic);
        assert_eq!(store.load(Mode::Classic), None);
    }

    #[test]
    fn test_load_rejects_garbage_and_mismatches() {
        let mut store = GameStateStore::new(MemoryStore::new());

        store
            .backend_mut()
            .set(&state_key(Mode::Classic), "not json".to_string());
        assert_eq!(store.load(Mode::Classic), None);

        // A timed snapshot under the classic key does not load
        let timed = serde_json::to_string(&snapshot(Mode::Timed)).unwrap();
        store.backend_mut().set(&state_key(Mode::Classic), timed);
        assert_eq!(store.load(Mode::Classic), None);

        // Structurally broken saves read as absent
        let mut broken = snapshot(Mode::Classic);
        broken.grid.cells.pop();
        let json = serde_json::to_string(&broken).unwrap();
        store.backend_mut().set(&state_key(Mode::Classic), json);
        assert_eq!(store.load(Mode::Classic), None);
    }

    #[test]
    fn test_save_merges_sticky_fields() {
        let mut store = GameStateStore::new(MemoryStore::new());

        let mut first = snapshot(Mode::Classic);
        first.has_used_reward = Some(true);
        first.high_score_at_start = Some(300);
        store.save(Mode::Classic, &first).unwrap();

        let mut second = snapshot(Mode::Classic);
        second.score = 50;
        second.has_used_reward = None;
        second.high_score_at_start = None;
        store.save(Mode::Classic, &second).unwrap();

        let loaded = store.load(Mode::Classic).unwrap();
        assert_eq!(loaded.score, 50);
        assert_eq!(loaded.has_used_reward, Some(true));
        assert_eq!(loaded.high_score_at_start, Some(300));
    }

    #[test]
    fn test_save_overwrites_explicit_values() {
        let mut store = GameStateStore::new(MemoryStore::new());

        let mut first = snapshot(Mode::Classic);
        first.has_used_reward = Some(true);
        store.save(Mode::Classic, &first).unwrap();

        let mut second = snapshot(Mode::Classic);
        second.has_used_reward = Some(false);
        store.save(Mode::Classic, &second).unwrap();

        let loaded = store.load(Mode::Classic).unwrap();
        assert_eq!(loaded.has_used_reward, Some(false));
    }
}
