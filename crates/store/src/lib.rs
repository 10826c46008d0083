//! Store module - saved games over a key-value boundary
//!
//! This module persists and restores game sessions. The core stays free
//! of serialization; everything wire-shaped lives here.
//!
//! # Layout
//!
//! - [`snapshot`]: serde schema for a saved game plus capture/restore
//! - [`merge`]: save-over-save merge keeping sticky progress fields
//! - [`kv`]: the [`KvStore`] boundary with memory and JSON-file backends
//! - [`store`]: [`GameStateStore`], one save slot per mode
//!
//! # Save format
//!
//! One JSON document per mode under the key `"GameState_" + mode`:
//!
//! ```text
//! {"mode":"classic","score":120,"bestScore":450,
//!  "gridSnapshot":{"rows":8,"cols":8,"cells":[...]},
//!  "deck":[{"template":9,"color":3},null,null],
//!  "hasUsedReward":false,"hasUsedHighScoreBonus":false,
//!  "scoreBeforeReward":0,"highScoreAtStart":450,
//!  "timestamp":1700000000000}
//! ```
//!
//! Loads are defensive: a document that does not parse, carries the
//! wrong mode tag, or fails structural validation reads as no save.
//!
//! # Example
//!
//! ```
//! use blockfit_core::GameSession;
//! use blockfit_store::{GameSnapshot, GameStateStore, MemoryStore};
//! use blockfit_types::{GameRules, Mode};
//!
//! let session = GameSession::new(Mode::Classic, GameRules::default(), 7, 0);
//! let mut store = GameStateStore::new(MemoryStore::new());
//! store.save(Mode::Classic, &GameSnapshot::capture(&session)).unwrap();
//! assert!(store.has_save(Mode::Classic));
//! ```

pub mod kv;
pub mod merge;
pub mod snapshot;
pub mod store;

pub use blockfit_core as core;
pub use blockfit_types as types;

// Re-export the working set for convenience
pub use kv::{JsonFileStore, KvStore, MemoryStore};
pub use merge::merge_snapshot;
pub use snapshot::{
    BonusEntry, BonusTag, CellSnapshot, GameSnapshot, GridSnapshot, ModeTag, RestoreError,
    SlotSnapshot,
};
pub use store::{state_key, GameStateStore};
