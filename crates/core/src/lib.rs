//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic for the block-fit puzzle. It has **zero dependencies** on UI,
//! storage, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical shape streams
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Fixed-capacity buffers on the placement hot path
//!
//! # Module Structure
//!
//! - [`field`]: Play field with occupancy, disabled cells, and bonus fills
//! - [`catalog`]: Fixed library of shape templates inside a 5x5 box
//! - [`shape`]: Playable shape instances with color and bonus markers
//! - [`placement`]: Fit checks and atomic placement commits
//! - [`lines`]: Simultaneous full-row and full-column clearing
//! - [`scoring`]: Move score tables, combo tracking, and the best score
//! - [`deck`]: Three-slot shape hand and the seeded shape factory
//! - [`rng`]: Small deterministic generator behind every random draw
//! - [`session`]: One run of the game tying all of the above together
//!
//! # Game Rules
//!
//! - **Three-slot hand**: Shapes are played from a hand of three; the hand
//!   refills only once all three are gone
//! - **No rotation**: Shapes are placed exactly as dealt
//! - **Simultaneous clears**: Full rows and full columns are detected against
//!   the same board state and cleared together; a crossing cell clears once
//! - **Combo scoring**: Every clearing move raises the combo, and three
//!   non-clearing moves in a row reset it
//! - **Lose detection**: The run ends when none of the remaining shapes fits
//!   anywhere on the field
//! - **Modes**: Classic (endless, one revive per run), timed (fixed clock),
//!   and adventure (level layouts with disabled cells and collectable items)
//!
//! # Example
//!
//! ```
//! use blockfit_core::GameSession;
//! use blockfit_core::placement::first_fit;
//! use blockfit_core::types::{GameRules, Mode};
//!
//! // Start a classic run
//! let mut session = GameSession::new(Mode::Classic, GameRules::default(), 12345, 0);
//! assert_eq!(session.deck().shapes().count(), 3);
//! assert!(!session.is_over());
//!
//! // Place the first dealt shape at the first spot it fits
//! let shape = session.deck().get(0).cloned().unwrap();
//! let origin = first_fit(session.field(), &shape).unwrap();
//! let outcome = session.play(0, origin).unwrap();
//! assert_eq!(outcome.placement.cells.len(), shape.cell_count());
//! ```

pub mod catalog;
pub mod deck;
pub mod field;
pub mod lines;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shape;

pub use blockfit_types as types;

// Re-export commonly used types for convenience
pub use catalog::{template, template_count, CellOffset, ShapeTemplate, TEMPLATES};
pub use deck::{Deck, ShapeFactory};
pub use field::{Cell, CellFill, Field, FieldError, LevelLayout};
pub use lines::{detect_and_clear, full_cols, full_rows, ClearGroup, ClearedCell, Line};
pub use placement::{
    can_place_anywhere, can_place_at, commit, first_fit, no_shape_fits, PlaceError, Placement,
};
pub use rng::SimpleRng;
pub use scoring::{combo_score, groups_score, line_score, move_score, ScoreTracker};
pub use session::{GameSession, MoveOutcome, SessionState};
pub use shape::Shape;
