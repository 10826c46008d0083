//! Shared types module - primitives used across the whole workspace
//!
//! This crate defines the fundamental types for the blockfit engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, persistence, frontends).
//!
//! # Coordinate Conventions
//!
//! | Term | Meaning |
//! |------|---------|
//! | row | Vertical index, 0 at the top, growing downward |
//! | col | Horizontal index, 0 at the left, growing rightward |
//! | offset | `(row, col)` pair relative to a shape's top-left corner |
//!
//! Field cells are stored row-major: `index = row * cols + col`.
//!
//! # Default Rules
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 8 | Field height in cells |
//! | `DEFAULT_COLS` | 8 | Field width in cells |
//! | `DECK_SLOTS` | 3 | Shapes offered to the player at once |
//! | `RESET_COMBO_AFTER_MOVES` | 3 | Misses before the combo resets |
//! | `TIMED_ROUND_MS` | 120000 | Length of a timed round |
//!
//! # Examples
//!
//! ```
//! use blockfit_types::{BonusKind, GameRules, Mode};
//!
//! // Parse a mode from its storage tag (case-insensitive)
//! let mode = Mode::from_str("Classic").unwrap();
//! assert_eq!(mode, Mode::Classic);
//! assert_eq!(mode.as_str(), "classic");
//!
//! // Bonus kinds round-trip the same way
//! assert_eq!(BonusKind::from_str("gem"), Some(BonusKind::Gem));
//!
//! // Rules carry the tunable parameters
//! let rules = GameRules::default();
//! assert_eq!((rules.rows, rules.cols), (8, 8));
//! ```

/// Side length of the local box shape offsets live in
///
/// Every template offset stays within `0..SHAPE_BOX` on both axes.
pub const SHAPE_BOX: u8 = 5;

/// Upper bound on active cells per shape (`SHAPE_BOX` squared)
pub const MAX_SHAPE_CELLS: usize = (SHAPE_BOX as usize) * (SHAPE_BOX as usize);

/// Most bonus items a single shape may carry
pub const MAX_SHAPE_BONUSES: usize = 2;

/// Default field height in cells (8 rows)
pub const DEFAULT_ROWS: usize = 8;

/// Default field width in cells (8 columns)
pub const DEFAULT_COLS: usize = 8;

/// Number of shape slots offered to the player at once
pub const DECK_SLOTS: usize = 3;

/// Consecutive non-clearing moves before the combo counter resets
pub const RESET_COMBO_AFTER_MOVES: u32 = 3;

/// Length of a timed round in milliseconds (2 minutes)
pub const TIMED_ROUND_MS: u64 = 120_000;

/// Number of color templates shapes can be painted with
pub const COLOR_TEMPLATE_COUNT: u8 = 8;

/// Default price (in collected coins) of the classic-mode revive
pub const DEFAULT_CONTINUE_PRICE: u32 = 100;

/// The three game modes
///
/// - **Classic**: endless play with a one-time revive reward
/// - **Timed**: play against a countdown clock
/// - **Adventure**: level layouts with obstacles and bonus items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Classic,
    Timed,
    Adventure,
}

impl Mode {
    /// All modes, in menu order
    pub const ALL: [Mode; 3] = [Mode::Classic, Mode::Timed, Mode::Adventure];

    /// Parse a mode from its tag (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfit_types::Mode;
    ///
    /// assert_eq!(Mode::from_str("classic"), Some(Mode::Classic));
    /// assert_eq!(Mode::from_str("TIMED"), Some(Mode::Timed));
    /// assert_eq!(Mode::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Mode::Classic),
            "timed" => Some(Mode::Timed),
            "adventure" => Some(Mode::Adventure),
            _ => None,
        }
    }

    /// Convert to the lowercase tag used in storage keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Classic => "classic",
            Mode::Timed => "timed",
            Mode::Adventure => "adventure",
        }
    }
}

/// Kinds of bonus item a filled cell can carry
///
/// Adventure levels ask the player to collect a particular kind by
/// clearing the lines the items sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BonusKind {
    Coin,
    Gem,
    Star,
}

impl BonusKind {
    /// All bonus kinds
    pub const ALL: [BonusKind; 3] = [BonusKind::Coin, BonusKind::Gem, BonusKind::Star];

    /// Parse a bonus kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "coin" => Some(BonusKind::Coin),
            "gem" => Some(BonusKind::Gem),
            "star" => Some(BonusKind::Star),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BonusKind::Coin => "coin",
            BonusKind::Gem => "gem",
            BonusKind::Star => "star",
        }
    }
}

/// Identifier of a color template
///
/// An index into the frontend's palette; the engine treats it as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorId(pub u8);

/// Identifier of a shape template in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateId(pub u8);

/// Tunable game parameters
///
/// Sessions take these by value; the engine never reads configuration
/// from anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Field height in cells
    pub rows: usize,
    /// Field width in cells
    pub cols: usize,
    /// Misses allowed before the combo counter resets
    pub reset_combo_after_moves: u32,
    /// Countdown length for timed rounds, in milliseconds
    pub timed_round_ms: u64,
    /// Coin price of the classic-mode revive (read by the frontend)
    pub continue_price: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            reset_combo_after_moves: RESET_COMBO_AFTER_MOVES,
            timed_round_ms: TIMED_ROUND_MS,
            continue_price: DEFAULT_CONTINUE_PRICE,
        }
    }
}
