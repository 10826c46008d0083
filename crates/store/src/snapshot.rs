//! Wire schema for saved games
//!
//! Mirrors the core session state into plain serde structs. Field names
//! follow the established save format (camelCase keys, lowercase mode
//! and bonus tags), so existing saves stay readable.

use serde::{Deserialize, Serialize};

use blockfit_core::{
    catalog, CellFill, Deck, Field, GameSession, SessionState, Shape, ShapeFactory,
};
use blockfit_types::{
    BonusKind, ColorId, GameRules, Mode, TemplateId, DECK_SLOTS, MAX_SHAPE_BONUSES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeTag {
    #[serde(rename = "classic")]
    Classic,
    #[serde(rename = "timed")]
    Timed,
    #[serde(rename = "adventure")]
    Adventure,
}

impl From<Mode> for ModeTag {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Classic => ModeTag::Classic,
            Mode::Timed => ModeTag::Timed,
            Mode::Adventure => ModeTag::Adventure,
        }
    }
}

impl From<ModeTag> for Mode {
    fn from(value: ModeTag) -> Self {
        match value {
            ModeTag::Classic => Mode::Classic,
            ModeTag::Timed => Mode::Timed,
            ModeTag::Adventure => Mode::Adventure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusTag {
    #[serde(rename = "coin")]
    Coin,
    #[serde(rename = "gem")]
    Gem,
    #[serde(rename = "star")]
    Star,
}

impl From<BonusKind> for BonusTag {
    fn from(value: BonusKind) -> Self {
        match value {
            BonusKind::Coin => BonusTag::Coin,
            BonusKind::Gem => BonusTag::Gem,
            BonusKind::Star => BonusTag::Star,
        }
    }
}

impl From<BonusTag> for BonusKind {
    fn from(value: BonusTag) -> Self {
        match value {
            BonusTag::Coin => BonusKind::Coin,
            BonusTag::Gem => BonusKind::Gem,
            BonusTag::Star => BonusKind::Star,
        }
    }
}

/// One grid cell on the wire
///
/// An empty enabled cell serializes as `{"disabled":false}`; color and
/// bonus keys appear only when set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus: Option<BonusTag>,
    #[serde(default)]
    pub disabled: bool,
}

/// Grid dimensions plus cells in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub rows: u32,
    pub cols: u32,
    pub cells: Vec<CellSnapshot>,
}

impl GridSnapshot {
    pub fn from_field(field: &Field) -> Self {
        let cells = field
            .cells()
            .iter()
            .map(|cell| CellSnapshot {
                color: cell.fill.map(|fill| fill.color.0),
                bonus: cell.fill.and_then(|fill| fill.bonus).map(BonusTag::from),
                disabled: cell.disabled,
            })
            .collect();
        Self {
            rows: field.rows() as u32,
            cols: field.cols() as u32,
            cells,
        }
    }
}

/// A bonus marker on one of a shape's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusEntry {
    /// Index into the shape's cell list
    pub cell: u8,
    pub kind: BonusTag,
}

/// One occupied deck slot on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSnapshot {
    pub template: u8,
    pub color: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bonuses: Vec<BonusEntry>,
}

impl SlotSnapshot {
    pub fn from_shape(shape: &Shape) -> Self {
        let bonuses = shape
            .bonuses()
            .iter()
            .map(|&(cell, kind)| BonusEntry {
                cell,
                kind: kind.into(),
            })
            .collect();
        Self {
            template: shape.template().0,
            color: shape.color().0,
            bonuses,
        }
    }
}

/// Saved game, one per mode key
///
/// The four reward fields only carry values for classic saves and
/// `remainingTime` only for timed saves; absent keys stay absent on the
/// wire. Each of those is also "sticky" under [`merge_snapshot`]: an
/// incoming save that omits one keeps the stored value.
///
/// [`merge_snapshot`]: crate::merge::merge_snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub mode: ModeTag,
    pub score: u32,
    #[serde(rename = "bestScore")]
    pub best_score: u32,
    #[serde(rename = "gridSnapshot")]
    pub grid: GridSnapshot,
    #[serde(default)]
    pub deck: Vec<Option<SlotSnapshot>>,
    #[serde(
        default,
        rename = "hasUsedReward",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_used_reward: Option<bool>,
    #[serde(
        default,
        rename = "hasUsedHighScoreBonus",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_used_high_score_bonus: Option<bool>,
    #[serde(
        default,
        rename = "scoreBeforeReward",
        skip_serializing_if = "Option::is_none"
    )]
    pub score_before_reward: Option<u32>,
    #[serde(
        default,
        rename = "highScoreAtStart",
        skip_serializing_if = "Option::is_none"
    )]
    pub high_score_at_start: Option<u32>,
    /// Milliseconds left on the timed clock
    #[serde(
        default,
        rename = "remainingTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub remaining_ms: Option<u64>,
    pub timestamp: u64,
}

impl GameSnapshot {
    /// Snapshot a live session, stamping the capture time
    pub fn capture(session: &GameSession) -> Self {
        Self::from_state(&session.state())
    }

    /// Build a snapshot from already-captured session state
    pub fn from_state(state: &SessionState) -> Self {
        let classic = state.mode == Mode::Classic;
        let deck = state
            .deck
            .slots()
            .iter()
            .map(|slot| slot.as_ref().map(SlotSnapshot::from_shape))
            .collect();
        Self {
            mode: state.mode.into(),
            score: state.score,
            best_score: state.best_score,
            grid: GridSnapshot::from_field(&state.field),
            deck,
            has_used_reward: classic.then_some(state.has_used_reward),
            has_used_high_score_bonus: classic.then_some(state.has_used_high_score_bonus),
            score_before_reward: classic.then_some(state.score_before_reward),
            high_score_at_start: classic.then_some(state.high_score_at_start),
            remaining_ms: (state.mode == Mode::Timed).then_some(state.remaining_ms),
            timestamp: current_timestamp_ms(),
        }
    }

    /// Structural validity check applied before any restore
    ///
    /// Saves that fail here are treated as if they never existed.
    pub fn is_valid(&self) -> bool {
        let rows = self.grid.rows as usize;
        let cols = self.grid.cols as usize;
        if rows == 0 || cols == 0 || self.grid.cells.len() != rows * cols {
            return false;
        }
        for cell in &self.grid.cells {
            if cell.disabled && (cell.color.is_some() || cell.bonus.is_some()) {
                return false;
            }
            if cell.bonus.is_some() && cell.color.is_none() {
                return false;
            }
        }
        if self.deck.len() > DECK_SLOTS {
            return false;
        }
        for slot in self.deck.iter().flatten() {
            let Some(template) = catalog::template(TemplateId(slot.template)) else {
                return false;
            };
            if slot.bonuses.len() > MAX_SHAPE_BONUSES {
                return false;
            }
            for (idx, bonus) in slot.bonuses.iter().enumerate() {
                if bonus.cell as usize >= template.cells.len() {
                    return false;
                }
                if slot.bonuses[..idx].iter().any(|b| b.cell == bonus.cell) {
                    return false;
                }
            }
        }
        if self.mode == ModeTag::Timed && self.remaining_ms.is_none() {
            return false;
        }
        true
    }

    /// Rebuild a live session from this snapshot
    ///
    /// The shape stream is not saved, so the caller supplies a factory
    /// (fresh seed, and the bonus kind for adventure levels).
    pub fn restore(
        &self,
        rules: GameRules,
        factory: ShapeFactory,
    ) -> Result<GameSession, RestoreError> {
        if !self.is_valid() {
            return Err(RestoreError::Malformed);
        }
        if self.grid.rows as usize != rules.rows || self.grid.cols as usize != rules.cols {
            return Err(RestoreError::DimensionMismatch);
        }

        let mut field = Field::new(rules.rows, rules.cols);
        for (idx, cell) in self.grid.cells.iter().enumerate() {
            let row = idx / rules.cols;
            let col = idx % rules.cols;
            if cell.disabled {
                field.disable(row, col);
                continue;
            }
            if let Some(color) = cell.color {
                let fill = CellFill {
                    color: ColorId(color),
                    bonus: cell.bonus.map(Into::into),
                };
                field.fill(row, col, fill).map_err(|_| RestoreError::Malformed)?;
            }
        }

        let mut deck = Deck::new();
        for (slot, entry) in self.deck.iter().enumerate() {
            let Some(snap) = entry else { continue };
            let mut shape = Shape::new(TemplateId(snap.template), ColorId(snap.color))
                .ok_or(RestoreError::Malformed)?;
            for bonus in &snap.bonuses {
                if !shape.set_bonus(bonus.cell as usize, bonus.kind.into()) {
                    return Err(RestoreError::Malformed);
                }
            }
            deck.set(slot, Some(shape));
        }

        let state = SessionState {
            mode: self.mode.into(),
            field,
            deck,
            score: self.score,
            best_score: self.best_score,
            has_used_reward: self.has_used_reward.unwrap_or(false),
            has_used_high_score_bonus: self.has_used_high_score_bonus.unwrap_or(false),
            score_before_reward: self.score_before_reward.unwrap_or(0),
            high_score_at_start: self.high_score_at_start.unwrap_or(0),
            remaining_ms: self.remaining_ms.unwrap_or(0),
        };
        Ok(GameSession::from_state(state, rules, factory))
    }
}

/// Why a snapshot could not be turned back into a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreError {
    /// Snapshot fails structural validation
    Malformed,
    /// Snapshot grid does not match the dimensions in the rules
    DimensionMismatch,
}

impl RestoreError {
    pub fn code(&self) -> &'static str {
        match self {
            RestoreError::Malformed => "malformed_snapshot",
            RestoreError::DimensionMismatch => "dimension_mismatch",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RestoreError::Malformed => "Saved game data is not structurally valid",
            RestoreError::DimensionMismatch => "Saved grid does not match the configured field",
        }
    }
}

impl std::fmt::Display for RestoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for RestoreError {}

fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
