//! Session module - one run of the game in one mode
//!
//! Ties the core components together: deck and factory supply shapes,
//! placement commits them, line clearing and scoring consume the
//! result, and the session decides when the run is over. Everything
//! here is synchronous and deterministic; presentation, timers and
//! persistence live outside and drive the session through its API.

use blockfit_types::{BonusKind, GameRules, Mode};

use crate::deck::{Deck, ShapeFactory};
use crate::field::{Field, LevelLayout};
use crate::lines::{self, ClearGroup};
use crate::placement::{self, PlaceError, Placement};
use crate::scoring::ScoreTracker;

/// Everything one successful move produced
///
/// Returned from [`GameSession::play`] for the presentation layer to
/// animate and for persistence to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Cells the shape occupied
    pub placement: Placement,
    /// Lines cleared by the move, rows first, each axis ascending
    pub groups: Vec<ClearGroup>,
    /// Points awarded for the move (zero when nothing cleared)
    pub score_delta: u32,
    /// Combo counter after the move
    pub combo: u32,
    /// Bonus items collected from cleared lines, tallied per kind
    pub collected: Vec<(BonusKind, u32)>,
    /// Whether the move pushed the best score up
    pub new_best: bool,
    /// Whether the session ended as a result of this move
    pub over: bool,
}

impl MoveOutcome {
    /// Number of lines the move cleared
    pub fn lines(&self) -> u32 {
        self.groups.len() as u32
    }
}

/// Restorable session state, as captured by [`GameSession::state`]
///
/// Plain core data with no serialization attached; the persistence
/// layer maps it to and from its wire schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub mode: Mode,
    pub field: Field,
    pub deck: Deck,
    pub score: u32,
    pub best_score: u32,
    pub has_used_reward: bool,
    pub has_used_high_score_bonus: bool,
    pub score_before_reward: u32,
    pub high_score_at_start: u32,
    pub remaining_ms: u64,
}

/// A single run of the game in one mode
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    mode: Mode,
    rules: GameRules,
    field: Field,
    deck: Deck,
    factory: ShapeFactory,
    score: ScoreTracker,
    /// Classic: whether the one-time revive has been spent
    has_used_reward: bool,
    /// Classic: whether the beat-the-high-score celebration fired
    has_used_high_score_bonus: bool,
    /// Classic: score at the moment the revive was spent
    score_before_reward: u32,
    /// Best score on record when the run began
    high_score_at_start: u32,
    /// Timed: milliseconds left on the clock
    remaining_ms: u64,
    over: bool,
}

impl GameSession {
    /// Start a classic or timed session on an empty field
    pub fn new(mode: Mode, rules: GameRules, seed: u32, best_score: u32) -> Self {
        let factory = ShapeFactory::new(seed);
        let field = Field::new(rules.rows, rules.cols);
        Self::start(mode, rules, factory, field, best_score)
    }

    /// Start an adventure session on a level layout
    ///
    /// Shapes drawn during the level occasionally carry `bonus` items
    /// when a kind is given.
    pub fn adventure(
        rules: GameRules,
        seed: u32,
        best_score: u32,
        layout: &LevelLayout,
        bonus: Option<BonusKind>,
    ) -> Self {
        let factory = match bonus {
            Some(kind) => ShapeFactory::with_bonus(seed, kind),
            None => ShapeFactory::new(seed),
        };
        let field = Field::with_layout(rules.rows, rules.cols, layout);
        Self::start(Mode::Adventure, rules, factory, field, best_score)
    }

    fn start(
        mode: Mode,
        rules: GameRules,
        mut factory: ShapeFactory,
        field: Field,
        best_score: u32,
    ) -> Self {
        let deck = Deck::dealt(&mut factory);
        let remaining_ms = match mode {
            Mode::Timed => rules.timed_round_ms,
            _ => 0,
        };
        let mut session = Self {
            mode,
            rules,
            field,
            deck,
            factory,
            score: ScoreTracker::new(best_score),
            has_used_reward: false,
            has_used_high_score_bonus: false,
            score_before_reward: 0,
            high_score_at_start: best_score,
            remaining_ms,
            over: false,
        };
        session.refresh_over_state();
        session
    }

    /// Rebuild a session from captured state
    ///
    /// The shape stream is not part of the state: callers hand in a
    /// fresh factory (seed and, for adventure, bonus kind are theirs to
    /// pick), and an exhausted deck is re-dealt from it.
    pub fn from_state(state: SessionState, rules: GameRules, mut factory: ShapeFactory) -> Self {
        let SessionState {
            mode,
            field,
            mut deck,
            score,
            best_score,
            has_used_reward,
            has_used_high_score_bonus,
            score_before_reward,
            high_score_at_start,
            remaining_ms,
        } = state;

        if deck.is_exhausted() {
            deck.refill(&mut factory);
        }
        let mut session = Self {
            mode,
            rules,
            field,
            deck,
            factory,
            score: ScoreTracker::from_parts(score, 0, 0, best_score),
            has_used_reward,
            has_used_high_score_bonus,
            score_before_reward,
            high_score_at_start,
            remaining_ms,
            over: false,
        };
        session.refresh_over_state();
        session
    }

    /// Capture the restorable parts of this session
    pub fn state(&self) -> SessionState {
        SessionState {
            mode: self.mode,
            field: self.field.clone(),
            deck: self.deck.clone(),
            score: self.score.score(),
            best_score: self.score.best(),
            has_used_reward: self.has_used_reward,
            has_used_high_score_bonus: self.has_used_high_score_bonus,
            score_before_reward: self.score_before_reward,
            high_score_at_start: self.high_score_at_start,
            remaining_ms: self.remaining_ms,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn best_score(&self) -> u32 {
        self.score.best()
    }

    pub fn combo(&self) -> u32 {
        self.score.combo()
    }

    pub fn misses(&self) -> u32 {
        self.score.misses()
    }

    pub fn seed(&self) -> u32 {
        self.factory.seed()
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn has_used_reward(&self) -> bool {
        self.has_used_reward
    }

    pub fn has_used_high_score_bonus(&self) -> bool {
        self.has_used_high_score_bonus
    }

    pub fn score_before_reward(&self) -> u32 {
        self.score_before_reward
    }

    pub fn high_score_at_start(&self) -> u32 {
        self.high_score_at_start
    }

    /// Milliseconds left on the timed clock (zero for other modes)
    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    /// Check if every enabled cell is empty (adventure board-cleared)
    pub fn board_cleared(&self) -> bool {
        self.field.all_cleared()
    }

    /// Play the shape in deck `slot` with its corner at `origin`
    ///
    /// On success the shape leaves the deck, full lines clear and score,
    /// bonuses on cleared lines are collected, and the deck refills once
    /// every slot is empty. On failure nothing changes: the field is
    /// untouched and the shape stays in its slot.
    pub fn play(&mut self, slot: usize, origin: (usize, usize)) -> Result<MoveOutcome, PlaceError> {
        if self.over {
            return Err(PlaceError::SessionOver);
        }
        let Some(shape) = self.deck.get(slot) else {
            return Err(PlaceError::EmptySlot);
        };

        let placement = placement::commit(&mut self.field, shape, origin)?;
        self.deck.take(slot);

        let groups = lines::detect_and_clear(&mut self.field);
        let lines_cleared = groups.len() as u32;
        let score_delta = if lines_cleared > 0 {
            self.score.record_clear(lines_cleared)
        } else {
            self.score.record_miss(self.rules.reset_combo_after_moves);
            0
        };
        let current = self.score.score();
        let new_best = self.score.try_update_best(current);
        let collected = tally_bonuses(&groups);

        if self.deck.is_exhausted() {
            self.deck.refill(&mut self.factory);
        }
        self.refresh_over_state();

        Ok(MoveOutcome {
            placement,
            groups,
            score_delta,
            combo: self.score.combo(),
            collected,
            new_best,
            over: self.over,
        })
    }

    /// Advance the timed-mode clock
    ///
    /// Returns true when this call ran the clock out. Other modes and
    /// finished sessions ignore ticks.
    pub fn tick(&mut self, elapsed_ms: u64) -> bool {
        if self.mode != Mode::Timed || self.over {
            return false;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            self.over = true;
            true
        } else {
            false
        }
    }

    /// Spend the one classic-mode revive
    ///
    /// Wipes the field (score, best, and deck are kept), records the
    /// score at the moment of the revive, and puts the session back in
    /// play. Returns false when the revive is unavailable.
    pub fn use_reward(&mut self) -> bool {
        if self.mode != Mode::Classic || self.has_used_reward {
            return false;
        }
        self.has_used_reward = true;
        self.score_before_reward = self.score.score();
        self.field.clear_filled();
        if self.deck.is_exhausted() {
            self.deck.refill(&mut self.factory);
        }
        self.over = false;
        self.refresh_over_state();
        true
    }

    /// Claim the once-per-run celebration for beating the high score
    /// the run started with
    ///
    /// Classic only. Returns false when already claimed, or the score
    /// has not actually passed the starting high score.
    pub fn claim_high_score_bonus(&mut self) -> bool {
        if self.mode != Mode::Classic
            || self.has_used_high_score_bonus
            || self.score.score() <= self.high_score_at_start
        {
            return false;
        }
        self.has_used_high_score_bonus = true;
        true
    }

    /// Re-derive the over flag from the clock and the deck
    fn refresh_over_state(&mut self) {
        if self.mode == Mode::Timed && self.remaining_ms == 0 {
            self.over = true;
            return;
        }
        if placement::no_shape_fits(&self.field, &self.deck) {
            self.over = true;
        }
    }
}

/// Tally bonus items across clear groups, one count per physical cell
///
/// A cell sitting on a row/column cross appears in two groups but its
/// bonus is collected once.
fn tally_bonuses(groups: &[ClearGroup]) -> Vec<(BonusKind, u32)> {
    let mut seen: Vec<(usize, usize)> = Vec::new();
    let mut tally: Vec<(BonusKind, u32)> = Vec::new();
    for cell in groups.iter().flat_map(|group| group.cells.iter()) {
        if let Some(kind) = cell.fill.bonus {
            if seen.contains(&(cell.row, cell.col)) {
                continue;
            }
            seen.push((cell.row, cell.col));
            match tally.iter_mut().find(|(k, _)| *k == kind) {
                Some((_, count)) => *count += 1,
                None => tally.push((kind, 1)),
            }
        }
    }
    tally
}
