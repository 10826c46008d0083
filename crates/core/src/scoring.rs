//! Scoring module - per-move award and the running score state
//!
//! A move's award is the sum of two branch tables: one over the number
//! of lines cleared at once, one over the combo streak length. The
//! tracker owns the streak and miss counters and the monotonic best
//! score.

use crate::lines::ClearGroup;

/// Points for the number of lines cleared by one move
///
/// 1 line = 10, 2 = 40, 3 = 90, 4 = 160, beyond that n * 10 * n.
pub fn line_score(lines: u32) -> u32 {
    match lines {
        1 => 10,
        2 => 40,
        3 => 90,
        4 => 160,
        n => n * 10 * n,
    }
}

/// Points for the current combo streak
///
/// Streak 1 = 10, 2 = 30, 3 = 40, 4 = 50, beyond that c * 10 + 10.
pub fn combo_score(combo: u32) -> u32 {
    match combo {
        1 => 10,
        2 => 30,
        3 => 40,
        4 => 50,
        c => c * 10 + 10,
    }
}

/// Total award for a clearing move: line points plus combo points
pub fn move_score(lines: u32, combo: u32) -> u32 {
    line_score(lines) + combo_score(combo)
}

/// Award for a set of clear groups (one line per group)
pub fn groups_score(groups: &[ClearGroup], combo: u32) -> u32 {
    move_score(groups.len() as u32, combo)
}

/// Running score state for one session
///
/// The combo counter grows on every clearing move and survives a
/// configurable number of consecutive misses; the best score only ever
/// moves up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u32,
    combo: u32,
    misses: u32,
    best: u32,
}

impl ScoreTracker {
    /// Fresh tracker seeded with the best score on record
    pub fn new(best: u32) -> Self {
        Self {
            score: 0,
            combo: 0,
            misses: 0,
            best,
        }
    }

    /// Rebuild a tracker from persisted values
    pub fn from_parts(score: u32, combo: u32, misses: u32, best: u32) -> Self {
        Self {
            score,
            combo,
            misses,
            best,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a move that cleared `lines` lines (must be > 0)
    ///
    /// Bumps the combo, resets the miss window, and returns the points
    /// awarded for the move.
    pub fn record_clear(&mut self, lines: u32) -> u32 {
        self.combo += 1;
        self.misses = 0;
        let awarded = move_score(lines, self.combo);
        self.score = self.score.saturating_add(awarded);
        awarded
    }

    /// Record a move that cleared nothing
    ///
    /// After `reset_after` consecutive misses the combo goes back to
    /// zero and the window restarts.
    pub fn record_miss(&mut self, reset_after: u32) {
        self.misses += 1;
        if self.misses >= reset_after {
            self.combo = 0;
            self.misses = 0;
        }
    }

    /// Raise the best score when `candidate` strictly beats it
    pub fn try_update_best(&mut self, candidate: u32) -> bool {
        if candidate > self.best {
            self.best = candidate;
            true
        } else {
            false
        }
    }
}
