//! Save-over-save merge semantics
//!
//! Every save goes through [`merge_snapshot`] so that session-scoped
//! progress flags survive writers that do not know about them.
//!
//! Field ownership:
//!
//! | Field | Owner |
//! |-------|-------|
//! | `mode`, `score`, `bestScore`, `gridSnapshot`, `deck`, `remainingTime`, `timestamp` | incoming write |
//! | `hasUsedReward`, `hasUsedHighScoreBonus`, `scoreBeforeReward`, `highScoreAtStart` | sticky: incoming when present, else stored |

use crate::snapshot::GameSnapshot;

/// Merge an incoming save over the stored one
///
/// Sticky fields fall back to the stored value only when the incoming
/// snapshot leaves them unset; an incoming `Some` always wins, so a
/// caller resets a sticky field by writing an explicit value.
pub fn merge_snapshot(stored: &GameSnapshot, incoming: &GameSnapshot) -> GameSnapshot {
    let mut merged = incoming.clone();
    merged.has_used_reward = incoming.has_used_reward.or(stored.has_used_reward);
    merged.has_used_high_score_bonus = incoming
        .has_used_high_score_bonus
        .or(stored.has_used_high_score_bonus);
    merged.score_before_reward = incoming.score_before_reward.or(stored.score_before_reward);
    merged.high_score_at_start = incoming.high_score_at_start.or(stored.high_score_at_start);
    merged
}
