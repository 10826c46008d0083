//! Scoring tests - award tables and the combo tracker

use blockfit::core::{combo_score, line_score, move_score, ScoreTracker};
use blockfit::types::RESET_COMBO_AFTER_MOVES;

#[test]
fn test_line_score_table() {
    assert_eq!(line_score(1), 10);
    assert_eq!(line_score(2), 40);
    assert_eq!(line_score(3), 90);
    assert_eq!(line_score(4), 160);
    // Past the table the award keeps the n * 10 * n shape
    assert_eq!(line_score(5), 250);
    assert_eq!(line_score(6), 360);
}

#[test]
fn test_combo_score_table() {
    assert_eq!(combo_score(1), 10);
    assert_eq!(combo_score(2), 30);
    assert_eq!(combo_score(3), 40);
    assert_eq!(combo_score(4), 50);
    assert_eq!(combo_score(5), 60);
    assert_eq!(combo_score(9), 100);
}

#[test]
fn test_move_score_reference_values() {
    assert_eq!(move_score(1, 1), 20);
    assert_eq!(move_score(2, 1), 50);
    assert_eq!(move_score(1, 2), 40);
    assert_eq!(move_score(4, 4), 210);
}

#[test]
fn test_tracker_combo_grows_and_misses_reset_it() {
    let mut tracker = ScoreTracker::new(0);

    assert_eq!(tracker.record_clear(1), 20);
    assert_eq!(tracker.combo(), 1);
    assert_eq!(tracker.record_clear(2), 70); // 40 + combo 2
    assert_eq!(tracker.combo(), 2);
    assert_eq!(tracker.score(), 90);

    // A clear resets the miss count, so three fresh misses are needed
    tracker.record_miss(RESET_COMBO_AFTER_MOVES);
    tracker.record_miss(RESET_COMBO_AFTER_MOVES);
    assert_eq!(tracker.combo(), 2);
    tracker.record_miss(RESET_COMBO_AFTER_MOVES);
    assert_eq!(tracker.combo(), 0);
    assert_eq!(tracker.misses(), 0);

    // Score never decreases on resets
    assert_eq!(tracker.score(), 90);
}

#[test]
fn test_miss_counter_clears_after_a_clear() {
    let mut tracker = ScoreTracker::new(0);
    tracker.record_miss(RESET_COMBO_AFTER_MOVES);
    tracker.record_miss(RESET_COMBO_AFTER_MOVES);
    assert_eq!(tracker.misses(), 2);

    tracker.record_clear(1);
    assert_eq!(tracker.misses(), 0);
    assert_eq!(tracker.combo(), 1);
}

#[test]
fn test_best_score_is_monotonic() {
    let mut tracker = ScoreTracker::new(100);
    assert!(!tracker.try_update_best(100)); // ties do not update
    assert!(!tracker.try_update_best(50));
    assert_eq!(tracker.best(), 100);

    assert!(tracker.try_update_best(101));
    assert_eq!(tracker.best(), 101);
    assert!(!tracker.try_update_best(101));
}
