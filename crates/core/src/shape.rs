//! Shape module - a catalog template stamped with color and bonuses
//!
//! A shape is what the player actually places: template offsets plus a
//! color template id, optionally carrying up to two bonus items bound
//! to individual cells.

use arrayvec::ArrayVec;

use blockfit_types::{BonusKind, ColorId, TemplateId, MAX_SHAPE_BONUSES, MAX_SHAPE_CELLS};

use crate::catalog::{self, CellOffset, ShapeTemplate};
use crate::rng::SimpleRng;

/// A placeable shape
///
/// Offsets come straight from the catalog and stay normalized. Bonus
/// entries pair a cell index (into the offset list) with a kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    template: TemplateId,
    color: ColorId,
    cells: ArrayVec<CellOffset, MAX_SHAPE_CELLS>,
    bonuses: ArrayVec<(u8, BonusKind), MAX_SHAPE_BONUSES>,
}

impl Shape {
    /// Build a shape from a catalog template id
    /// Returns None for ids outside the catalog
    pub fn new(template: TemplateId, color: ColorId) -> Option<Self> {
        catalog::template(template).map(|tpl| Self::from_template(tpl, color))
    }

    /// Build a shape directly from a catalog entry
    pub fn from_template(tpl: &ShapeTemplate, color: ColorId) -> Self {
        let cells = tpl.cells.iter().copied().take(MAX_SHAPE_CELLS).collect();
        Self {
            template: tpl.id,
            color,
            cells,
            bonuses: ArrayVec::new(),
        }
    }

    /// The catalog template this shape came from
    pub fn template(&self) -> TemplateId {
        self.template
    }

    /// Color template the shape is painted with
    pub fn color(&self) -> ColorId {
        self.color
    }

    /// Active cell offsets, in template order
    pub fn cells(&self) -> &[CellOffset] {
        &self.cells
    }

    /// Number of active cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Bounding box as (rows, cols), derived from the offsets
    pub fn bounding_box(&self) -> (usize, usize) {
        let mut max_row = 0u8;
        let mut max_col = 0u8;
        for &(row, col) in &self.cells {
            max_row = max_row.max(row);
            max_col = max_col.max(col);
        }
        (max_row as usize + 1, max_col as usize + 1)
    }

    /// Bonus entries as (cell index, kind) pairs
    pub fn bonuses(&self) -> &[(u8, BonusKind)] {
        &self.bonuses
    }

    /// Bonus on the cell at `cell_index`, if any
    pub fn bonus_at(&self, cell_index: usize) -> Option<BonusKind> {
        self.bonuses
            .iter()
            .find(|&&(idx, _)| idx as usize == cell_index)
            .map(|&(_, kind)| kind)
    }

    /// Attach a bonus to one cell by index
    ///
    /// Returns false when the index is out of range, the cell already
    /// carries a bonus, or the shape is at bonus capacity.
    pub fn set_bonus(&mut self, cell_index: usize, kind: BonusKind) -> bool {
        if cell_index >= self.cells.len()
            || self.bonus_at(cell_index).is_some()
            || self.bonuses.is_full()
        {
            return false;
        }
        self.bonuses.push((cell_index as u8, kind));
        true
    }

    /// Scatter up to `max_count` bonus items of `kind` across the cells
    ///
    /// Walks the cells in index order: a candidate right after the
    /// previous pick is skipped, and each remaining candidate is taken
    /// with a one-in-three chance. When the walk picks nothing, one
    /// uniformly random cell gets the bonus, so a requested scatter
    /// never leaves the shape empty-handed.
    ///
    /// Replaces any bonuses already attached. Returns how many were
    /// assigned.
    pub fn assign_bonus(&mut self, kind: BonusKind, max_count: usize, rng: &mut SimpleRng) -> usize {
        let max_count = max_count.min(MAX_SHAPE_BONUSES);
        if max_count == 0 {
            return 0;
        }
        self.bonuses.clear();

        let mut last_pick: Option<usize> = None;
        for idx in 0..self.cells.len() {
            if self.bonuses.len() >= max_count {
                break;
            }
            if let Some(prev) = last_pick {
                if idx - prev <= 1 {
                    continue;
                }
            }
            if rng.chance(3) {
                self.bonuses.push((idx as u8, kind));
                last_pick = Some(idx);
            }
        }

        if self.bonuses.is_empty() {
            let idx = rng.next_range(self.cells.len() as u32);
            self.bonuses.push((idx as u8, kind));
        }
        self.bonuses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(id: u8) -> Shape {
        Shape::new(TemplateId(id), ColorId(0)).unwrap()
    }

    #[test]
    fn test_new_rejects_unknown_template() {
        assert!(Shape::new(TemplateId(200), ColorId(0)).is_none());
    }

    #[test]
    fn test_bounding_boxes() {
        assert_eq!(shape(0).bounding_box(), (1, 1)); // single
        assert_eq!(shape(1).bounding_box(), (1, 2)); // horizontal domino
        assert_eq!(shape(2).bounding_box(), (2, 1)); // vertical domino
        assert_eq!(shape(7).bounding_box(), (1, 5)); // five across
        assert_eq!(shape(8).bounding_box(), (5, 1)); // five down
        assert_eq!(shape(9).bounding_box(), (2, 2)); // square
        assert_eq!(shape(17).bounding_box(), (3, 3)); // large corner
    }

    #[test]
    fn test_set_bonus_validates() {
        let mut s = shape(9); // 4 cells
        assert!(s.set_bonus(0, BonusKind::Coin));
        assert!(!s.set_bonus(0, BonusKind::Gem)); // already taken
        assert!(!s.set_bonus(4, BonusKind::Coin)); // out of range
        assert!(s.set_bonus(3, BonusKind::Gem));
        assert!(!s.set_bonus(2, BonusKind::Star)); // at capacity
        assert_eq!(s.bonus_at(0), Some(BonusKind::Coin));
        assert_eq!(s.bonus_at(3), Some(BonusKind::Gem));
        assert_eq!(s.bonus_at(1), None);
    }

    #[test]
    fn test_assign_bonus_always_assigns_at_least_one() {
        for seed in 0..200 {
            let mut rng = SimpleRng::new(seed);
            let mut s = shape(10); // 9 cells
            let count = s.assign_bonus(BonusKind::Star, 2, &mut rng);
            assert!(count >= 1, "seed {} assigned nothing", seed);
            assert_eq!(count, s.bonuses().len());
        }
    }

    #[test]
    fn test_assign_bonus_respects_max() {
        for seed in 0..200 {
            let mut rng = SimpleRng::new(seed);
            let mut s = shape(10);
            let count = s.assign_bonus(BonusKind::Coin, 5, &mut rng);
            assert!(count <= MAX_SHAPE_BONUSES, "seed {}", seed);
        }
    }

    #[test]
    fn test_assign_bonus_skips_adjacent_indices() {
        for seed in 0..200 {
            let mut rng = SimpleRng::new(seed);
            let mut s = shape(7); // 5 cells in a row
            s.assign_bonus(BonusKind::Gem, 2, &mut rng);
            if s.bonuses().len() == 2 {
                let a = s.bonuses()[0].0;
                let b = s.bonuses()[1].0;
                assert!(b > a && b - a > 1, "seed {}: picks {} and {}", seed, a, b);
            }
        }
    }

    #[test]
    fn test_assign_bonus_single_cell_shape() {
        let mut rng = SimpleRng::new(9);
        let mut s = shape(0);
        assert_eq!(s.assign_bonus(BonusKind::Coin, 2, &mut rng), 1);
        assert_eq!(s.bonus_at(0), Some(BonusKind::Coin));
    }

    #[test]
    fn test_assign_bonus_zero_max_is_noop() {
        let mut rng = SimpleRng::new(9);
        let mut s = shape(9);
        s.set_bonus(1, BonusKind::Coin);
        assert_eq!(s.assign_bonus(BonusKind::Gem, 0, &mut rng), 0);
        // A zero request leaves existing bonuses alone
        assert_eq!(s.bonus_at(1), Some(BonusKind::Coin));
    }

    #[test]
    fn test_assign_bonus_replaces_previous() {
        let mut rng = SimpleRng::new(9);
        let mut s = shape(10);
        s.set_bonus(0, BonusKind::Coin);
        s.assign_bonus(BonusKind::Star, 2, &mut rng);
        assert!(s.bonuses().iter().all(|&(_, kind)| kind == BonusKind::Star));
    }
}
