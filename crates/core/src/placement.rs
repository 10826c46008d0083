//! Placement module - fit checks and the commit step
//!
//! Free functions over [`Field`] and [`Shape`]: checking a single
//! origin, scanning the whole field, stamping a shape down, and the
//! lose-detection sweep over a deck.

use arrayvec::ArrayVec;

use blockfit_types::MAX_SHAPE_CELLS;

use crate::deck::Deck;
use crate::field::{CellFill, Field};
use crate::shape::Shape;

/// Why a play was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// A target cell is out of bounds, disabled, or occupied
    DoesNotFit,
    /// The chosen deck slot holds no shape
    EmptySlot,
    /// The session has already ended
    SessionOver,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::DoesNotFit => "invalid_place",
            PlaceError::EmptySlot => "empty_slot",
            PlaceError::SessionOver => "session_over",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::DoesNotFit => "shape does not fit at target origin",
            PlaceError::EmptySlot => "selected deck slot is empty",
            PlaceError::SessionOver => "session is already over",
        }
    }
}

/// Absolute cells covered by a committed shape, in template order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Placement {
    pub cells: ArrayVec<(usize, usize), MAX_SHAPE_CELLS>,
}

/// Check whether `shape` fits with its top-left corner at `origin`
///
/// Every active cell must land on a free field cell.
pub fn can_place_at(field: &Field, shape: &Shape, origin: (usize, usize)) -> bool {
    shape
        .cells()
        .iter()
        .all(|&(dr, dc)| field.is_free(origin.0 + dr as usize, origin.1 + dc as usize))
}

/// First origin, scanning row-major, where `shape` fits
pub fn first_fit(field: &Field, shape: &Shape) -> Option<(usize, usize)> {
    let (height, width) = shape.bounding_box();
    if height > field.rows() || width > field.cols() {
        return None;
    }
    for row in 0..=field.rows() - height {
        for col in 0..=field.cols() - width {
            if can_place_at(field, shape, (row, col)) {
                return Some((row, col));
            }
        }
    }
    None
}

/// Check whether `shape` fits anywhere on the field
pub fn can_place_anywhere(field: &Field, shape: &Shape) -> bool {
    first_fit(field, shape).is_some()
}

/// Stamp `shape` onto the field with its corner at `origin`
///
/// Every target cell is validated before anything mutates, so a failed
/// commit leaves the field untouched.
pub fn commit(
    field: &mut Field,
    shape: &Shape,
    origin: (usize, usize),
) -> Result<Placement, PlaceError> {
    if !can_place_at(field, shape, origin) {
        return Err(PlaceError::DoesNotFit);
    }

    let mut placement = Placement::default();
    for (idx, &(dr, dc)) in shape.cells().iter().enumerate() {
        let row = origin.0 + dr as usize;
        let col = origin.1 + dc as usize;
        let fill = CellFill {
            color: shape.color(),
            bonus: shape.bonus_at(idx),
        };
        field
            .fill(row, col, fill)
            .map_err(|_| PlaceError::DoesNotFit)?;
        placement.cells.push((row, col));
    }
    Ok(placement)
}

/// Check whether none of the deck's remaining shapes fits anywhere
///
/// An empty deck trivially reports true; sessions refill before asking.
pub fn no_shape_fits(field: &Field, deck: &Deck) -> bool {
    deck.shapes().all(|shape| !can_place_anywhere(field, shape))
}
