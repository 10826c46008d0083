//! Lines module - simultaneous full-line detection and clearing
//!
//! Rows and columns are detected together against the same field state,
//! then cleared in one pass. A move that completes a row and a column
//! through the same cell scores both lines; the shared cell is reported
//! in both groups and cleared once.

use blockfit_types::BonusKind;

use crate::field::{CellFill, Field};

/// A full line on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Col(usize),
}

/// One cell of a cleared line, captured before the clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearedCell {
    pub row: usize,
    pub col: usize,
    pub fill: CellFill,
}

/// A cleared line together with the cells it contained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearGroup {
    pub line: Line,
    pub cells: Vec<ClearedCell>,
}

impl ClearGroup {
    /// Bonus items that were sitting on this line
    pub fn bonuses(&self) -> impl Iterator<Item = BonusKind> + '_ {
        self.cells.iter().filter_map(|cell| cell.fill.bonus)
    }
}

/// Row indices where every cell is occupied
///
/// Disabled cells never hold a fill, so their rows never show up here.
pub fn full_rows(field: &Field) -> Vec<usize> {
    (0..field.rows())
        .filter(|&row| (0..field.cols()).all(|col| field.is_occupied(row, col)))
        .collect()
}

/// Column indices where every cell is occupied
pub fn full_cols(field: &Field) -> Vec<usize> {
    (0..field.cols())
        .filter(|&col| (0..field.rows()).all(|row| field.is_occupied(row, col)))
        .collect()
}

/// Detect every full row and column, clear them all, and report what
/// was cleared
///
/// Groups come back rows first, then columns, each axis in ascending
/// index order, with cell contents captured before any clearing.
pub fn detect_and_clear(field: &mut Field) -> Vec<ClearGroup> {
    let rows = full_rows(field);
    let cols = full_cols(field);
    let mut groups = Vec::with_capacity(rows.len() + cols.len());

    for &row in &rows {
        let cells = (0..field.cols())
            .filter_map(|col| capture(field, row, col))
            .collect();
        groups.push(ClearGroup {
            line: Line::Row(row),
            cells,
        });
    }
    for &col in &cols {
        let cells = (0..field.rows())
            .filter_map(|row| capture(field, row, col))
            .collect();
        groups.push(ClearGroup {
            line: Line::Col(col),
            cells,
        });
    }

    for group in &groups {
        for cell in &group.cells {
            field.clear(cell.row, cell.col);
        }
    }
    groups
}

fn capture(field: &Field, row: usize, col: usize) -> Option<ClearedCell> {
    let fill = field.get(row, col)?.fill?;
    Some(ClearedCell { row, col, fill })
}
