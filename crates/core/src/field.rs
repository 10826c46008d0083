//! Field module - manages the playing grid
//!
//! The field is a rows x cols grid where each cell can be empty, filled,
//! or permanently disabled. Uses flat row-major storage.
//! Coordinates: (row, col) where row ranges top to bottom and col ranges
//! left to right.
//!
//! The field only tracks occupancy; placement legality lives in
//! [`crate::placement`] and line clearing in [`crate::lines`].

use blockfit_types::{BonusKind, ColorId};

/// Contents of an occupied cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellFill {
    /// Color template the occupying shape was painted with
    pub color: ColorId,
    /// Bonus item sitting on this cell, if any
    pub bonus: Option<BonusKind>,
}

/// A single field cell
///
/// Disabled cells are permanent holes: they never accept a fill, so a
/// line containing one can never complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub fill: Option<CellFill>,
    pub disabled: bool,
}

/// Why a fill was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    OutOfBounds,
    Disabled,
}

impl FieldError {
    /// Stable machine-readable error code
    pub fn code(self) -> &'static str {
        match self {
            FieldError::OutOfBounds => "out_of_bounds",
            FieldError::Disabled => "cell_disabled",
        }
    }

    /// Human-readable error message
    pub fn message(self) -> &'static str {
        match self {
            FieldError::OutOfBounds => "cell is outside the field",
            FieldError::Disabled => "cell is permanently disabled",
        }
    }
}

/// Starting grid description for an adventure level
///
/// Entries outside the field are ignored when the layout is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelLayout {
    /// Cells that start permanently disabled
    pub blocked: Vec<(usize, usize)>,
    /// Cells that start occupied, with their color
    pub prefilled: Vec<(usize, usize, ColorId)>,
}

/// The playing field - flat row-major cell storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Field {
    /// Create a new empty field
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "field dimensions must be positive");
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        }
    }

    /// Create a field with a level layout applied
    pub fn with_layout(rows: usize, cols: usize, layout: &LevelLayout) -> Self {
        let mut field = Self::new(rows, cols);
        for &(row, col) in &layout.blocked {
            field.disable(row, col);
        }
        for &(row, col, color) in &layout.prefilled {
            let _ = field.fill(row, col, CellFill { color, bonus: None });
        }
        field
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Field height in cells
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Field width in cells
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Check if a cell is unoccupied (within bounds and holding no fill)
    ///
    /// Disabled cells count as empty: they hold nothing and never will,
    /// which is exactly what keeps their lines from completing.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(cell) if cell.fill.is_none())
    }

    /// Check if a cell is occupied (within bounds and filled)
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(cell) if cell.fill.is_some())
    }

    /// Check if a cell is permanently disabled
    pub fn is_disabled(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(cell) if cell.disabled)
    }

    /// Check if a shape cell may land here: within bounds, enabled, empty
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(cell) if !cell.disabled && cell.fill.is_none())
    }

    /// Occupy a cell, overwriting any previous fill
    ///
    /// Rejects out-of-bounds targets and disabled cells.
    pub fn fill(&mut self, row: usize, col: usize, fill: CellFill) -> Result<(), FieldError> {
        let idx = self.index(row, col).ok_or(FieldError::OutOfBounds)?;
        if self.cells[idx].disabled {
            return Err(FieldError::Disabled);
        }
        self.cells[idx].fill = Some(fill);
        Ok(())
    }

    /// Empty a cell, dropping any bonus it carried
    ///
    /// Idempotent; out-of-bounds targets are a no-op.
    pub fn clear(&mut self, row: usize, col: usize) {
        if let Some(idx) = self.index(row, col) {
            self.cells[idx].fill = None;
        }
    }

    /// Permanently disable a cell
    /// Returns false if out of bounds
    pub fn disable(&mut self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx].disabled = true;
                true
            }
            None => false,
        }
    }

    /// Empty every cell while keeping disabled markers
    pub fn clear_filled(&mut self) {
        for cell in &mut self.cells {
            cell.fill = None;
        }
    }

    /// Check if no cell holds a fill (adventure board-cleared condition)
    pub fn all_cleared(&self) -> bool {
        self.cells.iter().all(|cell| cell.fill.is_none())
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.fill.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
