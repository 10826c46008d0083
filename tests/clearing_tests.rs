//! Line clearing tests - simultaneous rows and columns

use blockfit::core::{detect_and_clear, full_cols, full_rows, CellFill, Field, Line};
use blockfit::types::{BonusKind, ColorId};

fn fill_row(field: &mut Field, row: usize) {
    for col in 0..field.cols() {
        field
            .fill(
                row,
                col,
                CellFill {
                    color: ColorId(1),
                    bonus: None,
                },
            )
            .unwrap();
    }
}

fn fill_col(field: &mut Field, col: usize) {
    for row in 0..field.rows() {
        if field.is_empty(row, col) {
            field
                .fill(
                    row,
                    col,
                    CellFill {
                        color: ColorId(2),
                        bonus: None,
                    },
                )
                .unwrap();
        }
    }
}

#[test]
fn test_no_lines_on_a_sparse_field() {
    let mut field = Field::new(8, 8);
    field
        .fill(
            0,
            0,
            CellFill {
                color: ColorId(1),
                bonus: None,
            },
        )
        .unwrap();
    assert!(full_rows(&field).is_empty());
    assert!(full_cols(&field).is_empty());

    let before = field.clone();
    assert!(detect_and_clear(&mut field).is_empty());
    assert_eq!(field, before);
}

#[test]
fn test_single_row_clears_whole() {
    let mut field = Field::new(8, 8);
    fill_row(&mut field, 2);

    let groups = detect_and_clear(&mut field);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].line, Line::Row(2));
    assert_eq!(groups[0].cells.len(), 8);
    assert!(field.all_cleared());
}

#[test]
fn test_groups_come_rows_first_in_ascending_order() {
    let mut field = Field::new(8, 8);
    fill_row(&mut field, 6);
    fill_row(&mut field, 1);
    fill_col(&mut field, 7);
    fill_col(&mut field, 0);

    let groups = detect_and_clear(&mut field);
    let lines: Vec<Line> = groups.iter().map(|g| g.line).collect();
    assert_eq!(
        lines,
        vec![Line::Row(1), Line::Row(6), Line::Col(0), Line::Col(7)]
    );
    assert!(field.all_cleared());
}

#[test]
fn test_crossing_cell_reported_in_both_groups() {
    let mut field = Field::new(8, 8);
    fill_row(&mut field, 3);
    fill_col(&mut field, 5);

    let groups = detect_and_clear(&mut field);
    assert_eq!(groups.len(), 2);

    let row_group = &groups[0];
    let col_group = &groups[1];
    assert_eq!(row_group.line, Line::Row(3));
    assert_eq!(col_group.line, Line::Col(5));
    // The crossing cell (3, 5) shows up in both captures
    assert!(row_group.cells.iter().any(|c| (c.row, c.col) == (3, 5)));
    assert!(col_group.cells.iter().any(|c| (c.row, c.col) == (3, 5)));
    assert!(field.all_cleared());
}

#[test]
fn test_capture_preserves_fills_and_bonuses() {
    let mut field = Field::new(8, 8);
    for col in 0..8 {
        field
            .fill(
                4,
                col,
                CellFill {
                    color: ColorId(col as u8),
                    bonus: (col == 3).then_some(BonusKind::Gem),
                },
            )
            .unwrap();
    }

    let groups = detect_and_clear(&mut field);
    assert_eq!(groups.len(), 1);
    let cells = &groups[0].cells;
    // Cells captured in line order with their fills intact
    assert_eq!(cells[0].fill.color, ColorId(0));
    assert_eq!(cells[7].fill.color, ColorId(7));
    assert_eq!(cells[3].fill.bonus, Some(BonusKind::Gem));
    assert_eq!(groups[0].bonuses().count(), 1);
}

#[test]
fn test_disabled_cell_blocks_its_lines() {
    let mut field = Field::new(8, 8);
    field.disable(2, 4);
    for col in 0..8 {
        if col != 4 {
            field
                .fill(
                    2,
                    col,
                    CellFill {
                        color: ColorId(1),
                        bonus: None,
                    },
                )
                .unwrap();
        }
    }

    // Row 2 is as full as it can get, but it never completes
    assert!(full_rows(&field).is_empty());
    assert!(detect_and_clear(&mut field).is_empty());
    assert!(field.is_occupied(2, 0));
}

#[test]
fn test_everything_full_clears_everything() {
    let mut field = Field::new(4, 4);
    for row in 0..4 {
        fill_row(&mut field, row);
    }

    let groups = detect_and_clear(&mut field);
    // Four rows then four columns
    assert_eq!(groups.len(), 8);
    assert!(field.all_cleared());
}
