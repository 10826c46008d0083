//! Catalog module - shape template definitions
//!
//! Every placeable shape comes from this static table. Offsets are
//! normalized: each template touches row 0 and column 0, and no offset
//! leaves the `SHAPE_BOX` local box. Template ids double as indices
//! into the table.

use blockfit_types::TemplateId;

/// Offset of a single cell relative to a shape's top-left corner
pub type CellOffset = (u8, u8);

/// An entry in the template catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTemplate {
    pub id: TemplateId,
    pub cells: &'static [CellOffset],
}

/// The full template catalog, indexed by template id
pub const TEMPLATES: &[ShapeTemplate] = &[
    // 0: single cell
    ShapeTemplate {
        id: TemplateId(0),
        cells: &[(0, 0)],
    },
    // 1-2: two in a line, horizontal then vertical
    ShapeTemplate {
        id: TemplateId(1),
        cells: &[(0, 0), (0, 1)],
    },
    ShapeTemplate {
        id: TemplateId(2),
        cells: &[(0, 0), (1, 0)],
    },
    // 3-4: three in a line
    ShapeTemplate {
        id: TemplateId(3),
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    ShapeTemplate {
        id: TemplateId(4),
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    // 5-6: four in a line
    ShapeTemplate {
        id: TemplateId(5),
        cells: &[(0, 0), (0, 1), (0, 2), (0, 3)],
    },
    ShapeTemplate {
        id: TemplateId(6),
        cells: &[(0, 0), (1, 0), (2, 0), (3, 0)],
    },
    // 7-8: five in a line
    ShapeTemplate {
        id: TemplateId(7),
        cells: &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
    },
    ShapeTemplate {
        id: TemplateId(8),
        cells: &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)],
    },
    // 9: two-by-two square
    ShapeTemplate {
        id: TemplateId(9),
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    // 10: three-by-three square
    ShapeTemplate {
        id: TemplateId(10),
        cells: &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ],
    },
    // 11-14: small corners (two-by-two minus one cell)
    ShapeTemplate {
        id: TemplateId(11),
        cells: &[(0, 0), (0, 1), (1, 0)],
    },
    ShapeTemplate {
        id: TemplateId(12),
        cells: &[(0, 0), (0, 1), (1, 1)],
    },
    ShapeTemplate {
        id: TemplateId(13),
        cells: &[(0, 0), (1, 0), (1, 1)],
    },
    ShapeTemplate {
        id: TemplateId(14),
        cells: &[(0, 1), (1, 0), (1, 1)],
    },
    // 15-18: large corners (two edges of a three-by-three box)
    ShapeTemplate {
        id: TemplateId(15),
        cells: &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)],
    },
    ShapeTemplate {
        id: TemplateId(16),
        cells: &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)],
    },
    ShapeTemplate {
        id: TemplateId(17),
        cells: &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)],
    },
    ShapeTemplate {
        id: TemplateId(18),
        cells: &[(0, 2), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
];

/// Look up a template by id
/// Returns None for ids outside the catalog
pub fn template(id: TemplateId) -> Option<&'static ShapeTemplate> {
    TEMPLATES.get(id.0 as usize)
}

/// Number of templates in the catalog
pub fn template_count() -> usize {
    TEMPLATES.len()
}
