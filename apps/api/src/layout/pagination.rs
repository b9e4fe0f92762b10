//! Row pagination: decides which page every data row lands on and at which baseline.
//!
//! The plan is computed before any PDF object exists so the writer in `render` only
//! follows it. A row is pushed to a fresh page when the cursor has dropped below
//! `bottom_threshold_y`; only the first page carries the title and header labels.

use crate::layout::geometry::PageConfig;

/// A data row placed on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedRow {
    /// 0-based index into the submitted rows.
    pub index: usize,
    /// Baseline of the row.
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    /// 1-based page number.
    pub number: usize,
    /// Title and header labels are drawn on page one only.
    pub has_header: bool,
    pub rows: Vec<PlacedRow>,
}

/// Lays out `row_count` rows. Always returns at least one page.
pub fn paginate(row_count: usize, config: &PageConfig) -> Vec<PagePlan> {
    let mut pages = vec![PagePlan {
        number: 1,
        has_header: true,
        rows: Vec::new(),
    }];
    let mut y = config.first_row_y();

    for index in 0..row_count {
        if y < config.bottom_threshold_y {
            pages.push(PagePlan {
                number: pages.len() + 1,
                has_header: false,
                rows: Vec::new(),
            });
            y = config.continuation_top_y;
        }
        if let Some(page) = pages.last_mut() {
            page.rows.push(PlacedRow { index, y });
        }
        y -= config.line_height_pt;
    }

    pages
}
