//! Page geometry for the exported transfer log.
//!
//! All coordinates are PDF points with the origin at the bottom-left corner of the page,
//! so the vertical cursor moves downward by decreasing `y`.

/// Number of data columns in a transfer row.
pub const COLUMN_COUNT: usize = 7;

/// Fixed layout parameters for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub title_x: f32,
    pub title_y: f32,
    pub title_font_size_pt: f32,
    pub body_font_size_pt: f32,
    /// Baseline of the header row on the first page.
    pub header_y: f32,
    /// Vertical advance after each header or data line.
    pub line_height_pt: f32,
    /// A row is moved to a new page when the cursor is strictly below this value.
    pub bottom_threshold_y: f32,
    /// Baseline of the first row on continuation pages.
    pub continuation_top_y: f32,
    pub column_x: [f32; COLUMN_COUNT],
    /// Each cell is cut to this many characters.
    pub max_cell_chars: usize,
}

impl PageConfig {
    /// Baseline of the first data row on page one.
    pub fn first_row_y(&self) -> f32 {
        self.header_y - self.line_height_pt
    }

    /// Rows that fit on page one below the title and header.
    pub fn first_page_capacity(&self) -> usize {
        self.rows_from(self.first_row_y())
    }

    /// Rows that fit on every later page.
    pub fn continuation_capacity(&self) -> usize {
        self.rows_from(self.continuation_top_y)
    }

    fn rows_from(&self, top: f32) -> usize {
        if top < self.bottom_threshold_y || self.line_height_pt <= 0.0 {
            return 0;
        }
        ((top - self.bottom_threshold_y) / self.line_height_pt).floor() as usize + 1
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        default_page_config()
    }
}

/// US Letter, 14pt title, 10pt body, 14pt line advance, seven fixed columns.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width_pt: 612.0,
        page_height_pt: 792.0,
        title_x: 40.0,
        title_y: 760.0,
        title_font_size_pt: 14.0,
        body_font_size_pt: 10.0,
        header_y: 730.0,
        line_height_pt: 14.0,
        bottom_threshold_y: 60.0,
        continuation_top_y: 760.0,
        column_x: [40.0, 110.0, 170.0, 260.0, 360.0, 430.0, 510.0],
        max_cell_chars: 22,
    }
}

/// Cuts `text` to at most `max` characters (not bytes).
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacities() {
        let config = default_page_config();
        // 716 down to 72 in steps of 14.
        assert_eq!(config.first_page_capacity(), 47);
        // 760 down to 60 inclusive.
        assert_eq!(config.continuation_capacity(), 51);
    }

    #[test]
    fn test_columns_fit_on_page() {
        let config = default_page_config();
        assert!(config.column_x.windows(2).all(|w| w[0] < w[1]));
        assert!(config.column_x[COLUMN_COUNT - 1] < config.page_width_pt);
    }

    #[test]
    fn test_capacity_zero_when_top_below_threshold() {
        let config = PageConfig {
            header_y: 50.0,
            ..default_page_config()
        };
        assert_eq!(config.first_page_capacity(), 0);
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("转单记录转单", 4), "转单记录");
        assert_eq!(truncate_chars("", 22), "");
    }
}
