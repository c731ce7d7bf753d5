//! Reusable layout helpers for card grids

use ratatui::layout::Rect;

/// Columns of equally sized cards that fill the available width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub card_width: u16,
}

impl GridLayout {
    const SPACING: u16 = 1;

    /// Fit as many columns as possible, each at least `min_width` wide, capped at `max_columns`
    pub fn new(width: u16, min_width: u16, max_columns: usize) -> Self {
        let columns = if width >= min_width {
            ((width + Self::SPACING) / (min_width + Self::SPACING)) as usize
        } else {
            1
        };
        let columns = columns.clamp(1, max_columns.max(1));

        let total_spacing = (columns as u16 - 1) * Self::SPACING;
        Self {
            columns,
            card_width: width.saturating_sub(total_spacing) / columns as u16,
        }
    }

    /// Number of rows needed for `count` cards
    pub fn rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }

    /// Horizontal extent of a column inside `area`
    pub fn column_area(&self, area: Rect, col: usize, y: u16, height: u16) -> Rect {
        Rect {
            x: area.x + col as u16 * (self.card_width + Self::SPACING),
            y,
            width: self.card_width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_columns_to_width() {
        let grid = GridLayout::new(80, 24, 4);
        assert_eq!(grid.columns, 3);
        assert_eq!(grid.card_width, 26);
    }

    #[test]
    fn test_caps_columns() {
        let grid = GridLayout::new(200, 20, 2);
        assert_eq!(grid.columns, 2);
        assert_eq!(grid.card_width, 99);
    }

    #[test]
    fn test_narrow_width_gives_single_column() {
        let grid = GridLayout::new(10, 24, 4);
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.card_width, 10);
    }

    #[test]
    fn test_rows_round_up() {
        let grid = GridLayout::new(80, 24, 4);
        assert_eq!(grid.rows(3), 1);
        assert_eq!(grid.rows(4), 2);
        assert_eq!(grid.rows(6), 2);
    }

    #[test]
    fn test_column_area_steps_by_card_and_spacing() {
        let grid = GridLayout::new(80, 24, 4);
        let area = Rect::new(2, 0, 80, 20);
        assert_eq!(grid.column_area(area, 2, 5, 4), Rect::new(56, 5, 26, 4));
    }
}
