//! Viewport state: which part of the virtual grid is on screen.

use std::ops::Range;

use super::columns::Column;

/// Visible area of the grid in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Horizontal scroll position in grid coordinates
    pub scroll_x: f64,
    /// Vertical scroll position in grid coordinates
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
        }
    }

    /// Columns at least partially inside the viewport.
    pub fn visible_cols(&self, columns: &[Column]) -> Range<usize> {
        let left = self.scroll_x.max(0.0);
        let right = left + self.width.max(0.0);
        let starts = column_offsets(columns);

        // widths are positive, so both starts and ends increase
        let first = columns
            .iter()
            .zip(&starts)
            .take_while(|(c, start)| *start + c.width <= left)
            .count();
        let end = starts.partition_point(|start| *start < right);
        first..end.max(first)
    }

    /// Rows at least partially inside the viewport, clamped to `row_count`.
    pub fn visible_rows(&self, row_height: f64, row_count: usize) -> Range<usize> {
        if row_height <= 0.0 || !row_height.is_finite() {
            return 0..0;
        }
        let top = self.scroll_y.max(0.0);
        let bottom = top + self.height.max(0.0);
        let first = ((top / row_height).floor() as usize).min(row_count);
        let end = ((bottom / row_height).ceil() as usize).min(row_count);
        first..end.max(first)
    }

    /// Scrolls so that `row` is the first visible row.
    pub fn scroll_to_row(&self, row: usize, row_height: f64) -> Self {
        Self {
            scroll_y: row as f64 * row_height,
            ..*self
        }
    }
}

/// Left edge of each column, in column order.
pub fn column_offsets(columns: &[Column]) -> Vec<f64> {
    columns
        .iter()
        .scan(0.0, |x, c| {
            let start = *x;
            *x += c.width;
            Some(start)
        })
        .collect()
}

/// Find column at x position (binary search). `None` outside the grid.
pub fn col_at_x(columns: &[Column], x: f64) -> Option<usize> {
    let total: f64 = columns.iter().map(|c| c.width).sum();
    if columns.is_empty() || !(0.0..total).contains(&x) {
        return None;
    }
    let starts = column_offsets(columns);
    match starts.binary_search_by(|pos| pos.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => Some(i),
        Err(i) => Some(i.saturating_sub(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::columns::ColumnClass;

    fn columns(widths: &[f64]) -> Vec<Column> {
        widths
            .iter()
            .enumerate()
            .map(|(i, &width)| Column {
                title: format!("c{}", i),
                group: String::new(),
                width,
                class: ColumnClass::Identifier,
            })
            .collect()
    }

    #[test]
    fn test_column_offsets() {
        assert_eq!(column_offsets(&columns(&[10.0, 20.0, 5.0])), vec![0.0, 10.0, 30.0]);
    }

    #[test]
    fn test_col_at_x() {
        let cols = columns(&[100.0, 50.0, 50.0]);
        assert_eq!(col_at_x(&cols, 0.0), Some(0));
        assert_eq!(col_at_x(&cols, 99.9), Some(0));
        assert_eq!(col_at_x(&cols, 100.0), Some(1));
        assert_eq!(col_at_x(&cols, 199.0), Some(2));
        assert_eq!(col_at_x(&cols, 200.0), None);
        assert_eq!(col_at_x(&cols, -1.0), None);
        assert_eq!(col_at_x(&[], 0.0), None);
    }

    #[test]
    fn test_visible_cols() {
        let cols = columns(&[100.0, 100.0, 100.0, 100.0]);
        let mut vp = Viewport::new(150.0, 100.0);
        assert_eq!(vp.visible_cols(&cols), 0..2);

        vp.scroll_x = 100.0;
        assert_eq!(vp.visible_cols(&cols), 1..3);

        vp.scroll_x = 350.0;
        assert_eq!(vp.visible_cols(&cols), 3..4);

        vp.scroll_x = 1000.0;
        assert_eq!(vp.visible_cols(&cols), 4..4);
    }

    #[test]
    fn test_visible_rows() {
        let vp = Viewport::new(800.0, 100.0);
        assert_eq!(vp.visible_rows(34.0, 1000), 0..3);
        assert_eq!(vp.visible_rows(34.0, 2), 0..2);
        assert_eq!(vp.visible_rows(0.0, 10), 0..0);

        let scrolled = vp.scroll_to_row(10, 34.0);
        assert_eq!(scrolled.visible_rows(34.0, 1000), 10..13);
        assert_eq!(scrolled.visible_rows(34.0, 5), 5..5);
    }
}
