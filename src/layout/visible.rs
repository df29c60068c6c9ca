//! Visible row/column window computation.
//!
//! Ranges are inclusive on both ends. The row window deliberately keeps one
//! row beyond `ceil(height / row_height)` so the partially visible trailing
//! row is drawn when `scroll_top` is not row-aligned.

use serde::Serialize;

use super::{to_index, ScrollState, TableLayout, Viewport};

/// Inclusive index window `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) + 1
    }

    pub fn iter(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Rows eligible for drawing, as logical row indices (0 is the header).
///
/// `start = floor(scroll_top / row_height)`,
/// `end = min(start + visible_row_count, data_rows)`.
/// Returns `None` for a viewport with no height.
pub fn visible_rows(
    scroll_top: f64,
    viewport_height: f64,
    row_height: f64,
    data_rows: usize,
) -> Option<VisibleRange> {
    if !(row_height > 0.0) {
        return None;
    }
    let visible_row_count = Viewport::new(0.0, viewport_height).visible_row_count(row_height);
    if visible_row_count == 0 {
        return None;
    }
    let start = to_index((scroll_top / row_height).floor());
    let end = (start + visible_row_count).min(data_rows);
    (start <= end).then_some(VisibleRange { start, end })
}

/// Columns eligible for drawing in the scrolling window.
///
/// The scrolling pane shows content x in
/// `[scroll_left + frozen_cols_width, scroll_left + viewport_width]`.
/// `start` is the first column whose right edge reaches the pane's left edge.
/// From there columns are taken until one crosses the pane's right edge;
/// `end` is the column after that one. When the remaining columns all fit,
/// `end` is the last column. Returns `None` for a zero-width viewport or a
/// table without columns.
pub fn visible_cols(
    col_widths: &[f64],
    scroll_left: f64,
    viewport_width: f64,
    frozen_cols_width: f64,
) -> Option<VisibleRange> {
    let last = col_widths.len().checked_sub(1)?;
    if !(viewport_width > 0.0) {
        return None;
    }

    let pane_left = scroll_left + frozen_cols_width;
    let pane_right = scroll_left + viewport_width;

    let mut start = None;
    let mut end = last;
    let mut right_edge = 0.0;
    for (i, width) in col_widths.iter().enumerate() {
        right_edge += width;
        if start.is_none() {
            if right_edge < pane_left {
                continue;
            }
            start = Some(i);
        }
        if right_edge > pane_right {
            end = (i + 1).min(last);
            break;
        }
    }

    let start = start.unwrap_or(last);
    Some(VisibleRange {
        start,
        end: end.max(start),
    })
}

/// Both windows for the current scroll position.
pub fn compute_visible_range(
    scroll: &ScrollState,
    viewport: Viewport,
    layout: &TableLayout,
    frozen_cols_width: f64,
) -> (Option<VisibleRange>, Option<VisibleRange>) {
    let rows = visible_rows(
        scroll.scroll_top(),
        viewport.height,
        layout.row_height(),
        layout.data_rows(),
    );
    let cols = visible_cols(
        layout.col_widths(),
        scroll.scroll_left(),
        viewport.width,
        frozen_cols_width,
    );
    (rows, cols)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_at_origin() {
        let rows = visible_rows(0.0, 320.0, 32.0, 2000).unwrap();
        assert_eq!(rows, VisibleRange::new(0, 10));
    }

    #[test]
    fn test_rows_partial_scroll() {
        let rows = visible_rows(40.0, 320.0, 32.0, 2000).unwrap();
        assert_eq!(rows.start, 1);
        assert_eq!(rows.end, 11);
    }

    #[test]
    fn test_rows_clamped_to_data() {
        let rows = visible_rows(0.0, 320.0, 32.0, 4).unwrap();
        assert_eq!(rows, VisibleRange::new(0, 4));
    }

    #[test]
    fn test_rows_empty_viewport() {
        assert!(visible_rows(0.0, 0.0, 32.0, 100).is_none());
    }

    #[test]
    fn test_rows_no_data_keeps_header() {
        let rows = visible_rows(0.0, 320.0, 32.0, 0).unwrap();
        assert_eq!(rows, VisibleRange::new(0, 0));
    }

    #[test]
    fn test_cols_window() {
        let widths = [100.0; 10];
        // Pane spans 100..400; column 4 crosses its right edge
        let cols = visible_cols(&widths, 0.0, 400.0, 100.0).unwrap();
        assert_eq!(cols, VisibleRange::new(0, 5));
    }

    #[test]
    fn test_cols_start_follows_scroll() {
        let widths = [100.0; 10];
        let cols = visible_cols(&widths, 250.0, 400.0, 0.0).unwrap();
        assert_eq!(cols.start, 2);
        assert_eq!(cols.end, 7);
    }

    #[test]
    fn test_cols_wide_viewport_covers_all() {
        let widths = [100.0, 100.0, 100.0];
        let cols = visible_cols(&widths, 0.0, 5000.0, 100.0).unwrap();
        assert_eq!(cols, VisibleRange::new(0, 2));
    }

    #[test]
    fn test_cols_end_clamped_to_last() {
        let widths = [100.0, 100.0, 100.0];
        let cols = visible_cols(&widths, 0.0, 250.0, 0.0).unwrap();
        assert_eq!(cols, VisibleRange::new(0, 2));
    }

    #[test]
    fn test_cols_start_after_wide_frozen_prefix() {
        // Three frozen columns cover 0..300; the pane starts at 300
        let widths = [100.0; 8];
        let cols = visible_cols(&widths, 0.0, 400.0, 300.0).unwrap();
        assert_eq!(cols, VisibleRange::new(2, 5));

        // Scrolled by 500 the pane shows content 1000..1100
        let widths = [100.0; 14];
        let cols = visible_cols(&widths, 500.0, 600.0, 500.0).unwrap();
        assert_eq!(cols, VisibleRange::new(9, 12));
    }

    #[test]
    fn test_cols_narrow_columns_behind_wide_frozen() {
        // 300px frozen column, 50px columns: pane 300..400 shows 1 and 2
        let widths = [300.0, 50.0, 50.0, 50.0, 50.0, 50.0];
        let cols = visible_cols(&widths, 0.0, 400.0, 300.0).unwrap();
        assert!(cols.contains(1));
        assert!(cols.contains(2));
    }

    #[test]
    fn test_cols_zero_width_viewport() {
        assert!(visible_cols(&[100.0, 100.0], 0.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn test_cols_no_columns() {
        assert!(visible_cols(&[], 0.0, 500.0, 0.0).is_none());
    }

    #[test]
    fn test_range_helpers() {
        let range = VisibleRange::new(3, 5);
        assert_eq!(range.len(), 3);
        assert!(range.contains(3));
        assert!(range.contains(5));
        assert!(!range.contains(6));
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![3, 4, 5]);
    }
}
