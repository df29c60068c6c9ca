//! Viewport size and clamped scroll state.

use serde::Serialize;

use super::{to_index, TableLayout};

/// Visible pixel area of the host surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Viewport width in pixels
    pub width: f64,
    /// Viewport height in pixels
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Rows needed to cover the viewport height: `ceil(height / row_height)`.
    pub fn visible_row_count(&self, row_height: f64) -> usize {
        if !(row_height > 0.0) {
            return 0;
        }
        to_index((self.height / row_height).ceil())
    }
}

/// Current and maximum scroll offsets on both axes.
///
/// Offsets are always within `[0, max]`: the only way to move them is
/// [`ScrollState::scroll_by`], which clamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollState {
    scroll_top: f64,
    scroll_left: f64,
    max_scroll_top: f64,
    max_scroll_left: f64,
}

impl ScrollState {
    /// Scroll state at the origin, with limits derived from the layout.
    ///
    /// `max_scroll_top = max(0, (total_rows - visible_row_count) * row_height)`
    /// `max_scroll_left = max(0, total_width - viewport_width)`
    pub fn new(layout: &TableLayout, viewport: Viewport) -> Self {
        let visible_rows = viewport.visible_row_count(layout.row_height());
        let hidden_rows = layout.total_rows().saturating_sub(visible_rows);
        let max_scroll_top = hidden_rows as f64 * layout.row_height();
        let max_scroll_left = finite_or_zero(layout.total_width() - viewport.width).max(0.0);

        Self {
            scroll_top: 0.0,
            scroll_left: 0.0,
            max_scroll_top,
            max_scroll_left,
        }
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    pub fn max_scroll_top(&self) -> f64 {
        self.max_scroll_top
    }

    pub fn max_scroll_left(&self) -> f64 {
        self.max_scroll_left
    }

    /// Apply a delta on both axes, clamping each into `[0, max]`.
    ///
    /// Non-finite deltas are ignored. Returns true if either offset moved.
    pub fn scroll_by(&mut self, delta_x: f64, delta_y: f64) -> bool {
        let new_left =
            (self.scroll_left + finite_or_zero(delta_x)).clamp(0.0, self.max_scroll_left);
        let new_top = (self.scroll_top + finite_or_zero(delta_y)).clamp(0.0, self.max_scroll_top);
        let moved = (new_left - self.scroll_left).abs() > f64::EPSILON
            || (new_top - self.scroll_top).abs() > f64::EPSILON;
        self.scroll_left = new_left;
        self.scroll_top = new_top;
        moved
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::Column;

    fn layout(cols: usize, width: f64, data_rows: usize) -> TableLayout {
        let columns: Vec<Column> = (0..cols).map(|i| Column::new(format!("C{i}"), width)).collect();
        TableLayout::new(&columns, data_rows, 32.0).unwrap()
    }

    #[test]
    fn test_visible_row_count_rounds_up() {
        assert_eq!(Viewport::new(100.0, 320.0).visible_row_count(32.0), 10);
        assert_eq!(Viewport::new(100.0, 321.0).visible_row_count(32.0), 11);
        assert_eq!(Viewport::new(100.0, 0.0).visible_row_count(32.0), 0);
        assert_eq!(Viewport::new(100.0, -5.0).visible_row_count(32.0), 0);
    }

    #[test]
    fn test_max_scroll_limits() {
        let state = ScrollState::new(&layout(20, 180.0, 2000), Viewport::new(1000.0, 320.0));
        assert_eq!(state.max_scroll_top(), 63712.0);
        assert_eq!(state.max_scroll_left(), 2600.0);
    }

    #[test]
    fn test_content_smaller_than_viewport_cannot_scroll() {
        let mut state = ScrollState::new(&layout(2, 100.0, 3), Viewport::new(800.0, 600.0));
        assert_eq!(state.max_scroll_top(), 0.0);
        assert_eq!(state.max_scroll_left(), 0.0);
        assert!(!state.scroll_by(50.0, 50.0));
        assert_eq!(state.scroll_top(), 0.0);
        assert_eq!(state.scroll_left(), 0.0);
    }

    #[test]
    fn test_scroll_by_clamps_both_ends() {
        let mut state = ScrollState::new(&layout(20, 180.0, 2000), Viewport::new(1000.0, 320.0));
        assert!(state.scroll_by(1e9, 1e9));
        assert_eq!(state.scroll_left(), state.max_scroll_left());
        assert_eq!(state.scroll_top(), state.max_scroll_top());

        assert!(state.scroll_by(-1e9, -1e9));
        assert_eq!(state.scroll_left(), 0.0);
        assert_eq!(state.scroll_top(), 0.0);
    }

    #[test]
    fn test_non_finite_delta_is_ignored() {
        let mut state = ScrollState::new(&layout(20, 180.0, 2000), Viewport::new(1000.0, 320.0));
        state.scroll_by(10.0, 10.0);
        assert!(!state.scroll_by(f64::NAN, f64::INFINITY));
        assert_eq!(state.scroll_left(), 10.0);
        assert_eq!(state.scroll_top(), 10.0);
    }
}
