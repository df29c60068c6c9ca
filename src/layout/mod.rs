//! Layout engine for column positions, scroll state and visible ranges.
//!
//! This module handles:
//! - Pre-computing column offsets from column widths (prefix sums)
//! - Clamped scroll offsets on both axes
//! - Deriving the row/column windows that must be drawn
//! - The frozen prefix and the four quadrant clip rectangles

mod frozen;
mod table_layout;
mod viewport;
mod visible;

pub use frozen::{FrozenLayout, Quadrant, QuadrantRects};
pub use table_layout::{CellRect, Point, Rect, TableLayout};
pub use viewport::{ScrollState, Viewport};
pub use visible::{compute_visible_range, visible_cols, visible_rows, VisibleRange};

/// Convert a non-negative pixel quotient to an index, mapping NaN and
/// negatives to 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_index(value: f64) -> usize {
    if value.is_finite() && value > 0.0 {
        value as usize
    } else {
        0
    }
}
