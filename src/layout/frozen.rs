//! Frozen prefix layout and the four quadrant clip rectangles.
//!
//! Only the header row freezes vertically. Horizontally the frozen region is
//! a prefix: the last column marked frozen pins every column before it.
//! A table with no column marked frozen has no frozen columns at all.

use serde::Serialize;

use super::{Rect, TableLayout};
use crate::types::Column;

/// One of the four independently clipped drawing regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Quadrant {
    /// Header row x frozen columns
    TopLeft,
    /// Header row x scrolling columns
    TopRight,
    /// Data rows x frozen columns
    BottomLeft,
    /// Data rows x scrolling columns
    BottomRight,
}

impl Quadrant {
    /// Draw order: the scrolling body first, the pinned corner last.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::BottomRight,
        Quadrant::BottomLeft,
        Quadrant::TopRight,
        Quadrant::TopLeft,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::BottomRight => 0,
            Self::BottomLeft => 1,
            Self::TopRight => 2,
            Self::TopLeft => 3,
        }
    }

    /// Quadrants that follow horizontal scroll
    pub fn scrolls_x(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    /// Quadrants that follow vertical scroll
    pub fn scrolls_y(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }
}

/// Clip rectangles for the four quadrants
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantRects {
    pub top_left: Rect,
    pub top_right: Rect,
    pub bottom_left: Rect,
    pub bottom_right: Rect,
}

impl QuadrantRects {
    pub fn get(&self, quadrant: Quadrant) -> Rect {
        match quadrant {
            Quadrant::TopLeft => self.top_left,
            Quadrant::TopRight => self.top_right,
            Quadrant::BottomLeft => self.bottom_left,
            Quadrant::BottomRight => self.bottom_right,
        }
    }
}

/// Frozen prefix metrics, derived once from the columns
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrozenLayout {
    /// Index of the last frozen column, `None` when no column is frozen
    pub frozen_col_index: Option<usize>,
    /// Width of columns `0..=frozen_col_index`
    pub frozen_cols_width: f64,
    /// Height of the frozen header row
    pub frozen_row_height: f64,
    /// Clip rectangles over the full content area
    pub quadrants: QuadrantRects,
}

impl FrozenLayout {
    pub fn new(columns: &[Column], layout: &TableLayout) -> Self {
        let frozen_col_index = columns.iter().rposition(|col| col.frozen);
        let frozen_cols_width = frozen_col_index.map_or(0.0, |index| layout.col_x(index + 1));
        let frozen_row_height = layout.row_height();

        let width = layout.total_width();
        let height = layout.total_height();
        let quadrants = QuadrantRects {
            top_left: Rect::from_edges(0.0, 0.0, frozen_cols_width, frozen_row_height),
            top_right: Rect::from_edges(frozen_cols_width, 0.0, width, frozen_row_height),
            bottom_left: Rect::from_edges(0.0, frozen_row_height, frozen_cols_width, height),
            bottom_right: Rect::from_edges(frozen_cols_width, frozen_row_height, width, height),
        };

        Self {
            frozen_col_index,
            frozen_cols_width,
            frozen_row_height,
            quadrants,
        }
    }

    /// Only the header row is frozen
    pub fn is_row_frozen(&self, row: usize) -> bool {
        row == 0
    }

    pub fn is_col_frozen(&self, col: usize) -> bool {
        self.frozen_col_index.is_some_and(|last| col <= last)
    }

    /// Number of frozen columns
    pub fn frozen_col_count(&self) -> usize {
        self.frozen_col_index.map_or(0, |last| last + 1)
    }

    /// Quadrant that owns a logical cell
    pub fn assign(&self, row: usize, col: usize) -> Quadrant {
        match (self.is_row_frozen(row), self.is_col_frozen(col)) {
            (true, true) => Quadrant::TopLeft,
            (true, false) => Quadrant::TopRight,
            (false, true) => Quadrant::BottomLeft,
            (false, false) => Quadrant::BottomRight,
        }
    }
}
