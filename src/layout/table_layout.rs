//! Pre-computed layout data for a table.
//!
//! Column offsets are computed once at construction, since columns never
//! change for the lifetime of a table.

use serde::Serialize;

use crate::error::{GridError, Result};
use crate::types::Column;

/// A point in logical pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from edges; inverted edges collapse to zero size
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            x: left,
            y: top,
            width: (right - left).max(0.0),
            height: (bottom - top).max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Rectangle representing a cell's bounds in content coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Pre-computed layout data for a table
#[derive(Debug, Clone)]
pub struct TableLayout {
    /// Cumulative column positions (`col_positions[i]` = x of column i's left edge,
    /// with one trailing entry for the right edge of the last column)
    col_positions: Vec<f64>,
    /// Column widths
    col_widths: Vec<f64>,
    /// Height shared by every row
    row_height: f64,
    /// Number of data rows (header excluded)
    data_rows: usize,
}

impl TableLayout {
    /// Create a layout, rejecting widths the offset math cannot handle.
    pub fn new(columns: &[Column], data_rows: usize, row_height: f64) -> Result<Self> {
        if !(row_height.is_finite() && row_height > 0.0) {
            return Err(GridError::InvalidConfig(format!(
                "row height must be positive, got {row_height}"
            )));
        }

        let mut col_positions = Vec::with_capacity(columns.len() + 1);
        let mut col_widths = Vec::with_capacity(columns.len());
        let mut x = 0.0;
        for (index, col) in columns.iter().enumerate() {
            if !(col.width.is_finite() && col.width > 0.0) {
                return Err(GridError::InvalidColumnWidth {
                    index,
                    width: col.width,
                });
            }
            col_positions.push(x);
            col_widths.push(col.width);
            x += col.width;
        }
        col_positions.push(x); // Final edge

        Ok(Self {
            col_positions,
            col_widths,
            row_height,
            data_rows,
        })
    }

    pub fn col_count(&self) -> usize {
        self.col_widths.len()
    }

    pub fn col_widths(&self) -> &[f64] {
        &self.col_widths
    }

    /// Number of data rows (header excluded)
    pub fn data_rows(&self) -> usize {
        self.data_rows
    }

    /// Header plus data rows
    pub fn total_rows(&self) -> usize {
        self.data_rows + 1
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// X of a column's left edge: the sum of the widths of all earlier columns.
    /// Indices past the end resolve to the right edge of the last column.
    pub fn col_x(&self, col: usize) -> f64 {
        self.col_positions
            .get(col)
            .or(self.col_positions.last())
            .copied()
            .unwrap_or(0.0)
    }

    /// Y of a logical row's top edge
    pub fn row_y(&self, row: usize) -> f64 {
        row as f64 * self.row_height
    }

    pub fn col_width(&self, col: usize) -> Option<f64> {
        self.col_widths.get(col).copied()
    }

    /// Bounds of a logical cell, or `None` when either index is out of range
    pub fn cell_rect(&self, row: usize, col: usize) -> Option<CellRect> {
        if row >= self.total_rows() {
            return None;
        }
        let width = self.col_width(col)?;
        Some(CellRect {
            x: self.col_x(col),
            y: self.row_y(row),
            width,
            height: self.row_height,
        })
    }

    /// Sum of every column width
    pub fn total_width(&self) -> f64 {
        self.col_positions.last().copied().unwrap_or(0.0)
    }

    /// Height of header plus every data row
    pub fn total_height(&self) -> f64 {
        self.row_y(self.total_rows())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    fn columns(widths: &[f64]) -> Vec<Column> {
        widths
            .iter()
            .enumerate()
            .map(|(i, w)| Column::new(format!("C{i}"), *w))
            .collect()
    }

    #[test]
    fn test_basic_layout() {
        let layout = TableLayout::new(&columns(&[100.0, 50.0, 25.0]), 10, 32.0).unwrap();

        assert_eq!(layout.col_count(), 3);
        assert_eq!(layout.total_rows(), 11);
        assert_eq!(layout.total_width(), 175.0);
        assert_eq!(layout.total_height(), 352.0);
    }

    #[test]
    fn test_col_x_is_prefix_sum() {
        let layout = TableLayout::new(&columns(&[100.0, 50.0, 25.0]), 1, 32.0).unwrap();

        assert_eq!(layout.col_x(0), 0.0);
        assert_eq!(layout.col_x(1), 100.0);
        assert_eq!(layout.col_x(2), 150.0);
        assert_eq!(layout.col_x(3), 175.0);
        assert_eq!(layout.col_x(99), 175.0);
    }

    #[test]
    fn test_cell_rect() {
        let layout = TableLayout::new(&columns(&[100.0, 50.0]), 5, 20.0).unwrap();

        let rect = layout.cell_rect(2, 1).unwrap();
        assert_eq!(rect.x, 100.0);
        assert_eq!(rect.y, 40.0);
        assert_eq!(rect.width, 50.0);
        assert_eq!(rect.height, 20.0);

        assert!(layout.cell_rect(6, 0).is_none());
        assert!(layout.cell_rect(0, 2).is_none());
    }

    #[test]
    fn test_rejects_bad_width() {
        let err = TableLayout::new(&columns(&[100.0, 0.0]), 1, 32.0).unwrap_err();
        assert!(matches!(
            err,
            GridError::InvalidColumnWidth { index: 1, .. }
        ));
        assert!(TableLayout::new(&columns(&[f64::INFINITY]), 1, 32.0).is_err());
    }

    #[test]
    fn test_empty_columns() {
        let layout = TableLayout::new(&[], 0, 32.0).unwrap();
        assert_eq!(layout.col_count(), 0);
        assert_eq!(layout.total_width(), 0.0);
        assert_eq!(layout.col_x(0), 0.0);
        assert_eq!(layout.total_height(), 32.0);
    }

    #[test]
    fn test_rect_from_edges_collapses() {
        let rect = Rect::from_edges(50.0, 10.0, 20.0, 40.0);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 30.0);
        assert!(rect.is_empty());
    }
}
