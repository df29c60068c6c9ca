//! Common test utilities and assertion helpers.
//!
//! Builders for columns, data and tables drawn into a `RecordingSurface`,
//! plus checks shared by the integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::collections::HashSet;

use gridview::{Column, DataSource, GridConfig, Quadrant, RecordingSurface, VirtualTable};

pub const ROW_HEIGHT: f64 = 32.0;

// ============================================================================
// Builders
// ============================================================================

/// Columns with the given widths; the first `frozen` of them are frozen.
pub fn columns(widths: &[f64], frozen: usize) -> Vec<Column> {
    widths
        .iter()
        .enumerate()
        .map(|(i, &w)| Column {
            title: format!("C{i}"),
            width: w,
            frozen: i < frozen,
        })
        .collect()
}

/// `count` columns of the same width
pub fn uniform_columns(count: usize, width: f64, frozen: usize) -> Vec<Column> {
    columns(&vec![width; count], frozen)
}

/// Data rows with cells labelled `r{row}c{col}`
pub fn grid_data(rows: usize, cols: usize) -> DataSource {
    DataSource::new(
        (0..rows)
            .map(|r| (0..cols).map(|c| format!("r{r}c{c}")).collect())
            .collect(),
    )
}

/// Table with `rows` data rows matching `columns`, at the given viewport size
pub fn table(
    columns: Vec<Column>,
    rows: usize,
    width: f64,
    height: f64,
) -> VirtualTable<RecordingSurface> {
    let data = grid_data(rows, columns.len());
    VirtualTable::new(
        RecordingSurface::new(width, height),
        columns,
        data,
        GridConfig::default(),
    )
    .expect("Failed to build table")
}

/// The 20 x 2000 roster used by the demo
pub fn demo_table(width: f64, height: f64) -> VirtualTable<RecordingSurface> {
    VirtualTable::new(
        RecordingSurface::new(width, height),
        gridview::demo::demo_columns(gridview::demo::DEMO_COLUMNS),
        gridview::demo::demo_data_source(gridview::demo::DEMO_ROWS),
        GridConfig::default(),
    )
    .expect("Failed to build demo table")
}

// ============================================================================
// Assertions
// ============================================================================

/// Every (row, col) drawn in the latest pass, across all quadrants
pub fn all_cells(table: &VirtualTable<RecordingSurface>) -> Vec<(usize, usize)> {
    Quadrant::ALL
        .iter()
        .flat_map(|&q| table.quadrant_cells(q))
        .collect()
}

/// Same as `all_cells`, as a set
pub fn cell_set(table: &VirtualTable<RecordingSurface>) -> HashSet<(usize, usize)> {
    all_cells(table).into_iter().collect()
}

/// `start * row_height <= scroll_top < (start + 1) * row_height`
pub fn assert_row_start_brackets_scroll(table: &VirtualTable<RecordingSurface>) {
    let rows = table.visible_rows().expect("no visible rows");
    let top = table.scroll().scroll_top();
    let rh = table.layout().row_height();
    let start = rows.start as f64;
    assert!(
        start * rh <= top && top < (start + 1.0) * rh,
        "row start {} does not bracket scroll_top {}",
        rows.start,
        top
    );
}

/// Scroll offsets stay within `[0, max]`
pub fn assert_scroll_in_bounds(table: &VirtualTable<RecordingSurface>) {
    let s = table.scroll();
    assert!(s.scroll_top() >= 0.0 && s.scroll_top() <= s.max_scroll_top());
    assert!(s.scroll_left() >= 0.0 && s.scroll_left() <= s.max_scroll_left());
}
