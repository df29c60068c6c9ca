//! Virtual table engine.
//!
//! Owns the immutable table snapshot plus the per-scroll state, and runs the
//! render pipeline on every scroll delta:
//!
//! `clamp -> visible range -> rebuild quadrants -> reposition -> batched redraw`
//!
//! Every pass rebuilds all four quadrants from scratch. There is no diffing
//! against the previous frame; the visible cell count is bounded by the
//! viewport, not by the row count.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;
use crate::layout::{
    compute_visible_range, FrozenLayout, Quadrant, ScrollState, TableLayout, Viewport,
    VisibleRange,
};
use crate::render::quadrants::RenderInput;
use crate::render::{CellRenderer, DrawSurface, Quadrants};
use crate::types::{Column, DataSource, GridConfig};

/// Virtualized table drawing into a surface `S`
pub struct VirtualTable<S: DrawSurface> {
    surface: S,
    columns: Vec<Column>,
    data: DataSource,
    layout: TableLayout,
    viewport: Viewport,
    frozen: FrozenLayout,
    scroll: ScrollState,
    visible_rows: Option<VisibleRange>,
    visible_cols: Option<VisibleRange>,
    renderer: CellRenderer,
    quadrants: Quadrants,
}

/// Serializable summary of the latest render pass
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    pub viewport: Viewport,
    pub scroll: ScrollState,
    pub visible_rows: Option<VisibleRange>,
    pub visible_cols: Option<VisibleRange>,
    pub frozen: FrozenLayout,
    pub quadrants: Quadrants,
}

impl<S: DrawSurface> VirtualTable<S> {
    /// Build a table over `surface` and draw the first frame.
    ///
    /// The viewport is the surface's current size. Columns and data are
    /// owned by the table from here on and never change.
    pub fn new(
        mut surface: S,
        columns: Vec<Column>,
        data: DataSource,
        config: GridConfig,
    ) -> Result<Self> {
        config.validate()?;
        let layout = TableLayout::new(&columns, data.row_count(), config.row_height)?;
        let viewport = Viewport::new(surface.width(), surface.height());
        let frozen = FrozenLayout::new(&columns, &layout);
        let scroll = ScrollState::new(&layout, viewport);
        let quadrants = Quadrants::create(&mut surface, &frozen);

        debug!(
            columns = layout.col_count(),
            rows = layout.data_rows(),
            frozen_cols = frozen.frozen_col_count(),
            frozen_width = frozen.frozen_cols_width,
            max_scroll_top = scroll.max_scroll_top(),
            max_scroll_left = scroll.max_scroll_left(),
            "virtual table created"
        );

        let mut table = Self {
            surface,
            columns,
            data,
            layout,
            viewport,
            frozen,
            scroll,
            visible_rows: None,
            visible_cols: None,
            renderer: CellRenderer::new(config),
            quadrants,
        };
        table.render_pass();
        Ok(table)
    }

    /// Apply a scroll delta and redraw.
    ///
    /// Offsets are clamped to `[0, max]` on both axes before anything else
    /// reads them. The full pass runs even when the clamped offsets did not
    /// move.
    pub fn handle_scroll(&mut self, delta_x: f64, delta_y: f64) {
        let moved = self.scroll.scroll_by(delta_x, delta_y);
        trace!(
            delta_x,
            delta_y,
            moved,
            scroll_left = self.scroll.scroll_left(),
            scroll_top = self.scroll.scroll_top(),
            "scroll"
        );
        self.render_pass();
    }

    fn render_pass(&mut self) {
        self.update_visible_range();
        self.render_cells();
        self.quadrants.reposition(
            &mut self.surface,
            self.scroll.scroll_left(),
            self.scroll.scroll_top(),
        );
        self.surface.batch_draw();
    }

    fn update_visible_range(&mut self) {
        let (rows, cols) = compute_visible_range(
            &self.scroll,
            self.viewport,
            &self.layout,
            self.frozen.frozen_cols_width,
        );
        self.visible_rows = rows;
        self.visible_cols = cols;
    }

    fn render_cells(&mut self) {
        let input = RenderInput {
            columns: &self.columns,
            data: &self.data,
            layout: &self.layout,
            frozen: &self.frozen,
            renderer: &self.renderer,
            rows: self.visible_rows,
            cols: self.visible_cols,
        };
        self.quadrants.rebuild(&mut self.surface, &input);
        trace!(
            cells = self.quadrants.cell_count(),
            rows = ?self.visible_rows,
            cols = ?self.visible_cols,
            "quadrants rebuilt"
        );
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn visible_rows(&self) -> Option<VisibleRange> {
        self.visible_rows
    }

    pub fn visible_cols(&self) -> Option<VisibleRange> {
        self.visible_cols
    }

    pub fn frozen(&self) -> &FrozenLayout {
        &self.frozen
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn quadrants(&self) -> &Quadrants {
        &self.quadrants
    }

    /// (row, col) pairs drawn into a quadrant by the latest pass
    pub fn quadrant_cells(&self, quadrant: Quadrant) -> Vec<(usize, usize)> {
        self.quadrants.cells(quadrant)
    }

    /// X of a column's left edge
    pub fn col_x(&self, col: usize) -> f64 {
        self.layout.col_x(col)
    }

    /// Y of a logical row's top edge
    pub fn row_y(&self, row: usize) -> f64 {
        self.layout.row_y(row)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            viewport: self.viewport,
            scroll: self.scroll,
            visible_rows: self.visible_rows,
            visible_cols: self.visible_cols,
            frozen: self.frozen,
            quadrants: self.quadrants.clone(),
        }
    }
}
