//! Frozen-pane quadrants: one clipped group per quadrant, rebuilt from
//! scratch on every render pass.
//!
//! Placement rules:
//! - header cells (row 0) are drawn for every column, whatever the scroll
//! - frozen columns are drawn for every visible data row
//! - scrolling columns are drawn only inside the visible column window,
//!   skipping any index already covered by the frozen prefix

use serde::Serialize;
use tracing::trace;

use crate::layout::{FrozenLayout, Point, Quadrant, Rect, TableLayout, VisibleRange};
use crate::render::backend::{DrawSurface, GroupId, ZOrder};
use crate::render::cell::{CellKind, CellRenderer};
use crate::types::{Column, DataSource};

/// A logical cell placed into a quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellPlacement {
    pub row: usize,
    pub col: usize,
    pub z: ZOrder,
}

/// Bookkeeping for one quadrant's group
#[derive(Debug, Clone, Serialize)]
pub struct QuadrantLayer {
    pub quadrant: Quadrant,
    #[serde(skip)]
    pub group: GroupId,
    pub clip: Rect,
    pub offset: Point,
    /// Cells drawn in the latest pass, in placement order
    pub cells: Vec<CellPlacement>,
}

/// The four quadrant layers
#[derive(Debug, Clone, Serialize)]
pub struct Quadrants {
    layers: Vec<QuadrantLayer>,
}

/// Everything a render pass reads
pub struct RenderInput<'a> {
    pub columns: &'a [Column],
    pub data: &'a DataSource,
    pub layout: &'a TableLayout,
    pub frozen: &'a FrozenLayout,
    pub renderer: &'a CellRenderer,
    pub rows: Option<VisibleRange>,
    pub cols: Option<VisibleRange>,
}

impl Quadrants {
    /// Create one group per quadrant. Scrolling quadrants are created first so
    /// the frozen ones paint over them.
    pub fn create<S: DrawSurface>(surface: &mut S, frozen: &FrozenLayout) -> Self {
        let layers = Quadrant::ALL
            .iter()
            .map(|&quadrant| {
                let clip = frozen.quadrants.get(quadrant);
                QuadrantLayer {
                    quadrant,
                    group: surface.create_group(clip),
                    clip,
                    offset: Point::ORIGIN,
                    cells: Vec::new(),
                }
            })
            .collect();
        Self { layers }
    }

    pub fn get(&self, quadrant: Quadrant) -> Option<&QuadrantLayer> {
        self.layers.get(quadrant.index())
    }

    pub fn layers(&self) -> &[QuadrantLayer] {
        &self.layers
    }

    /// (row, col) pairs drawn into a quadrant in the latest pass
    pub fn cells(&self, quadrant: Quadrant) -> Vec<(usize, usize)> {
        self.get(quadrant)
            .map(|layer| layer.cells.iter().map(|c| (c.row, c.col)).collect())
            .unwrap_or_default()
    }

    /// Total cells drawn in the latest pass
    pub fn cell_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.cells.len()).sum()
    }

    /// Logical cells to draw for the given windows, in placement order.
    pub fn plan(input: &RenderInput<'_>) -> Vec<CellPlacement> {
        let frozen = input.frozen;
        let z_for = |col: usize| {
            if frozen.is_col_frozen(col) {
                ZOrder::Raised
            } else {
                ZOrder::Base
            }
        };
        let mut placements = Vec::new();

        // Header row: every column, independent of the column window
        for col in 0..input.layout.col_count() {
            placements.push(CellPlacement {
                row: 0,
                col,
                z: z_for(col),
            });
        }

        let Some(rows) = input.rows else {
            return placements;
        };
        let frozen_count = frozen.frozen_col_count().min(input.layout.col_count());

        for row in rows.start.max(1)..=rows.end {
            for col in 0..frozen_count {
                placements.push(CellPlacement {
                    row,
                    col,
                    z: ZOrder::Raised,
                });
            }
            if let Some(cols) = input.cols {
                for col in cols.iter().filter(|&col| !frozen.is_col_frozen(col)) {
                    placements.push(CellPlacement {
                        row,
                        col,
                        z: ZOrder::Base,
                    });
                }
            }
        }
        placements
    }

    /// Discard every quadrant's visuals and repopulate them for the given
    /// windows. Cells whose row or column cannot be resolved are skipped.
    pub fn rebuild<S: DrawSurface>(&mut self, surface: &mut S, input: &RenderInput<'_>) {
        for layer in &mut self.layers {
            surface.destroy_children(layer.group);
            layer.cells.clear();
        }

        let row_height = input.layout.row_height();
        for placement in Self::plan(input) {
            let CellPlacement { row, col, z } = placement;
            let Some(rect) = input.layout.cell_rect(row, col) else {
                trace!(row, col, "skipping cell outside layout");
                continue;
            };
            let (text, kind) = if input.frozen.is_row_frozen(row) {
                match input.columns.get(col) {
                    Some(column) => (column.title.as_str(), CellKind::Header),
                    None => {
                        trace!(col, "skipping header without column");
                        continue;
                    }
                }
            } else {
                match input.data.get_logical(row, col) {
                    Some(text) => (text, CellKind::Body),
                    None => {
                        trace!(row, col, "skipping cell outside data");
                        continue;
                    }
                }
            };

            let quadrant = input.frozen.assign(row, col);
            let Some(layer) = self.layers.get_mut(quadrant.index()) else {
                continue;
            };
            let visual = input
                .renderer
                .render(rect.x, rect.y, rect.width, row_height, text, kind);
            surface.add_visual(layer.group, visual, z);
            layer.cells.push(placement);
        }
    }

    /// Move each quadrant's content to follow the scroll offsets it tracks.
    pub fn reposition<S: DrawSurface>(&mut self, surface: &mut S, scroll_left: f64, scroll_top: f64) {
        for layer in &mut self.layers {
            let offset = Point::new(
                if layer.quadrant.scrolls_x() { scroll_left } else { 0.0 },
                if layer.quadrant.scrolls_y() { scroll_top } else { 0.0 },
            );
            layer.offset = offset;
            surface.set_group_offset(layer.group, offset);
        }
    }
}
