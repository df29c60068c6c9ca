//! Stateless cell renderer.
//!
//! A cell is a bordered background rectangle plus a single-line label inset
//! by the configured padding on the leading edge and top, vertically centred
//! in its box and truncated with an ellipsis by the surface that paints it.

use serde::Serialize;

use crate::types::GridConfig;

/// Filled and stroked rectangle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RectVisual {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

/// Left-aligned, vertically centred, ellipsis-truncated label
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextVisual {
    pub x: f64,
    pub y: f64,
    /// Maximum label width; longer text is truncated with an ellipsis
    pub width: f64,
    pub height: f64,
    pub text: String,
    pub font: String,
    pub font_size: f64,
    pub color: String,
}

/// Drawable unit for one cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellVisual {
    pub rect: RectVisual,
    pub label: TextVisual,
}

/// Which row style a cell uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Header,
    Body,
}

/// Builds cell visuals from a fixed configuration
#[derive(Debug, Clone)]
pub struct CellRenderer {
    config: GridConfig,
    font: String,
}

impl CellRenderer {
    pub fn new(config: GridConfig) -> Self {
        let font = config.font();
        Self { config, font }
    }

    /// Produce the visual for a cell at (x, y) in content coordinates.
    pub fn render(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        text: &str,
        kind: CellKind,
    ) -> CellVisual {
        let (fill, color) = match kind {
            CellKind::Header => (&self.config.header_fill, &self.config.header_text_color),
            CellKind::Body => (&self.config.cell_fill, &self.config.text_color),
        };
        let padding = self.config.cell_padding;

        CellVisual {
            rect: RectVisual {
                x,
                y,
                width,
                height,
                fill: fill.clone(),
                stroke: self.config.cell_stroke.clone(),
                stroke_width: self.config.stroke_width,
            },
            label: TextVisual {
                x: x + padding,
                y: y + padding,
                width: (width - padding * 2.0).max(0.0),
                height: self.config.text_height,
                text: text.to_string(),
                font: self.font.clone(),
                font_size: self.config.font_size,
                color: color.clone(),
            },
        }
    }
}
