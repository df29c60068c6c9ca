use serde::{Deserialize, Serialize};

use super::{Column, DataSource};
use crate::error::{GridError, Result};
use crate::render::colors::{is_css_color, palette};

/// Construction options passed from JavaScript
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub data_source: DataSource,
    #[serde(default)]
    pub config: GridConfig,
}

/// Rendering configuration for a table.
///
/// Every field has a default, so JavaScript callers can pass a partial object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Height of every row, header included
    pub row_height: f64,
    /// Label font size in pixels
    pub font_size: f64,
    /// CSS font family for labels
    pub font_family: String,
    /// Inset of the label from the cell's leading edge and top
    pub cell_padding: f64,
    /// Height of the label box inside a cell
    pub text_height: f64,
    /// Cell background
    pub cell_fill: String,
    /// Cell border color
    pub cell_stroke: String,
    /// Cell border width
    pub stroke_width: f64,
    /// Label color
    pub text_color: String,
    /// Header row background
    pub header_fill: String,
    /// Header row label color
    pub header_text_color: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_height: 32.0,
            font_size: 14.0,
            font_family: "sans-serif".to_string(),
            cell_padding: 8.0,
            text_height: 16.0,
            cell_fill: palette::WHITE.to_string(),
            cell_stroke: palette::CELL_BORDER.to_string(),
            stroke_width: 1.0,
            text_color: palette::BLACK.to_string(),
            header_fill: palette::WHITE.to_string(),
            header_text_color: palette::BLACK.to_string(),
        }
    }
}

impl GridConfig {
    /// Reject values the layout math cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(GridError::InvalidConfig(format!(
                "row height must be positive, got {}",
                self.row_height
            )));
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(GridError::InvalidConfig(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }
        for (name, value) in [
            ("cell padding", self.cell_padding),
            ("text height", self.text_height),
            ("stroke width", self.stroke_width),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(GridError::InvalidConfig(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("cell fill", &self.cell_fill),
            ("cell stroke", &self.cell_stroke),
            ("text color", &self.text_color),
            ("header fill", &self.header_fill),
            ("header text color", &self.header_text_color),
        ] {
            if !is_css_color(value) {
                return Err(GridError::InvalidConfig(format!(
                    "{name} is not a CSS color: {value:?}"
                )));
            }
        }
        Ok(())
    }

    /// CSS font shorthand used for labels
    pub fn font(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }
}
