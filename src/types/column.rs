use serde::{Deserialize, Serialize};

/// A table column. Its index in the column list fixes its horizontal position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Header label, drawn in row 0
    pub title: String,
    /// Width in logical pixels (must be positive)
    pub width: f64,
    /// Marks the end of the frozen prefix. Any frozen column freezes every
    /// column before it as well.
    #[serde(default, alias = "lock")]
    pub frozen: bool,
}

impl Column {
    /// Create a scrolling column
    pub fn new(title: impl Into<String>, width: f64) -> Self {
        Self {
            title: title.into(),
            width,
            frozen: false,
        }
    }

    /// Create a frozen column
    pub fn frozen(title: impl Into<String>, width: f64) -> Self {
        Self {
            title: title.into(),
            width,
            frozen: true,
        }
    }
}
