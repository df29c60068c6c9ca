//! Structured error types for gridview.
//!
//! Only construction can fail. Once a table is built, render passes skip
//! anything they cannot draw instead of returning errors.

/// All errors that can occur while building a table or its drawing surface.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A column width that is zero, negative, or not finite.
    #[error("Invalid width {width} for column {index}")]
    InvalidColumnWidth { index: usize, width: f64 },

    /// A configuration value outside its valid range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Host surface / canvas setup failure.
    #[error("Surface error: {0}")]
    Surface(String),

    /// Options passed from JavaScript could not be deserialized.
    #[error("Invalid options: {0}")]
    Options(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
