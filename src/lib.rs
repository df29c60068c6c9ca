//! gridview - virtualized table for the web
//!
//! Renders large tables into a Canvas 2D surface via WebAssembly:
//! - Only rows and columns intersecting the viewport are drawn
//! - A frozen header row and a frozen leading column prefix
//! - Four independently clipped quadrants, repositioned on every scroll
//! - One batched redraw per wheel tick or touch move
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridview';
//! await init();
//! const view = new GridView(container, {
//!   columns: [{ title: 'ID', width: 180, frozen: true }, { title: 'Name', width: 120 }],
//!   dataSource: [['1', 'Ada'], ['2', 'Linus']],
//! });
//! // later
//! view.free();
//! ```
//!
//! # Usage (Rust)
//!
//! ```
//! use gridview::{Column, DataSource, GridConfig, RecordingSurface, VirtualTable};
//!
//! let columns = vec![Column::frozen("ID", 100.0), Column::new("Name", 100.0)];
//! let data = DataSource::from(vec![["1", "Ada"], ["2", "Linus"]]);
//! let surface = RecordingSurface::new(150.0, 320.0);
//! let mut table = VirtualTable::new(surface, columns, data, GridConfig::default()).unwrap();
//! table.handle_scroll(0.0, 32.0);
//! assert_eq!(table.scroll().scroll_top(), 0.0);
//! ```

pub mod demo;
pub mod engine;
pub mod error;
pub mod layout;
pub mod render;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use engine::{FrameSnapshot, VirtualTable};
pub use error::{GridError, Result};
pub use layout::{FrozenLayout, Quadrant, ScrollState, Viewport, VisibleRange};
pub use render::{CanvasSurface, DrawSurface, RecordingSurface};
#[cfg(target_arch = "wasm32")]
pub use viewer::GridView;

pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
