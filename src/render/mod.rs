//! Rendering engine with pluggable drawing surfaces.
//!
//! This module provides:
//! - The `DrawSurface` trait the engine draws through
//! - A retained scene (clipped, offset groups of z-ordered cell visuals)
//! - The stateless cell renderer and text truncation
//! - Quadrant bookkeeping for the frozen panes
//! - Canvas 2D and recording surfaces

pub mod backend;
pub mod canvas;
pub mod cell;
pub mod colors;
pub mod quadrants;
pub mod recording;
pub mod scene;
pub mod text;

// Re-export commonly used types
pub use backend::{DrawSurface, GroupId, Painter, ZOrder};
pub use canvas::CanvasSurface;
pub use cell::{CellKind, CellRenderer, CellVisual, RectVisual, TextVisual};
pub use colors::palette;
pub use quadrants::{CellPlacement, QuadrantLayer, Quadrants};
pub use recording::{DrawOp, RecordingSurface};
pub use scene::Scene;
