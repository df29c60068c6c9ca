//! Canvas 2D drawing surface.
//!
//! Paints the retained scene with the HTML Canvas 2D API via web-sys.
//! Redraw requests are coalesced to the next animation frame.

mod surface;

pub use surface::CanvasSurface;
