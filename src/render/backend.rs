//! Drawing surface traits.
//!
//! `DrawSurface` is the retained-mode interface the table engine mutates:
//! clipped groups with an offset, cell visuals with a z-order, and a single
//! batched redraw request per pass. `Painter` is the immediate-mode side a
//! surface uses to actually put a [`Scene`](super::Scene) on screen.

use serde::Serialize;

use crate::layout::{Point, Rect};
use crate::render::cell::{CellVisual, RectVisual, TextVisual};

/// Handle to a clipped group on a drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GroupId(pub(crate) usize);

/// Draw order of a visual within its group. Raised visuals paint after base
/// visuals and occlude them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ZOrder {
    Base,
    Raised,
}

/// Retained drawing surface the engine renders into
pub trait DrawSurface {
    /// Current width of the host surface in logical pixels
    fn width(&self) -> f64;

    /// Current height of the host surface in logical pixels
    fn height(&self) -> f64;

    /// Create a group clipped to `clip` (surface coordinates). Groups paint
    /// in creation order.
    fn create_group(&mut self, clip: Rect) -> GroupId;

    /// Shift a group's content by `-offset` without moving its clip
    fn set_group_offset(&mut self, group: GroupId, offset: Point);

    /// Discard every visual in a group
    fn destroy_children(&mut self, group: GroupId);

    /// Add a cell visual to a group
    fn add_visual(&mut self, group: GroupId, visual: CellVisual, z: ZOrder);

    /// Request one redraw covering every mutation since the previous request
    fn batch_draw(&mut self);
}

/// Immediate-mode drawing operations used to paint a scene
pub trait Painter {
    fn save(&mut self);
    fn restore(&mut self);
    fn clip(&mut self, rect: &Rect);
    fn translate(&mut self, dx: f64, dy: f64);
    fn draw_rect(&mut self, rect: &RectVisual);
    fn draw_text(&mut self, text: &TextVisual);
}
