//! Recording drawing surface.
//!
//! Keeps the retained scene in memory and counts redraw requests instead of
//! putting pixels anywhere. Used by tests, benches and the CLI. Painting it
//! yields a flat list of draw operations with labels already truncated, using
//! a fixed-advance width estimate in place of real font metrics.

use serde::Serialize;

use crate::layout::{Point, Rect};
use crate::render::backend::{DrawSurface, GroupId, Painter, ZOrder};
use crate::render::cell::{CellVisual, RectVisual, TextVisual};
use crate::render::scene::Scene;
use crate::render::text::{estimate_width, truncate_text};

/// One painted operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    Save,
    Restore,
    Clip { rect: Rect },
    Translate { dx: f64, dy: f64 },
    Rect { rect: RectVisual },
    Text { x: f64, y: f64, text: String },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    scene: Scene,
    batch_draws: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scene: Scene::new(),
            batch_draws: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Number of redraws requested so far
    pub fn batch_draws(&self) -> usize {
        self.batch_draws
    }

    /// Paint the current scene into a list of operations
    pub fn paint(&self) -> Vec<DrawOp> {
        let mut painter = RecordingPainter::default();
        self.scene.paint(&mut painter);
        painter.ops
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn create_group(&mut self, clip: Rect) -> GroupId {
        self.scene.create_group(clip)
    }

    fn set_group_offset(&mut self, group: GroupId, offset: Point) {
        self.scene.set_group_offset(group, offset);
    }

    fn destroy_children(&mut self, group: GroupId) {
        self.scene.destroy_children(group);
    }

    fn add_visual(&mut self, group: GroupId, visual: CellVisual, z: ZOrder) {
        self.scene.add_visual(group, visual, z);
    }

    fn batch_draw(&mut self) {
        self.batch_draws += 1;
    }
}

#[derive(Default)]
struct RecordingPainter {
    ops: Vec<DrawOp>,
}

impl Painter for RecordingPainter {
    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn clip(&mut self, rect: &Rect) {
        self.ops.push(DrawOp::Clip { rect: *rect });
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops.push(DrawOp::Translate { dx, dy });
    }

    fn draw_rect(&mut self, rect: &RectVisual) {
        self.ops.push(DrawOp::Rect { rect: rect.clone() });
    }

    fn draw_text(&mut self, text: &TextVisual) {
        let shown = truncate_text(&text.text, text.width, |s| estimate_width(s, text.font_size));
        self.ops.push(DrawOp::Text {
            x: text.x,
            y: text.y + text.height / 2.0,
            text: shown.into_owned(),
        });
    }
}
