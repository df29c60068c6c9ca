//! Retained scene: clipped, offset groups holding z-ordered cell visuals.
//!
//! Clip rectangles are in surface coordinates and stay put; a group's offset
//! only moves its content. Both the canvas and the recording surface keep
//! one of these and paint it through a [`Painter`].

use serde::Serialize;

use crate::layout::{Point, Rect};
use crate::render::backend::{GroupId, Painter, ZOrder};
use crate::render::cell::CellVisual;

#[derive(Debug, Clone, Serialize)]
struct Node {
    visual: CellVisual,
    z: ZOrder,
}

/// One clipped group
#[derive(Debug, Clone, Serialize)]
pub struct SceneGroup {
    pub clip: Rect,
    pub offset: Point,
    nodes: Vec<Node>,
}

impl SceneGroup {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Visuals in paint order (base first, raised last, insertion order otherwise)
    pub fn visuals(&self) -> impl Iterator<Item = &CellVisual> {
        let mut ordered: Vec<&Node> = self.nodes.iter().collect();
        ordered.sort_by_key(|node| node.z);
        ordered.into_iter().map(|node| &node.visual)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Scene {
    groups: Vec<SceneGroup>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_group(&mut self, clip: Rect) -> GroupId {
        self.groups.push(SceneGroup {
            clip,
            offset: Point::ORIGIN,
            nodes: Vec::new(),
        });
        GroupId(self.groups.len() - 1)
    }

    pub fn group(&self, id: GroupId) -> Option<&SceneGroup> {
        self.groups.get(id.0)
    }

    pub fn groups(&self) -> &[SceneGroup] {
        &self.groups
    }

    pub fn set_group_offset(&mut self, id: GroupId, offset: Point) {
        if let Some(group) = self.groups.get_mut(id.0) {
            group.offset = offset;
        }
    }

    pub fn destroy_children(&mut self, id: GroupId) {
        if let Some(group) = self.groups.get_mut(id.0) {
            group.nodes.clear();
        }
    }

    pub fn add_visual(&mut self, id: GroupId, visual: CellVisual, z: ZOrder) {
        if let Some(group) = self.groups.get_mut(id.0) {
            group.nodes.push(Node { visual, z });
        }
    }

    /// Total visuals across all groups
    pub fn visual_count(&self) -> usize {
        self.groups.iter().map(SceneGroup::len).sum()
    }

    /// Paint every group in creation order. Empty clips are skipped.
    pub fn paint<P: Painter>(&self, painter: &mut P) {
        for group in &self.groups {
            if group.clip.is_empty() || group.is_empty() {
                continue;
            }
            painter.save();
            painter.clip(&group.clip);
            painter.translate(-group.offset.x, -group.offset.y);
            for visual in group.visuals() {
                painter.draw_rect(&visual.rect);
                painter.draw_text(&visual.label);
            }
            painter.restore();
        }
    }
}
