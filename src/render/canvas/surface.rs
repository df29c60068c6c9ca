//! Canvas 2D implementation of `DrawSurface`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{GridError, Result};
use crate::layout::{Point, Rect};
use crate::render::backend::{DrawSurface, GroupId, Painter, ZOrder};
use crate::render::cell::{CellVisual, RectVisual, TextVisual};
use crate::render::scene::Scene;
use crate::render::text::truncate_text;

const TEXT_MEASURE_CACHE_CAP: usize = 4096;

struct CanvasState {
    ctx: CanvasRenderingContext2d,
    scene: Scene,
    width: f64,
    height: f64,
    dpr: f64,
    /// Cache for text measurements (key: "font\ntext")
    text_widths: HashMap<String, f64>,
}

impl CanvasState {
    fn paint(&mut self) {
        let CanvasState {
            ctx,
            scene,
            width,
            height,
            dpr,
            text_widths,
        } = self;
        let _ = ctx.set_transform(*dpr, 0.0, 0.0, *dpr, 0.0, 0.0);
        ctx.clear_rect(0.0, 0.0, *width, *height);
        let mut painter = CanvasPainter { ctx, text_widths };
        scene.paint(&mut painter);
    }
}

/// Canvas-backed surface. Mutations go to the retained scene; `batch_draw`
/// schedules a single paint on the next animation frame.
pub struct CanvasSurface {
    state: Rc<RefCell<CanvasState>>,
    /// Handle of the pending animation frame, if one is scheduled
    pending_frame: Rc<Cell<Option<i32>>>,
    frame_closure: Closure<dyn FnMut(f64)>,
}

impl CanvasSurface {
    /// Wrap a canvas sized to `width` x `height` logical pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(canvas: &HtmlCanvasElement, width: f64, height: f64, dpr: f64) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| GridError::Surface("Failed to get 2d context".into()))?
            .ok_or_else(|| GridError::Surface("No 2d context available".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GridError::Surface("Failed to cast to CanvasRenderingContext2d".into()))?;

        let width = width.max(0.0);
        let height = height.max(0.0);
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        canvas.set_width((width * dpr).round() as u32);
        canvas.set_height((height * dpr).round() as u32);
        let style = canvas.style();
        let _ = style.set_property("width", &format!("{width}px"));
        let _ = style.set_property("height", &format!("{height}px"));
        let _ = style.set_property("display", "block");

        let state = Rc::new(RefCell::new(CanvasState {
            ctx,
            scene: Scene::new(),
            width,
            height,
            dpr,
            text_widths: HashMap::new(),
        }));
        let pending_frame = Rc::new(Cell::new(None));

        let weak_state = Rc::downgrade(&state);
        let pending = Rc::clone(&pending_frame);
        let frame_closure = Closure::wrap(Box::new(move |_timestamp: f64| {
            pending.set(None);
            if let Some(state) = weak_state.upgrade() {
                state.borrow_mut().paint();
            }
        }) as Box<dyn FnMut(f64)>);

        Ok(Self {
            state,
            pending_frame,
            frame_closure,
        })
    }

    fn cancel_pending_frame(&self) {
        if let Some(handle) = self.pending_frame.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn width(&self) -> f64 {
        self.state.borrow().width
    }

    fn height(&self) -> f64 {
        self.state.borrow().height
    }

    fn create_group(&mut self, clip: Rect) -> GroupId {
        self.state.borrow_mut().scene.create_group(clip)
    }

    fn set_group_offset(&mut self, group: GroupId, offset: Point) {
        self.state.borrow_mut().scene.set_group_offset(group, offset);
    }

    fn destroy_children(&mut self, group: GroupId) {
        self.state.borrow_mut().scene.destroy_children(group);
    }

    fn add_visual(&mut self, group: GroupId, visual: CellVisual, z: ZOrder) {
        self.state.borrow_mut().scene.add_visual(group, visual, z);
    }

    fn batch_draw(&mut self) {
        if self.pending_frame.get().is_some() {
            return;
        }
        let scheduled = web_sys::window().and_then(|window| {
            window
                .request_animation_frame(self.frame_closure.as_ref().unchecked_ref())
                .ok()
        });
        match scheduled {
            Some(handle) => self.pending_frame.set(Some(handle)),
            // No animation frames available (e.g. detached window): paint now
            None => self.state.borrow_mut().paint(),
        }
    }
}

impl Drop for CanvasSurface {
    fn drop(&mut self) {
        self.cancel_pending_frame();
    }
}

struct CanvasPainter<'a> {
    ctx: &'a CanvasRenderingContext2d,
    text_widths: &'a mut HashMap<String, f64>,
}

impl CanvasPainter<'_> {
    fn measure_text_cached(&mut self, text: &str, font: &str) -> f64 {
        let key = format!("{font}\n{text}");
        if let Some(width) = self.text_widths.get(&key) {
            return *width;
        }
        let width = self
            .ctx
            .measure_text(text)
            .map(|m| m.width())
            .unwrap_or(0.0);
        if self.text_widths.len() >= TEXT_MEASURE_CACHE_CAP {
            self.text_widths.clear();
        }
        self.text_widths.insert(key, width);
        width
    }
}

impl Painter for CanvasPainter<'_> {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn clip(&mut self, rect: &Rect) {
        self.ctx.begin_path();
        self.ctx.rect(rect.x, rect.y, rect.width, rect.height);
        self.ctx.clip();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        let _ = self.ctx.translate(dx, dy);
    }

    fn draw_rect(&mut self, rect: &RectVisual) {
        self.ctx.set_fill_style_str(&rect.fill);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        if rect.stroke_width > 0.0 {
            self.ctx.set_stroke_style_str(&rect.stroke);
            self.ctx.set_line_width(rect.stroke_width);
            self.ctx
                .stroke_rect(rect.x, rect.y, rect.width, rect.height);
        }
    }

    fn draw_text(&mut self, text: &TextVisual) {
        if text.width <= 0.0 || text.text.is_empty() {
            return;
        }
        self.ctx.set_font(&text.font);
        let font = text.font.as_str();
        let shown = truncate_text(&text.text, text.width, |s| self.measure_text_cached(s, font));
        self.ctx.set_fill_style_str(&text.color);
        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("middle");
        let _ = self
            .ctx
            .fill_text(&shown, text.x, text.y + text.height / 2.0);
    }
}
