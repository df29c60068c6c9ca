//! Wheel and touch input for `GridView`.
//!
//! The adapter only turns DOM events into scroll deltas. Everything after
//! that (clamping, range computation, redraw) belongs to `VirtualTable`.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{AddEventListenerOptions, Event, HtmlElement, TouchEvent, WheelEvent};

#[cfg(target_arch = "wasm32")]
use super::SharedTable;
#[cfg(target_arch = "wasm32")]
use crate::error::{GridError, Result};
use crate::layout::Viewport;

/// `WheelEvent.deltaMode` values
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

/// A scroll request in logical pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollDelta {
    pub x: f64,
    pub y: f64,
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl ScrollDelta {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: finite_or_zero(x),
            y: finite_or_zero(y),
        }
    }

    /// Normalize a wheel tick to pixels.
    ///
    /// Line mode scrolls one row per line on both axes; page mode scrolls one
    /// viewport extent per page. Unknown modes are treated as pixels.
    pub fn from_wheel(
        delta_x: f64,
        delta_y: f64,
        delta_mode: u32,
        row_height: f64,
        viewport: Viewport,
    ) -> Self {
        let (scale_x, scale_y) = match delta_mode {
            DOM_DELTA_LINE => (row_height, row_height),
            DOM_DELTA_PAGE => (viewport.width, viewport.height),
            _ => (1.0, 1.0),
        };
        Self::new(
            finite_or_zero(delta_x) * scale_x,
            finite_or_zero(delta_y) * scale_y,
        )
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Tracks the last touch position of a single-finger drag
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchTracker {
    last: Option<(f64, f64)>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, x: f64, y: f64) {
        self.last = Some((x, y));
    }

    /// Record a move and return the drag delta (previous minus current).
    ///
    /// A move with no recorded start only seeds the tracker.
    pub fn move_to(&mut self, x: f64, y: f64) -> Option<ScrollDelta> {
        let previous = self.last.replace((x, y));
        previous.map(|(px, py)| ScrollDelta::new(px - x, py - y))
    }

    pub fn end(&mut self) {
        self.last = None;
    }

    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
type Listener = Closure<dyn FnMut(Event)>;

/// DOM listeners feeding a shared table. Removed from the target on drop.
#[cfg(target_arch = "wasm32")]
pub(crate) struct InputListeners {
    target: HtmlElement,
    listeners: Vec<(&'static str, Listener)>,
}

#[cfg(target_arch = "wasm32")]
fn first_touch(event: &TouchEvent) -> Option<(f64, f64)> {
    let touch = event.touches().get(0)?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}

#[cfg(target_arch = "wasm32")]
impl InputListeners {
    /// Attach wheel and touch handlers to `target`.
    pub(crate) fn attach(target: &HtmlElement, table: &SharedTable) -> Result<Self> {
        let mut this = Self {
            target: target.clone(),
            listeners: Vec::new(),
        };
        let tracker = Rc::new(RefCell::new(TouchTracker::new()));

        // Wheel
        {
            let table = Rc::clone(table);
            this.listen(
                "wheel",
                Closure::wrap(Box::new(move |event: Event| {
                    let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                        return;
                    };
                    wheel.prevent_default();
                    let Ok(mut table) = table.try_borrow_mut() else {
                        return;
                    };
                    let delta = ScrollDelta::from_wheel(
                        wheel.delta_x(),
                        wheel.delta_y(),
                        wheel.delta_mode(),
                        table.layout().row_height(),
                        table.viewport(),
                    );
                    table.handle_scroll(delta.x, delta.y);
                }) as Box<dyn FnMut(Event)>),
            )?;
        }

        // Touch start
        {
            let tracker = Rc::clone(&tracker);
            this.listen(
                "touchstart",
                Closure::wrap(Box::new(move |event: Event| {
                    let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(first_touch) else {
                        return;
                    };
                    tracker.borrow_mut().start(touch.0, touch.1);
                }) as Box<dyn FnMut(Event)>),
            )?;
        }

        // Touch move
        {
            let tracker = Rc::clone(&tracker);
            let table = Rc::clone(table);
            this.listen(
                "touchmove",
                Closure::wrap(Box::new(move |event: Event| {
                    let Some((x, y)) = event.dyn_ref::<TouchEvent>().and_then(first_touch) else {
                        return;
                    };
                    event.prevent_default();
                    let Some(delta) = tracker.borrow_mut().move_to(x, y) else {
                        return;
                    };
                    if let Ok(mut table) = table.try_borrow_mut() {
                        table.handle_scroll(delta.x, delta.y);
                    }
                }) as Box<dyn FnMut(Event)>),
            )?;
        }

        // Touch end / cancel
        for name in ["touchend", "touchcancel"] {
            let tracker = Rc::clone(&tracker);
            this.listen(
                name,
                Closure::wrap(Box::new(move |_event: Event| {
                    tracker.borrow_mut().end();
                }) as Box<dyn FnMut(Event)>),
            )?;
        }

        Ok(this)
    }

    fn listen(&mut self, name: &'static str, closure: Listener) -> Result<()> {
        // Non-passive so preventDefault can stop the page from scrolling
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        self.target
            .add_event_listener_with_callback_and_add_event_listener_options(
                name,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|_| GridError::Surface(format!("Failed to add {name} listener")))?;
        self.listeners.push((name, closure));
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for InputListeners {
    fn drop(&mut self) {
        for (name, closure) in &self.listeners {
            let _ = self
                .target
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_mode_passes_through() {
        let d = ScrollDelta::from_wheel(3.0, -40.0, DOM_DELTA_PIXEL, 32.0, Viewport::new(800.0, 600.0));
        assert_eq!(d, ScrollDelta { x: 3.0, y: -40.0 });
    }

    #[test]
    fn test_line_mode_uses_row_height() {
        let d = ScrollDelta::from_wheel(0.0, 3.0, DOM_DELTA_LINE, 32.0, Viewport::new(800.0, 600.0));
        assert_eq!(d.y, 96.0);
        assert_eq!(d.x, 0.0);
    }

    #[test]
    fn test_page_mode_uses_viewport() {
        let d = ScrollDelta::from_wheel(1.0, -1.0, DOM_DELTA_PAGE, 32.0, Viewport::new(800.0, 600.0));
        assert_eq!(d, ScrollDelta { x: 800.0, y: -600.0 });
    }

    #[test]
    fn test_non_finite_deltas_are_zero() {
        let d = ScrollDelta::from_wheel(f64::NAN, f64::INFINITY, DOM_DELTA_PIXEL, 32.0, Viewport::new(1.0, 1.0));
        assert!(d.is_zero());
    }

    #[test]
    fn test_touch_drag_delta_is_previous_minus_current() {
        let mut tracker = TouchTracker::new();
        tracker.start(100.0, 300.0);
        let d = tracker.move_to(90.0, 250.0).unwrap();
        assert_eq!(d, ScrollDelta { x: 10.0, y: 50.0 });
        let d = tracker.move_to(95.0, 260.0).unwrap();
        assert_eq!(d, ScrollDelta { x: -5.0, y: -10.0 });
    }

    #[test]
    fn test_touch_move_without_start_only_seeds() {
        let mut tracker = TouchTracker::new();
        assert!(tracker.move_to(10.0, 10.0).is_none());
        assert!(tracker.is_active());
        assert!(tracker.move_to(10.0, 0.0).is_some());
    }

    #[test]
    fn test_touch_end_resets() {
        let mut tracker = TouchTracker::new();
        tracker.start(0.0, 0.0);
        tracker.end();
        assert!(!tracker.is_active());
        assert!(tracker.move_to(5.0, 5.0).is_none());
    }
}
