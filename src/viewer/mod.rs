//! `GridView` - the WASM-exported entry point.
//!
//! Creates a canvas inside the host container, builds a `VirtualTable` over
//! it and wires wheel and touch input. Listeners and the canvas are removed
//! when the view is freed from JavaScript.

mod events;

pub use events::{ScrollDelta, TouchTracker, DOM_DELTA_LINE, DOM_DELTA_PAGE, DOM_DELTA_PIXEL};

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use tracing::debug;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlCanvasElement, HtmlDivElement};

#[cfg(target_arch = "wasm32")]
use crate::demo::{demo_columns, demo_data_source, DEMO_COLUMNS, DEMO_ROWS};
#[cfg(target_arch = "wasm32")]
use crate::engine::VirtualTable;
#[cfg(target_arch = "wasm32")]
use crate::error::{GridError, Result};
#[cfg(target_arch = "wasm32")]
use crate::render::CanvasSurface;
#[cfg(target_arch = "wasm32")]
use crate::types::{GridConfig, TableOptions};
#[cfg(target_arch = "wasm32")]
use events::InputListeners;

#[cfg(target_arch = "wasm32")]
pub(crate) type SharedTable = Rc<RefCell<VirtualTable<CanvasSurface>>>;

/// Table view mounted in a host `<div>`
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct GridView {
    table: SharedTable,
    canvas: HtmlCanvasElement,
    listeners: Option<InputListeners>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Mount a table in `container`.
    ///
    /// `options` is `{ columns, dataSource, config? }`. The canvas takes the
    /// container's current size; the table never resizes afterwards.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlDivElement, options: JsValue) -> std::result::Result<GridView, JsValue> {
        console_error_panic_hook::set_once();
        let options: TableOptions = serde_wasm_bindgen::from_value(options)
            .map_err(|e| GridError::Options(e.to_string()))?;
        Ok(Self::mount(&container, options)?)
    }

    /// Mount the 20 x 2000 employee roster with the first column frozen.
    pub fn demo(container: HtmlDivElement) -> std::result::Result<GridView, JsValue> {
        console_error_panic_hook::set_once();
        let options = TableOptions {
            columns: demo_columns(DEMO_COLUMNS),
            data_source: demo_data_source(DEMO_ROWS),
            config: GridConfig::default(),
        };
        Ok(Self::mount(&container, options)?)
    }

    #[wasm_bindgen(getter, js_name = scrollTop)]
    pub fn scroll_top(&self) -> f64 {
        self.table.borrow().scroll().scroll_top()
    }

    #[wasm_bindgen(getter, js_name = scrollLeft)]
    pub fn scroll_left(&self) -> f64 {
        self.table.borrow().scroll().scroll_left()
    }

    /// State of the latest render pass (scroll, ranges, quadrant contents)
    pub fn snapshot(&self) -> std::result::Result<JsValue, JsValue> {
        let snapshot = self.table.borrow().snapshot();
        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl GridView {
    fn mount(container: &HtmlDivElement, options: TableOptions) -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| GridError::Surface("No window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GridError::Surface("No document".into()))?;
        let canvas = document
            .create_element("canvas")
            .map_err(|_| GridError::Surface("Failed to create canvas".into()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| GridError::Surface("Failed to cast to HtmlCanvasElement".into()))?;

        let rect = container.get_bounding_client_rect();
        let dpr = window.device_pixel_ratio();
        let surface = CanvasSurface::new(&canvas, rect.width(), rect.height(), dpr)?;
        let table = VirtualTable::new(
            surface,
            options.columns,
            options.data_source,
            options.config,
        )?;
        container
            .append_child(&canvas)
            .map_err(|_| GridError::Surface("Failed to attach canvas".into()))?;

        let table = Rc::new(RefCell::new(table));
        let listeners = InputListeners::attach(container, &table)?;
        debug!(
            width = rect.width(),
            height = rect.height(),
            dpr,
            "grid view mounted"
        );

        Ok(Self {
            table,
            canvas,
            listeners: Some(listeners),
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for GridView {
    fn drop(&mut self) {
        self.listeners = None;
        self.canvas.remove();
    }
}
