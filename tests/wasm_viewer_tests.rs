//! Browser smoke tests for `GridView`.
//!
//! Run with: wasm-pack test --headless --chrome
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use gridview::GridView;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlDivElement;

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlDivElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlDivElement>()
        .unwrap();
    let _ = div.style().set_property("width", "640px");
    let _ = div.style().set_property("height", "480px");
    document.body().unwrap().append_child(&div).unwrap();
    div
}

#[wasm_bindgen_test]
fn test_demo_mounts_canvas() {
    let div = container();
    let view = GridView::demo(div.clone()).unwrap();
    assert_eq!(view.scroll_top(), 0.0);
    assert_eq!(div.child_element_count(), 1);

    drop(view);
    assert_eq!(div.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_rejects_options_without_columns() {
    let div = container();
    let options = js_sys::JSON::parse(r#"{"dataSource": []}"#).unwrap();
    assert!(GridView::new(div, options).is_err());
}
