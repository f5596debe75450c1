//! WASM bindings for taskgraph-layout.
//!
//! Exposes `layoutJson` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::request::LayoutRequest;

/// Lay out a JSON request and return the layout as JSON.
///
/// The request shape is `{"tasks": [...], "edges": [["A", "B"], ...]}` plus
/// the optional fields of [`LayoutRequest`].
#[wasm_bindgen(js_name = "layoutJson")]
pub fn layout_json(request: &str) -> Result<String, JsError> {
    let layout = LayoutRequest::from_json(request)
        .and_then(|r| r.run())
        .map_err(|e| JsError::new(&e.to_string()))?;
    serde_json::to_string(&layout).map_err(|e| JsError::new(&e.to_string()))
}
