//! Page Bootstrap Loader
//!
//! The server template publishes the page's initial records either as the
//! `window.adminBootstrap` global or as a JSON `<script id="admin-bootstrap">`.

use view_sync::{BootstrapError, PageBootstrap};
use wasm_bindgen::JsValue;

const BOOTSTRAP_GLOBAL: &str = "adminBootstrap";
const BOOTSTRAP_ELEMENT: &str = "admin-bootstrap";

pub fn read_bootstrap() -> Result<PageBootstrap, BootstrapError> {
    let window = web_sys::window().ok_or(BootstrapError::Missing)?;

    let global = js_sys::Reflect::get(&window, &JsValue::from_str(BOOTSTRAP_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if !global.is_undefined() && !global.is_null() {
        return serde_wasm_bindgen::from_value(global)
            .map_err(|e| BootstrapError::Invalid(e.to_string()));
    }

    let text = window
        .document()
        .and_then(|document| document.get_element_by_id(BOOTSTRAP_ELEMENT))
        .and_then(|element| element.text_content())
        .ok_or(BootstrapError::Missing)?;
    PageBootstrap::from_json(&text)
}
