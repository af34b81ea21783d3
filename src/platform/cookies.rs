//! Document Cookies
//!
//! `document.cookie` as the backing jar for client preferences.

use view_sync::CookieJar;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCookies;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

impl CookieJar for DocumentCookies {
    fn cookie_string(&self) -> String {
        html_document()
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default()
    }

    fn store(&self, cookie: &str) {
        if let Some(document) = html_document() {
            if let Err(e) = document.set_cookie(cookie) {
                log::warn!("[PREFS] cookie rejected: {:?}", e);
            }
        }
    }
}
