//! Fetch Transport
//!
//! Sends dispatcher requests with `window.fetch`. POST bodies are
//! form-encoded; replies are parsed as JSON, falling back to the raw text.

use async_trait::async_trait;
use serde_json::Value;
use view_sync::{DispatchError, HttpRequest, Method, Transport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, UrlSearchParams};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn js_error(err: JsValue) -> DispatchError {
    DispatchError::Transport(format!("{:?}", err))
}

/// Reply body as JSON; plain-text bodies become a JSON string
pub fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn execute(&self, request: HttpRequest) -> Result<Value, DispatchError> {
        let window = web_sys::window().ok_or_else(|| DispatchError::Transport("no window".into()))?;

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if request.method == Method::Post {
            let params = UrlSearchParams::new().map_err(js_error)?;
            for (key, value) in &request.form {
                params.append(key, value);
            }
            init.set_body(&JsValue::from(params));
        }

        let req = Request::new_with_str_and_init(&request.url, &init).map_err(js_error)?;
        req.headers().set("X-Requested-With", "XMLHttpRequest").map_err(js_error)?;

        let reply = JsFuture::from(window.fetch_with_request(&req)).await.map_err(js_error)?;
        let response: Response = reply.dyn_into().map_err(js_error)?;
        if !response.ok() {
            return Err(DispatchError::Status(response.status()));
        }

        let text = JsFuture::from(response.text().map_err(js_error)?).await.map_err(js_error)?;
        Ok(parse_body(&text.as_string().unwrap_or_default()))
    }
}
