use tactics::dataset::{ensure_success, Dataset, LoadError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Fetches and parses the dataset. No retry and no timeout: any failure is
/// terminal for the page's dynamic behaviour.
pub(super) async fn load_dataset(url: &str) -> Result<Dataset, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".to_string()))?;

    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::Network(describe_js_error(&e)))?;
    let resp = resp
        .dyn_into::<web_sys::Response>()
        .map_err(|_| LoadError::Network("fetch: expected Response".to_string()))?;

    ensure_success(resp.status(), &resp.status_text())?;

    let text = resp
        .text()
        .map_err(|e| LoadError::Body(describe_js_error(&e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| LoadError::Body(describe_js_error(&e)))?
        .as_string()
        .ok_or_else(|| LoadError::Body("expected a text body".to_string()))?;

    Dataset::from_json_str(&body)
}

fn describe_js_error(v: &JsValue) -> String {
    if let Some(s) = v.as_string() {
        return s;
    }
    match v.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{v:?}"),
    }
}
