//! Clipboard Access
//!
//! File-type links copy their path to the system clipboard through the
//! webview clipboard API.

use wasm_bindgen_futures::JsFuture;

pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("clipboard write failed: {:?}", e))
}
