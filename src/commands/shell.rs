//! Shell Commands
//!
//! URL-type links open in the system browser via the backend.

use serde::Serialize;
use super::{invoke, invoke_error};

#[derive(Serialize)]
struct OpenArgs<'a> {
    url: &'a str,
}

pub async fn open_external(url: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&OpenArgs { url }).map_err(|e| e.to_string())?;
    invoke("open_external", js_args).await.map_err(invoke_error)?;
    Ok(())
}
