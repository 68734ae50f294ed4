//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.
//! Command failures reject the invoke promise; the `catch` binding
//! turns them back into the backend's error string.

mod auth;
mod project;
mod link;
mod task;
mod activity;
mod quick_link;
mod todo;
mod shell;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Backend errors arrive as plain strings; surface them verbatim
fn invoke_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use auth::*;
pub use project::*;
pub use link::*;
pub use task::*;
pub use activity::*;
pub use quick_link::*;
pub use todo::*;
pub use shell::*;
