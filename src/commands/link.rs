//! Link Commands
//!
//! Frontend bindings for project link backend commands.

use serde::Serialize;
use crate::models::Link;
use super::{invoke, invoke_error};

#[derive(Serialize)]
pub struct AddLinkArgs<'a> {
    #[serde(rename = "projectId")]
    pub project_id: u32,
    pub kind: &'a str,
    pub path: &'a str,
    pub timestamp: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

pub async fn add_link(args: &AddLinkArgs<'_>) -> Result<Link, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("add_link", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_link(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_link", js_args).await.map_err(invoke_error)?;
    Ok(())
}
