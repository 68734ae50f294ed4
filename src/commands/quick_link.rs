//! Quick Link Commands
//!
//! Frontend bindings for quick access bookmark backend commands.

use serde::Serialize;
use crate::models::QuickLink;
use super::{invoke, invoke_error};

#[derive(Serialize)]
pub struct AddQuickLinkArgs<'a> {
    pub owner: u32,
    pub title: &'a str,
    pub url: &'a str,
    pub icon: &'a str,
    pub color: &'a str,
    pub timestamp: &'a str,
}

#[derive(Serialize)]
struct OwnerArgs {
    owner: u32,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct UpdateQuickLinkArgs<'a> {
    id: u32,
    title: &'a str,
    url: &'a str,
}

pub async fn list_quick_links(owner: u32) -> Result<Vec<QuickLink>, String> {
    let js_args = serde_wasm_bindgen::to_value(&OwnerArgs { owner }).map_err(|e| e.to_string())?;
    let result = invoke("list_quick_links", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn add_quick_link(args: &AddQuickLinkArgs<'_>) -> Result<QuickLink, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("add_quick_link", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_quick_link(id: u32, title: &str, url: &str) -> Result<QuickLink, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateQuickLinkArgs { id, title, url })
        .map_err(|e| e.to_string())?;
    let result = invoke("update_quick_link", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_quick_link(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_quick_link", js_args).await.map_err(invoke_error)?;
    Ok(())
}

/// Bootstrap step: adopt ownerless rows, returns how many changed
pub async fn claim_quick_links(owner: u32) -> Result<usize, String> {
    let js_args = serde_wasm_bindgen::to_value(&OwnerArgs { owner }).map_err(|e| e.to_string())?;
    let result = invoke("claim_quick_links", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
