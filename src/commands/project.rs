//! Project Commands
//!
//! Frontend bindings for project-related backend commands.

use serde::Serialize;
use crate::models::Project;
use super::{invoke, invoke_error};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateProjectArgs<'a> {
    pub owner: u32,
    pub name: &'a str,
    pub description: &'a str,
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
struct UpdateProjectArgs<'a> {
    id: u32,
    name: &'a str,
    description: &'a str,
    timestamp: &'a str,
}

#[derive(Serialize)]
struct SetProgressArgs<'a> {
    id: u32,
    progress: i64,
    timestamp: &'a str,
}

// ========================
// Commands
// ========================

pub async fn list_projects(owner: u32) -> Result<Vec<Project>, String> {
    let js_args = serde_wasm_bindgen::to_value(&OwnerArgs { owner }).map_err(|e| e.to_string())?;
    let result = invoke("list_projects", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_project(args: &CreateProjectArgs<'_>) -> Result<Project, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_project", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_project(id: u32, name: &str, description: &str, timestamp: &str) -> Result<Project, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateProjectArgs { id, name, description, timestamp })
        .map_err(|e| e.to_string())?;
    let result = invoke("update_project", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn set_project_progress(id: u32, progress: i64, timestamp: &str) -> Result<Project, String> {
    let js_args = serde_wasm_bindgen::to_value(&SetProgressArgs { id, progress, timestamp })
        .map_err(|e| e.to_string())?;
    let result = invoke("set_project_progress", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_project(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_project", js_args).await.map_err(invoke_error)?;
    Ok(())
}
