//! Task Commands
//!
//! Frontend bindings for project task backend commands.

use serde::Serialize;
use crate::models::Task;
use super::{invoke, invoke_error};

#[derive(Serialize)]
struct AddTaskArgs<'a> {
    #[serde(rename = "projectId")]
    project_id: u32,
    content: &'a str,
    timestamp: &'a str,
}

#[derive(Serialize)]
struct SetCompletedArgs {
    id: u32,
    completed: bool,
}

pub async fn add_task(project_id: u32, content: &str, timestamp: &str) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(&AddTaskArgs { project_id, content, timestamp })
        .map_err(|e| e.to_string())?;
    let result = invoke("add_task", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn set_task_completed(id: u32, completed: bool) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(&SetCompletedArgs { id, completed })
        .map_err(|e| e.to_string())?;
    let result = invoke("set_task_completed", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
