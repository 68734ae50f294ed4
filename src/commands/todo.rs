//! Todo Commands
//!
//! Frontend bindings for ad-hoc todo backend commands.

use serde::Serialize;
use crate::models::TodoItem;
use super::{invoke, invoke_error};

#[derive(Serialize)]
struct OwnerArgs {
    owner: u32,
}

#[derive(Serialize)]
struct AddTodoArgs<'a> {
    owner: u32,
    content: &'a str,
    timestamp: &'a str,
}

#[derive(Serialize)]
struct SetCompletedArgs {
    id: u32,
    completed: bool,
}

pub async fn list_todos(owner: u32) -> Result<Vec<TodoItem>, String> {
    let js_args = serde_wasm_bindgen::to_value(&OwnerArgs { owner }).map_err(|e| e.to_string())?;
    let result = invoke("list_todos", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn add_todo(owner: u32, content: &str, timestamp: &str) -> Result<TodoItem, String> {
    let js_args = serde_wasm_bindgen::to_value(&AddTodoArgs { owner, content, timestamp })
        .map_err(|e| e.to_string())?;
    let result = invoke("add_todo", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn set_todo_completed(id: u32, completed: bool) -> Result<TodoItem, String> {
    let js_args = serde_wasm_bindgen::to_value(&SetCompletedArgs { id, completed })
        .map_err(|e| e.to_string())?;
    let result = invoke("set_todo_completed", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
