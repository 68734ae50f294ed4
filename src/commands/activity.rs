//! Activity Log Commands
//!
//! Frontend bindings for appending project history entries.

use serde::Serialize;
use crate::models::ActivityLog;
use super::{invoke, invoke_error};

#[derive(Serialize)]
struct AddActivityLogArgs<'a> {
    #[serde(rename = "projectId")]
    project_id: u32,
    kind: &'a str,
    description: &'a str,
    timestamp: &'a str,
}

pub async fn add_activity_log(
    project_id: u32,
    kind: &str,
    description: &str,
    timestamp: &str,
) -> Result<ActivityLog, String> {
    let js_args = serde_wasm_bindgen::to_value(&AddActivityLogArgs { project_id, kind, description, timestamp })
        .map_err(|e| e.to_string())?;
    let result = invoke("add_activity_log", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
