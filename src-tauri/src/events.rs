//! Change Event Broadcasting
//!
//! Every successful mutation emits a row-level change event on the
//! Tauri event bus, one event name per table (`store://projects`, ...).
//! The frontend keeps one subscription per collection and re-fetches on
//! any matching event.

use serde::Serialize;
use tauri::{AppHandle, Emitter};

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// Payload delivered with every change event
#[derive(Debug, Clone, Serialize)]
pub struct ChangeEvent<'a> {
    pub table: &'a str,
    pub kind: ChangeKind,
    pub id: u32,
    /// Present only for tables with an owner column; child tables are
    /// filtered implicitly by the owner-scoped re-fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<u32>,
}

/// Emit a change event; failures are logged and never surfaced
pub fn emit_change(app: &AppHandle, table: &str, kind: ChangeKind, id: u32, owner: Option<u32>) {
    let event = format!("store://{}", table);
    if let Err(e) = app.emit(&event, ChangeEvent { table, kind, id, owner }) {
        tracing::warn!(event = %event, "failed to emit change event: {}", e);
    }
}
