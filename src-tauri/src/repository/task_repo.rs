//! Task Repository
//!
//! SQLite-backed operations for project tasks.

use rusqlite::{params, Connection};

use crate::domain::{DomainError, DomainResult, Task};
use super::db::SharedConnection;

pub struct TaskRepository {
    conn: SharedConnection,
}

impl TaskRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Insert a task; the ID is assigned by the database
    pub async fn create(&self, task: &Task) -> DomainResult<Task> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "INSERT INTO tasks (project_id, content, completed, timestamp, due_date) VALUES (?, ?, ?, ?, ?)",
            params![
                task.project_id,
                task.content,
                if task.completed { 1 } else { 0 },
                task.timestamp,
                task.due_date
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        Ok(Task { id, ..task.clone() })
    }

    /// Set the completion flag, returning the updated row
    pub async fn set_completed(&self, id: u32, completed: bool) -> DomainResult<Task> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let changed = conn
            .execute(
                "UPDATE tasks SET completed = ? WHERE id = ?",
                params![if completed { 1 } else { 0 }, id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("task {}", id)));
        }

        let mut stmt = conn
            .prepare("SELECT id, project_id, content, completed, timestamp, due_date FROM tasks WHERE id = ?")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt.query(params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next() {
            row_to_task(row)
        } else {
            Err(DomainError::NotFound(format!("task {}", id)))
        }
    }

    pub async fn list_by_project(&self, project_id: u32) -> DomainResult<Vec<Task>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;
        tasks_for(conn, project_id)
    }
}

/// Tasks for one project, newest first
pub(super) fn tasks_for(conn: &Connection, project_id: u32) -> DomainResult<Vec<Task>> {
    let mut stmt = conn
        .prepare("SELECT id, project_id, content, completed, timestamp, due_date FROM tasks WHERE project_id = ? ORDER BY timestamp DESC, id DESC")
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    let mut rows = stmt.query(params![project_id])
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    let mut tasks = Vec::new();
    while let Ok(Some(row)) = rows.next() {
        tasks.push(row_to_task(row)?);
    }
    Ok(tasks)
}

/// Convert a database row to Task
pub(super) fn row_to_task(row: &rusqlite::Row) -> DomainResult<Task> {
    Ok(Task {
        id: row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?,
        project_id: row.get(1).map_err(|e| DomainError::Internal(e.to_string()))?,
        content: row.get(2).map_err(|e| DomainError::Internal(e.to_string()))?,
        completed: row.get::<_, i32>(3).unwrap_or(0) != 0,
        timestamp: row.get(4).map_err(|e| DomainError::Internal(e.to_string()))?,
        due_date: row.get::<_, Option<String>>(5).ok().flatten(),
    })
}
