//! User Repository
//!
//! Operations on the operator account table. Lookup is by email since
//! that is what the auth flow starts from.

use rusqlite::params;

use crate::domain::{DomainError, DomainResult, User};
use super::db::SharedConnection;

pub struct UserRepository {
    conn: SharedConnection,
}

impl UserRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Provision a new account with a credential digest
    pub async fn create(&self, email: &str, credential: &str, created_at: &str) -> DomainResult<User> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "INSERT INTO users (email, credential, created_at) VALUES (?, ?, ?)",
            params![email, credential, created_at],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        Ok(User {
            id,
            email: email.to_string(),
            credential: credential.to_string(),
            created_at: created_at.to_string(),
        })
    }

    /// Attach a credential digest to an existing account
    pub async fn set_credential(&self, id: u32, credential: &str) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let changed = conn
            .execute("UPDATE users SET credential = ? WHERE id = ?", params![credential, id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("user {}", id)));
        }
        Ok(())
    }

    /// Insert-or-keep by email; existing rows are left untouched
    pub async fn ensure(&self, email: &str, created_at: &str) -> DomainResult<User> {
        {
            let guard = self.conn.lock().await;
            let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

            conn.execute(
                "INSERT INTO users (email, credential, created_at) VALUES (?, '', ?) ON CONFLICT(email) DO NOTHING",
                params![email, created_at],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        }

        self.find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::Internal(format!("upsert of user {} produced no row", email)))
    }

    pub async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare("SELECT id, email, credential, created_at FROM users WHERE email = ?")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt.query(params![email])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next() {
            Ok(Some(User {
                id: row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?,
                email: row.get(1).map_err(|e| DomainError::Internal(e.to_string()))?,
                credential: row.get(2).unwrap_or_default(),
                created_at: row.get(3).unwrap_or_default(),
            }))
        } else {
            Ok(None)
        }
    }
}
