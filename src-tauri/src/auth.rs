//! Session Handling
//!
//! Resolves and holds the single operator session. The active session
//! is persisted to `session.json` in the app data directory so the
//! "existing session" branch of the bootstrap works across restarts.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

const SESSION_FILE: &str = "session.json";

/// Error text the frontend bootstrap keys on to decide sign-up
pub const INVALID_CREDENTIALS: &str = "invalid credentials";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: u32,
    pub email: String,
    pub signed_in_at: String,
}

/// Shared, persisted Option<Session>
#[derive(Clone)]
pub struct SessionState {
    inner: Arc<Mutex<Option<Session>>>,
    path: PathBuf,
}

impl SessionState {
    /// Load any persisted session from the app data directory
    pub fn load(app_dir: &Path) -> Self {
        let path = app_dir.join(SESSION_FILE);
        let session = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Self {
            inner: Arc::new(Mutex::new(session)),
            path,
        }
    }

    pub async fn current(&self) -> Option<Session> {
        self.inner.lock().await.clone()
    }

    /// Replace the session and persist it (best effort)
    pub async fn replace(&self, session: Option<Session>) {
        {
            let mut guard = self.inner.lock().await;
            *guard = session.clone();
        }
        let result = match &session {
            Some(s) => serde_json::to_string_pretty(s)
                .map_err(|e| e.to_string())
                .and_then(|raw| std::fs::write(&self.path, raw).map_err(|e| e.to_string())),
            None => match std::fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.to_string()),
            },
        };
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), "failed to persist session: {}", e);
        }
    }
}

/// Digest an operator token for storage and comparison
pub fn credential_digest(token: &str) -> String {
    blake3::hash(token.as_bytes()).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_stable_and_token_free() {
        let digest = credential_digest("secret-token");
        assert_eq!(digest, credential_digest("secret-token"));
        assert_ne!(digest, credential_digest("other-token"));
        assert!(!digest.contains("secret"));
    }

    #[tokio::test]
    async fn test_session_persists_across_loads() {
        let dir = std::env::temp_dir().join(format!("devboard-session-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();

        let state = SessionState::load(&dir);
        assert!(state.current().await.is_none());

        let session = Session {
            user_id: 1,
            email: "operator@devboard.local".to_string(),
            signed_in_at: "2026-08-06T12:00:00Z".to_string(),
        };
        state.replace(Some(session.clone())).await;

        let reloaded = SessionState::load(&dir);
        assert_eq!(reloaded.current().await, Some(session));

        state.replace(None).await;
        let cleared = SessionState::load(&dir);
        assert!(cleared.current().await.is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
