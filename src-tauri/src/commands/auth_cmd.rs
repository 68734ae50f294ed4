//! Auth Commands
//!
//! Session resolution for the single-operator bootstrap: existing
//! session, sign-in with the configured pair, sign-up as fallback.
//! Auth state changes are broadcast on `auth://state`.

use tauri::{AppHandle, Emitter, State};

use crate::auth::{credential_digest, Session, INVALID_CREDENTIALS};
use crate::config::OperatorConfig;
use crate::domain::{DomainError, User};
use crate::AppState;

fn emit_auth_state(app: &AppHandle, session: Option<&Session>) {
    if let Err(e) = app.emit("auth://state", session) {
        tracing::warn!("failed to emit auth state: {}", e);
    }
}

/// Session currently held by the backend, if any
#[tauri::command]
pub async fn current_session(state: State<'_, AppState>) -> Result<Option<Session>, String> {
    Ok(state.session.current().await)
}

/// The configured operator credential pair the bootstrap signs in with
#[tauri::command]
pub async fn operator_credentials(state: State<'_, AppState>) -> Result<OperatorConfig, String> {
    Ok(state.config.clone())
}

/// Sign in with an email/token pair
#[tauri::command]
pub async fn sign_in(
    app: AppHandle,
    state: State<'_, AppState>,
    email: String,
    token: String,
) -> Result<Session, String> {
    let user = state.users.find_by_email(&email).await.map_err(|e| e.to_string())?;

    let user = match user {
        Some(u) if !u.credential.is_empty() && u.credential == credential_digest(&token) => u,
        _ => {
            tracing::info!(email = %email, "sign-in rejected");
            return Err(INVALID_CREDENTIALS.to_string());
        }
    };

    let session = Session {
        user_id: user.id,
        email: user.email,
        signed_in_at: chrono::Utc::now().to_rfc3339(),
    };
    state.session.replace(Some(session.clone())).await;
    emit_auth_state(&app, Some(&session));

    tracing::info!(user_id = session.user_id, "signed in");
    Ok(session)
}

/// Provision the operator account and sign it in.
/// Adopts a credential-less row left behind by an earlier upsert.
#[tauri::command]
pub async fn sign_up(
    app: AppHandle,
    state: State<'_, AppState>,
    email: String,
    token: String,
) -> Result<Session, String> {
    let digest = credential_digest(&token);
    let now = chrono::Utc::now().to_rfc3339();

    let existing = state.users.find_by_email(&email).await.map_err(|e| e.to_string())?;
    let user = match existing {
        Some(u) if u.credential.is_empty() => {
            state.users.set_credential(u.id, &digest).await.map_err(|e| e.to_string())?;
            u
        }
        Some(u) => {
            return Err(DomainError::Conflict(format!("user {} already exists", u.email)).to_string());
        }
        None => state
            .users
            .create(&email, &digest, &now)
            .await
            .map_err(|e| e.to_string())?,
    };

    let session = Session {
        user_id: user.id,
        email: user.email,
        signed_in_at: now,
    };
    state.session.replace(Some(session.clone())).await;
    emit_auth_state(&app, Some(&session));

    tracing::info!(user_id = session.user_id, "signed up");
    Ok(session)
}

/// Clear the active session
#[tauri::command]
pub async fn sign_out(app: AppHandle, state: State<'_, AppState>) -> Result<(), String> {
    state.session.replace(None).await;
    emit_auth_state(&app, None);
    Ok(())
}

/// Best-effort ensure a user row exists for the signed-in identity
#[tauri::command]
pub async fn upsert_user(
    state: State<'_, AppState>,
    email: String,
    timestamp: String,
) -> Result<User, String> {
    state.users.ensure(&email, &timestamp).await.map_err(|e| e.to_string())
}
