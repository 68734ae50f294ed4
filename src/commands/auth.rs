//! Auth Commands
//!
//! Frontend bindings for the session bootstrap: existing session,
//! sign-in with the configured pair, sign-up fallback, plus the
//! best-effort user upsert.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{OperatorCredentials, Session, User};
use super::{invoke, invoke_error};

#[derive(Serialize)]
struct CredentialArgs<'a> {
    email: &'a str,
    token: &'a str,
}

#[derive(Serialize)]
struct UpsertUserArgs<'a> {
    email: &'a str,
    timestamp: &'a str,
}

pub async fn current_session() -> Result<Option<Session>, String> {
    let result = invoke("current_session", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn operator_credentials() -> Result<OperatorCredentials, String> {
    let result = invoke("operator_credentials", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn sign_in(email: &str, token: &str) -> Result<Session, String> {
    let js_args = serde_wasm_bindgen::to_value(&CredentialArgs { email, token }).map_err(|e| e.to_string())?;
    let result = invoke("sign_in", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn sign_up(email: &str, token: &str) -> Result<Session, String> {
    let js_args = serde_wasm_bindgen::to_value(&CredentialArgs { email, token }).map_err(|e| e.to_string())?;
    let result = invoke("sign_up", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn upsert_user(email: &str, timestamp: &str) -> Result<User, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpsertUserArgs { email, timestamp }).map_err(|e| e.to_string())?;
    let result = invoke("upsert_user", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
