//! Change Subscriptions
//!
//! One channel per collection over the Tauri event bus. The backend
//! emits `store://<table>` after every mutation; any matching event
//! triggers a full re-fetch of the owning collection. `auth://state`
//! carries session changes from the auth collaborator.
//!
//! Dropping a [`Subscription`] unlistens, so teardown on identity
//! change or unmount is just dropping the guards.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Session;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], catch)]
    async fn listen(event: &str, handler: &JsValue) -> Result<JsValue, JsValue>;
}

/// Row-level change notification (matches backend payload)
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeEvent {
    pub table: String,
    /// "insert" | "update" | "delete"
    pub kind: String,
    pub id: u32,
    /// Present only for tables with an owner column
    #[serde(default)]
    pub owner: Option<u32>,
}

/// An open event channel; dropping it unlistens
pub struct Subscription {
    unlisten: js_sys::Function,
    // Kept alive for as long as the channel is open
    _handler: Closure<dyn FnMut(JsValue)>,
}

impl Subscription {
    async fn open<T, F>(event: &str, on_event: F) -> Result<Subscription, String>
    where
        T: DeserializeOwned + 'static,
        F: Fn(T) + 'static,
    {
        let name = event.to_string();
        let handler = Closure::<dyn FnMut(JsValue)>::new(move |raw: JsValue| {
            let payload = js_sys::Reflect::get(&raw, &JsValue::from_str("payload"))
                .unwrap_or(JsValue::NULL);
            match serde_wasm_bindgen::from_value::<T>(payload) {
                Ok(value) => on_event(value),
                Err(e) => web_sys::console::warn_1(
                    &format!("[{}] undecodable event payload: {}", name, e).into(),
                ),
            }
        });

        let unlisten = listen(event, handler.as_ref())
            .await
            .map_err(|e| format!("failed to subscribe to {}: {:?}", event, e))?;
        let unlisten: js_sys::Function = unlisten
            .dyn_into()
            .map_err(|_| format!("subscribe to {} returned no unlisten handle", event))?;

        Ok(Subscription { unlisten, _handler: handler })
    }

    /// Subscribe to row-level change events for one table
    pub async fn changes(table: &str, on_change: impl Fn(ChangeEvent) + 'static) -> Result<Subscription, String> {
        Self::open(&format!("store://{}", table), on_change).await
    }

    /// Subscribe to auth collaborator state changes
    pub async fn auth_state(on_change: impl Fn(Option<Session>) + 'static) -> Result<Subscription, String> {
        Self::open("auth://state", on_change).await
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self.unlisten.call0(&JsValue::NULL);
    }
}
