//! Shell Commands
//!
//! URL-type links open in the system browser rather than inside the
//! webview.

/// Open a URL in the default browser
#[tauri::command]
pub async fn open_external(url: String) -> Result<(), String> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(format!("refusing to open non-http URL: {}", url));
    }
    open::that(&url).map_err(|e| e.to_string())
}
