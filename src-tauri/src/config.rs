//! Operator Configuration
//!
//! The single-operator credential pair lives in `operator.json` inside
//! the app data directory, never in source. On first run the file is
//! created with a freshly issued token; the operator may edit it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "operator.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorConfig {
    pub email: String,
    pub token: String,
}

impl OperatorConfig {
    /// Load the config file, creating it with a generated token if absent
    pub fn load_or_create(app_dir: &Path) -> Result<Self, String> {
        let path = Self::path(app_dir);

        if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            return serde_json::from_str(&raw)
                .map_err(|e| format!("Failed to parse {}: {}", path.display(), e));
        }

        let config = Self {
            email: "operator@devboard.local".to_string(),
            token: uuid::Uuid::new_v4().to_string(),
        };

        let raw = serde_json::to_string_pretty(&config)
            .map_err(|e| format!("Failed to serialize operator config: {}", e))?;
        std::fs::write(&path, raw)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

        tracing::info!(path = %path.display(), "created operator config with a fresh token");
        Ok(config)
    }

    fn path(app_dir: &Path) -> PathBuf {
        app_dir.join(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_reload() {
        let dir = std::env::temp_dir().join(format!("devboard-config-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();

        let created = OperatorConfig::load_or_create(&dir).unwrap();
        assert!(!created.token.is_empty());

        let reloaded = OperatorConfig::load_or_create(&dir).unwrap();
        assert_eq!(created.email, reloaded.email);
        assert_eq!(created.token, reloaded.token);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
