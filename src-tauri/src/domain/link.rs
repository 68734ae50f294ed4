//! Link Entity
//!
//! A reference attached to a project: a local directory path, a URL,
//! or an LLM conversation reference.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Link kind determines what opening the link does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Local directory path, copied to the clipboard
    File,
    /// Opened in the system browser
    #[default]
    Url,
    /// Reference to an LLM conversation
    Llm,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::File => "file",
            LinkKind::Url => "url",
            LinkKind::Llm => "llm",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "file" => LinkKind::File,
            "llm" => LinkKind::Llm,
            _ => LinkKind::Url,
        }
    }
}

/// A link belonging to exactly one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: u32,
    pub project_id: u32,
    pub kind: LinkKind,
    pub path: String,
    /// ISO-8601, assigned by the client at write time
    pub timestamp: String,
}

impl Entity for Link {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        assert_eq!(LinkKind::File.as_str(), "file");
        assert_eq!(LinkKind::from_str("llm"), LinkKind::Llm);
        assert_eq!(LinkKind::from_str("unknown"), LinkKind::Url);
    }
}
