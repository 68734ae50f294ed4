//! Quick Link Entity
//!
//! User-scoped bookmark shown in the Quick Access strip, independent
//! of any project. Owner is nullable: rows created before the first
//! sign-up are adopted during session bootstrap.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickLink {
    pub id: u32,
    pub owner: Option<u32>,
    pub title: String,
    pub url: String,
    /// Icon tag rendered by the UI ("github", "book", ...)
    pub icon: String,
    pub color: String,
    pub timestamp: Option<String>,
}

impl Entity for QuickLink {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
