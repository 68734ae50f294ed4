//! Todo Entity
//!
//! User-scoped ad-hoc to-do item, independent of any project.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u32,
    pub owner: u32,
    pub content: String,
    pub completed: bool,
    /// ISO-8601, assigned by the client at write time
    pub timestamp: String,
}

impl Entity for TodoItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
