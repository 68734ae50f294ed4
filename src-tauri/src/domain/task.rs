//! Task Entity
//!
//! A checklist entry belonging to exactly one project.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub project_id: u32,
    pub content: String,
    pub completed: bool,
    /// ISO-8601, assigned by the client at write time
    pub timestamp: String,
    pub due_date: Option<String>,
}

impl Entity for Task {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
