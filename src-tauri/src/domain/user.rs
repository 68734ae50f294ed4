//! User Entity
//!
//! The single operator account all per-user rows are scoped by.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    /// blake3 hex digest of the operator token; never the token itself
    #[serde(skip_serializing)]
    #[serde(default)]
    pub credential: String,
    pub created_at: String,
}

impl Entity for User {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
