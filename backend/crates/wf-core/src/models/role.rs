//! Role entity - referenced by users and share records, owned elsewhere.

use crate::RoleScope;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Backend-generated sequence value
    pub id: i64,
    pub name: String,
    pub scope: RoleScope,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Role {
    pub fn is_global(&self) -> bool {
        self.scope == RoleScope::Global
    }
}
