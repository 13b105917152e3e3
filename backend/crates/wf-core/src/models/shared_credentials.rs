use crate::dialect::dialect_resolver::TIMESTAMP_PRECISION;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grants a user a role on one set of credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedCredentials {
    pub user_id: Uuid,
    pub credentials_id: String,
    pub role_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SharedCredentials {
    pub fn new(user_id: Uuid, credentials_id: impl Into<String>, role_id: i64) -> Self {
        let now = Utc::now().trunc_subsecs(TIMESTAMP_PRECISION);
        Self {
            user_id,
            credentials_id: credentials_id.into(),
            role_id,
            created_at: now,
            updated_at: now,
        }
    }
}
