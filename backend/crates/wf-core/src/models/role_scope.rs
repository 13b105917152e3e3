use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// What a role grants access to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleScope {
    /// Instance-wide role assigned to every user
    Global,
    /// Role on a shared workflow
    Workflow,
    /// Role on shared credentials
    Credential,
}

impl RoleScope {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Workflow => "workflow",
            Self::Credential => "credential",
        }
    }
}

impl FromStr for RoleScope {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "global" => Ok(Self::Global),
            "workflow" => Ok(Self::Workflow),
            "credential" => Ok(Self::Credential),
            _ => Err(CoreError::InvalidRoleScope {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for RoleScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
