//! User entity - the identity record every account resolves to.
//!
//! Timestamps carry millisecond precision to match what the backends store.
//! `updated_at` is owned by [`User::before_update`], which the persistence
//! layer calls right before writing an update.

use crate::models::personalization_answers::PersonalizationAnswers;
use crate::dialect::dialect_resolver::TIMESTAMP_PRECISION;
use crate::{Result as CoreErrorResult, validate_entity};

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const MAX_EMAIL_LENGTH: u32 = 254;
pub const MAX_NAME_LENGTH: u32 = 32;

/// Built only by [`User::from_new`] or by the persistence layer reading a
/// row; there is no deserialization path that could drop the password.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    #[validate(
        email(message = "Email must be a valid email address."),
        length(max = 254, message = "Email must be at most 254 characters long.")
    )]
    pub email: String,
    #[validate(length(
        min = 1,
        max = 32,
        message = "First name must be 1 to 32 characters long."
    ))]
    pub first_name: String,
    #[validate(length(
        min = 1,
        max = 32,
        message = "Last name must be 1 to 32 characters long."
    ))]
    pub last_name: String,
    /// Precomputed credential hash
    #[serde(skip_serializing)]
    pub password: String,
    pub reset_password_token: Option<String>,
    pub personalization_answers: Option<PersonalizationAnswers>,
    #[validate(range(min = 1, message = "A global role is required."))]
    pub global_role_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a user from registration input, generating its id.
    ///
    /// Fails with a validation error before anything can be persisted.
    #[track_caller]
    pub fn from_new(new_user: NewUser) -> CoreErrorResult<Self> {
        validate_entity(&new_user)?;

        let now = Utc::now().trunc_subsecs(TIMESTAMP_PRECISION);
        Ok(Self {
            id: Uuid::new_v4(),
            email: new_user.email,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            password: new_user.password,
            reset_password_token: None,
            personalization_answers: new_user.personalization_answers,
            global_role_id: new_user.global_role_id,
            created_at: now,
            updated_at: now,
        })
    }

    #[track_caller]
    pub fn validate_fields(&self) -> CoreErrorResult<()> {
        validate_entity(self)
    }

    /// Update hook: stamp `updated_at` with the current wall-clock time.
    ///
    /// Unconditional. Whatever the caller put in `updated_at` is replaced.
    pub fn before_update(&mut self) {
        self.touch(Utc::now());
    }

    /// Stamp `updated_at` with `now`, truncated to the stored precision.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.trunc_subsecs(TIMESTAMP_PRECISION);
    }
}

/// Registration input. Carries no id or timestamps; those are never
/// client-settable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(
        email(message = "Email must be a valid email address."),
        length(max = 254, message = "Email must be at most 254 characters long.")
    )]
    pub email: String,
    #[validate(length(
        min = 1,
        max = 32,
        message = "First name must be 1 to 32 characters long."
    ))]
    pub first_name: String,
    #[validate(length(
        min = 1,
        max = 32,
        message = "Last name must be 1 to 32 characters long."
    ))]
    pub last_name: String,
    pub password: String,
    pub personalization_answers: Option<PersonalizationAnswers>,
    #[validate(range(min = 1, message = "A global role is required."))]
    pub global_role_id: i64,
}

impl NewUser {
    #[track_caller]
    pub fn validate_fields(&self) -> CoreErrorResult<()> {
        validate_entity(self)
    }
}
