//! Persistence for [`User`] records.
//!
//! Every write validates the record and checks its global role first, so
//! the backend only ever sees rows that already satisfy the entity rules.
//! Email uniqueness is left to the backend's unique index and reported as
//! [`DbError::UniqueViolation`].

use crate::repositories::{format_timestamp, map_write_error, parse_timestamp, parse_uuid};
use crate::{
    DbError, Result as DbErrorResult, RoleRepository, SharedCredentialsRepository,
    SharedWorkflowRepository,
};

use wf_core::models::personalization_answers::{from_column_text, to_column_text};
use wf_core::{NewUser, RoleScope, SharedCredentials, SharedWorkflow, User};

use log::debug;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const ENTITY: &str = "User";

const SELECT_USER: &str = r#"
    SELECT "id", "email", "firstName", "lastName", "password", "resetPasswordToken",
           "personalizationAnswers", "globalRoleId", "createdAt", "updatedAt"
    FROM "user"
"#;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Validate and insert a new user.
    ///
    /// The id is generated here; `createdAt` and `updatedAt` are filled by
    /// the column defaults in the same statement, so they are equal.
    pub async fn create(&self, new_user: NewUser) -> DbErrorResult<User> {
        let mut user = User::from_new(new_user)?;
        RoleRepository::require_scope(&self.pool, user.global_role_id, RoleScope::Global).await?;

        let answers = user
            .personalization_answers
            .as_ref()
            .map(to_column_text)
            .transpose()?;

        let row = sqlx::query(
            r#"
              INSERT INTO "user" (
                  "id", "email", "firstName", "lastName", "password",
                  "resetPasswordToken", "personalizationAnswers", "globalRoleId"
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              RETURNING "createdAt", "updatedAt"
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password)
        .bind(&user.reset_password_token)
        .bind(answers)
        .bind(user.global_role_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, ENTITY, "email"))?;

        let created_at: String = row.try_get("createdAt")?;
        let updated_at: String = row.try_get("updatedAt")?;
        user.created_at = parse_timestamp("user.createdAt", &created_at)?;
        user.updated_at = parse_timestamp("user.updatedAt", &updated_at)?;

        debug!("Created user {}", user.id);
        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!(r#"{SELECT_USER} WHERE "id" = ?"#))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!(r#"{SELECT_USER} WHERE "email" = ?"#))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    pub async fn list(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query(&format!(r#"{SELECT_USER} ORDER BY "createdAt" ASC, "email" ASC"#))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_user).collect()
    }

    /// Persist changes to an existing user.
    ///
    /// Runs the update hook first, so `user.updated_at` is overwritten with
    /// the current time whatever the caller set. `id` and `createdAt` are
    /// never written.
    pub async fn update(&self, user: &mut User) -> DbErrorResult<()> {
        user.before_update();
        user.validate_fields()?;
        RoleRepository::require_scope(&self.pool, user.global_role_id, RoleScope::Global).await?;

        let answers = user
            .personalization_answers
            .as_ref()
            .map(to_column_text)
            .transpose()?;

        let result = sqlx::query(
            r#"
              UPDATE "user"
              SET "email" = ?, "firstName" = ?, "lastName" = ?, "password" = ?,
                  "resetPasswordToken" = ?, "personalizationAnswers" = ?,
                  "globalRoleId" = ?, "updatedAt" = ?
              WHERE "id" = ?
              "#,
        )
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password)
        .bind(&user.reset_password_token)
        .bind(answers)
        .bind(user.global_role_id)
        .bind(format_timestamp(&user.updated_at))
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, ENTITY, "email"))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, user.id));
        }

        Ok(())
    }

    /// Remove a user together with every share record that points at it.
    ///
    /// Returns `false` when no such user exists.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let id_str = id.to_string();
        let mut tx = self.pool.begin().await?;

        sqlx::query(r#"DELETE FROM "shared_workflow" WHERE "userId" = ?"#)
            .bind(&id_str)
            .execute(&mut *tx)
            .await?;

        sqlx::query(r#"DELETE FROM "shared_credentials" WHERE "userId" = ?"#)
            .bind(&id_str)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query(r#"DELETE FROM "user" WHERE "id" = ?"#)
            .bind(&id_str)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn shared_workflows(&self, id: Uuid) -> DbErrorResult<Vec<SharedWorkflow>> {
        SharedWorkflowRepository::new(self.pool.clone())
            .find_by_user(id)
            .await
    }

    pub async fn shared_credentials(&self, id: Uuid) -> DbErrorResult<Vec<SharedCredentials>> {
        SharedCredentialsRepository::new(self.pool.clone())
            .find_by_user(id)
            .await
    }
}

fn row_to_user(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let answers: Option<String> = row.try_get("personalizationAnswers")?;
    let created_at: String = row.try_get("createdAt")?;
    let updated_at: String = row.try_get("updatedAt")?;

    Ok(User {
        id: parse_uuid("user.id", &id)?,
        email: row.try_get("email")?,
        first_name: row.try_get("firstName")?,
        last_name: row.try_get("lastName")?,
        password: row.try_get("password")?,
        reset_password_token: row.try_get("resetPasswordToken")?,
        personalization_answers: answers.as_deref().map(from_column_text).transpose()?,
        global_role_id: row.try_get("globalRoleId")?,
        created_at: parse_timestamp("user.createdAt", &created_at)?,
        updated_at: parse_timestamp("user.updatedAt", &updated_at)?,
    })
}
