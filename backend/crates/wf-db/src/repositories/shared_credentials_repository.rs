use crate::repositories::shared_workflow_repository::ensure_user_exists;
use crate::repositories::{map_write_error, parse_timestamp, parse_uuid};
use crate::{Result as DbErrorResult, RoleRepository};

use wf_core::{RoleScope, SharedCredentials};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const ENTITY: &str = "SharedCredentials";

pub struct SharedCredentialsRepository {
    pool: SqlitePool,
}

impl SharedCredentialsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Grant `share.user_id` the credential-scoped `share.role_id` on a
    /// credentials record.
    pub async fn create(&self, share: &SharedCredentials) -> DbErrorResult<SharedCredentials> {
        RoleRepository::require_scope(&self.pool, share.role_id, RoleScope::Credential).await?;
        ensure_user_exists(&self.pool, share.user_id).await?;

        let row = sqlx::query(
            r#"
              INSERT INTO "shared_credentials" ("credentialsId", "roleId", "userId")
              VALUES (?, ?, ?)
              RETURNING "credentialsId", "roleId", "userId", "createdAt", "updatedAt"
              "#,
        )
        .bind(&share.credentials_id)
        .bind(share.role_id)
        .bind(share.user_id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, ENTITY, "user and credentials"))?;

        row_to_share(&row)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Vec<SharedCredentials>> {
        let rows = sqlx::query(
            r#"
              SELECT "credentialsId", "roleId", "userId", "createdAt", "updatedAt"
              FROM "shared_credentials"
              WHERE "userId" = ?
              ORDER BY "credentialsId" ASC
              "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_share).collect()
    }

    pub async fn find_by_credentials(
        &self,
        credentials_id: &str,
    ) -> DbErrorResult<Vec<SharedCredentials>> {
        let rows = sqlx::query(
            r#"
              SELECT "credentialsId", "roleId", "userId", "createdAt", "updatedAt"
              FROM "shared_credentials"
              WHERE "credentialsId" = ?
              ORDER BY "createdAt" ASC
              "#,
        )
        .bind(credentials_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_share).collect()
    }

    pub async fn delete(&self, user_id: Uuid, credentials_id: &str) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"DELETE FROM "shared_credentials" WHERE "userId" = ? AND "credentialsId" = ?"#,
        )
        .bind(user_id.to_string())
        .bind(credentials_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_share(row: &SqliteRow) -> DbErrorResult<SharedCredentials> {
    let user_id: String = row.try_get("userId")?;
    let created_at: String = row.try_get("createdAt")?;
    let updated_at: String = row.try_get("updatedAt")?;

    Ok(SharedCredentials {
        user_id: parse_uuid("shared_credentials.userId", &user_id)?,
        credentials_id: row.try_get("credentialsId")?,
        role_id: row.try_get("roleId")?,
        created_at: parse_timestamp("shared_credentials.createdAt", &created_at)?,
        updated_at: parse_timestamp("shared_credentials.updatedAt", &updated_at)?,
    })
}
