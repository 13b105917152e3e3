use crate::repositories::{map_write_error, parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult, RoleRepository};

use wf_core::{RoleScope, SharedWorkflow};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const ENTITY: &str = "SharedWorkflow";

pub struct SharedWorkflowRepository {
    pool: SqlitePool,
}

impl SharedWorkflowRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Grant `share.user_id` the workflow-scoped `share.role_id` on a workflow.
    ///
    /// Returns the stored record with backend-assigned timestamps.
    pub async fn create(&self, share: &SharedWorkflow) -> DbErrorResult<SharedWorkflow> {
        RoleRepository::require_scope(&self.pool, share.role_id, RoleScope::Workflow).await?;
        ensure_user_exists(&self.pool, share.user_id).await?;

        let row = sqlx::query(
            r#"
              INSERT INTO "shared_workflow" ("workflowId", "roleId", "userId")
              VALUES (?, ?, ?)
              RETURNING "workflowId", "roleId", "userId", "createdAt", "updatedAt"
              "#,
        )
        .bind(&share.workflow_id)
        .bind(share.role_id)
        .bind(share.user_id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, ENTITY, "user and workflow"))?;

        row_to_share(&row)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Vec<SharedWorkflow>> {
        let rows = sqlx::query(
            r#"
              SELECT "workflowId", "roleId", "userId", "createdAt", "updatedAt"
              FROM "shared_workflow"
              WHERE "userId" = ?
              ORDER BY "workflowId" ASC
              "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_share).collect()
    }

    pub async fn find_by_workflow(&self, workflow_id: &str) -> DbErrorResult<Vec<SharedWorkflow>> {
        let rows = sqlx::query(
            r#"
              SELECT "workflowId", "roleId", "userId", "createdAt", "updatedAt"
              FROM "shared_workflow"
              WHERE "workflowId" = ?
              ORDER BY "createdAt" ASC
              "#,
        )
        .bind(workflow_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_share).collect()
    }

    /// Returns `false` when the share did not exist.
    pub async fn delete(&self, user_id: Uuid, workflow_id: &str) -> DbErrorResult<bool> {
        let result =
            sqlx::query(r#"DELETE FROM "shared_workflow" WHERE "userId" = ? AND "workflowId" = ?"#)
                .bind(user_id.to_string())
                .bind(workflow_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}

pub(crate) async fn ensure_user_exists(pool: &SqlitePool, user_id: Uuid) -> DbErrorResult<()> {
    let found: Option<String> = sqlx::query_scalar(r#"SELECT "id" FROM "user" WHERE "id" = ?"#)
        .bind(user_id.to_string())
        .fetch_optional(pool)
        .await?;

    match found {
        Some(_) => Ok(()),
        None => Err(DbError::relation_integrity(format!(
            "user {} does not exist",
            user_id
        ))),
    }
}

fn row_to_share(row: &SqliteRow) -> DbErrorResult<SharedWorkflow> {
    let user_id: String = row.try_get("userId")?;
    let created_at: String = row.try_get("createdAt")?;
    let updated_at: String = row.try_get("updatedAt")?;

    Ok(SharedWorkflow {
        user_id: parse_uuid("shared_workflow.userId", &user_id)?,
        workflow_id: row.try_get("workflowId")?,
        role_id: row.try_get("roleId")?,
        created_at: parse_timestamp("shared_workflow.createdAt", &created_at)?,
        updated_at: parse_timestamp("shared_workflow.updatedAt", &updated_at)?,
    })
}
