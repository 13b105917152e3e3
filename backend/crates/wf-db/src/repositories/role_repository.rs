use crate::repositories::{map_write_error, parse_timestamp};
use crate::{DbError, Result as DbErrorResult};

use wf_core::{Role, RoleScope};

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const ENTITY: &str = "Role";

pub struct RoleRepository {
    pool: SqlitePool,
}

impl RoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a role; the id and both timestamps come from the backend.
    pub async fn create(&self, name: &str, scope: RoleScope) -> DbErrorResult<Role> {
        let row = sqlx::query(
            r#"
              INSERT INTO "role" ("name", "scope")
              VALUES (?, ?)
              RETURNING "id", "name", "scope", "createdAt", "updatedAt"
              "#,
        )
        .bind(name)
        .bind(scope.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, ENTITY, "scope and name"))?;

        row_to_role(&row)
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Role>> {
        let row = sqlx::query(
            r#"
              SELECT "id", "name", "scope", "createdAt", "updatedAt"
              FROM "role"
              WHERE "id" = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_role).transpose()
    }

    pub async fn find_by_scope_and_name(
        &self,
        scope: RoleScope,
        name: &str,
    ) -> DbErrorResult<Option<Role>> {
        let row = sqlx::query(
            r#"
              SELECT "id", "name", "scope", "createdAt", "updatedAt"
              FROM "role"
              WHERE "scope" = ? AND "name" = ?
              "#,
        )
        .bind(scope.as_str())
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_role).transpose()
    }

    pub async fn list(&self) -> DbErrorResult<Vec<Role>> {
        let rows = sqlx::query(
            r#"
              SELECT "id", "name", "scope", "createdAt", "updatedAt"
              FROM "role"
              ORDER BY "id" ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_role).collect()
    }

    /// Fetch the role a write is about to reference and check its scope.
    ///
    /// Runs before the write so a bad reference never reaches the backend.
    pub(crate) async fn require_scope(
        pool: &SqlitePool,
        role_id: i64,
        scope: RoleScope,
    ) -> DbErrorResult<Role> {
        let repo = RoleRepository::new(pool.clone());
        let role = repo.find_by_id(role_id).await?.ok_or_else(|| {
            DbError::relation_integrity(format!("role {} does not exist", role_id))
        })?;

        if role.scope != scope {
            return Err(DbError::relation_integrity(format!(
                "role {} ({}) has scope {}, expected {}",
                role.id, role.name, role.scope, scope
            )));
        }

        Ok(role)
    }
}

fn row_to_role(row: &SqliteRow) -> DbErrorResult<Role> {
    let scope: String = row.try_get("scope")?;
    let created_at: String = row.try_get("createdAt")?;
    let updated_at: String = row.try_get("updatedAt")?;

    Ok(Role {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        scope: RoleScope::from_str(&scope)?,
        created_at: parse_timestamp("role.createdAt", &created_at)?,
        updated_at: parse_timestamp("role.updatedAt", &updated_at)?,
    })
}
