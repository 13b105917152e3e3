#![allow(dead_code)]

use wf_core::{DatabaseType, Role, RoleScope, identity_schema};
use wf_db::{RoleRepository, SchemaInstaller, open_in_memory};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with the identity schema installed
pub async fn create_test_pool() -> SqlitePool {
    let pool = open_in_memory()
        .await
        .expect("Failed to create test pool");

    let schema = identity_schema(DatabaseType::Sqlite).expect("Failed to resolve schema");
    SchemaInstaller::new(pool.clone())
        .install(&schema)
        .await
        .expect("Failed to install schema");

    pool
}

/// Inserts a role for foreign key constraints
pub async fn create_test_role(pool: &SqlitePool, name: &str, scope: RoleScope) -> Role {
    RoleRepository::new(pool.clone())
        .create(name, scope)
        .await
        .expect("Failed to create test role")
}

pub async fn create_global_owner_role(pool: &SqlitePool) -> Role {
    create_test_role(pool, "owner", RoleScope::Global).await
}
