//! Backend-agnostic entity declarations and the machinery that turns them
//! into a concrete, backend-specific schema description.

pub mod column;
pub mod ddl;
pub mod entities;
pub mod entity_schema;
pub mod index;
pub mod registry;
pub mod relation;

use crate::{DatabaseType, DialectResolver, ResolvedSchema, Result as CoreErrorResult, SchemaRegistry};

/// Declare and resolve every identity entity for `database_type`.
///
/// Call once at startup; any declaration or relation problem surfaces here
/// rather than at query time.
#[track_caller]
pub fn identity_schema(database_type: DatabaseType) -> CoreErrorResult<ResolvedSchema> {
    let resolver = DialectResolver::new(database_type);
    let mut registry = SchemaRegistry::new(database_type);

    registry.register(entities::user::user_schema(&resolver)?)?;
    registry.register(entities::role::role_schema(&resolver)?)?;
    registry.register(entities::shared_workflow::shared_workflow_schema(&resolver)?)?;
    registry.register(entities::shared_credentials::shared_credentials_schema(&resolver)?)?;

    registry.resolve()
}
