use crate::schema::entities::user;
use crate::{
    ColumnSpec, DialectResolver, EntitySchema, EntitySchemaBuilder, Generation,
    RelationDescriptor, Result as CoreErrorResult,
};

pub const ENTITY_NAME: &str = "Role";
pub const TABLE_NAME: &str = "role";

/// Reference declaration; the role catalogue is managed elsewhere.
#[track_caller]
pub fn role_schema(resolver: &DialectResolver) -> CoreErrorResult<EntitySchema> {
    EntitySchemaBuilder::new(resolver, ENTITY_NAME)
        .table_name(TABLE_NAME)
        .column(ColumnSpec::primary_generated("id", Generation::Increment))
        .column(ColumnSpec::varchar("name").length(32))
        .column(ColumnSpec::varchar("scope"))
        .relation(RelationDescriptor::one_to_many(
            "globalForUsers",
            user::ENTITY_NAME,
            "globalRole",
        ))
        .column(ColumnSpec::create_date("createdAt"))
        .column(ColumnSpec::update_date("updatedAt"))
        .unique_index(&["scope", "name"])
        .build()
}
