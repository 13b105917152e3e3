use crate::schema::entities::{role, user};
use crate::{
    ColumnSpec, DialectResolver, EntitySchema, EntitySchemaBuilder, RelationDescriptor,
    Result as CoreErrorResult,
};

pub const ENTITY_NAME: &str = "SharedCredentials";
pub const TABLE_NAME: &str = "shared_credentials";

/// Join record owning the user's `sharedCredentials` collection. Removing the
/// user removes its shares.
#[track_caller]
pub fn shared_credentials_schema(resolver: &DialectResolver) -> CoreErrorResult<EntitySchema> {
    EntitySchemaBuilder::new(resolver, ENTITY_NAME)
        .table_name(TABLE_NAME)
        .column(ColumnSpec::varchar("credentialsId").length(36).primary())
        .relation(RelationDescriptor::many_to_one("role", role::ENTITY_NAME))
        .relation(
            RelationDescriptor::many_to_one("user", user::ENTITY_NAME)
                .inverse("sharedCredentials")
                .on_delete_cascade()
                .primary(),
        )
        .column(ColumnSpec::create_date("createdAt"))
        .column(ColumnSpec::update_date("updatedAt"))
        .build()
}
