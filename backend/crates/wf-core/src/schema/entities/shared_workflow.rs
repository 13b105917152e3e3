use crate::schema::entities::{role, user};
use crate::{
    ColumnSpec, DialectResolver, EntitySchema, EntitySchemaBuilder, RelationDescriptor,
    Result as CoreErrorResult,
};

pub const ENTITY_NAME: &str = "SharedWorkflow";
pub const TABLE_NAME: &str = "shared_workflow";

/// Join record owning the user's `sharedWorkflows` collection. Removing the
/// user removes its shares.
#[track_caller]
pub fn shared_workflow_schema(resolver: &DialectResolver) -> CoreErrorResult<EntitySchema> {
    EntitySchemaBuilder::new(resolver, ENTITY_NAME)
        .table_name(TABLE_NAME)
        .column(ColumnSpec::varchar("workflowId").length(36).primary())
        .relation(RelationDescriptor::many_to_one("role", role::ENTITY_NAME))
        .relation(
            RelationDescriptor::many_to_one("user", user::ENTITY_NAME)
                .inverse("sharedWorkflows")
                .on_delete_cascade()
                .primary(),
        )
        .column(ColumnSpec::create_date("createdAt"))
        .column(ColumnSpec::update_date("updatedAt"))
        .build()
}
