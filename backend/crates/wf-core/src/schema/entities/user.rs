use crate::models::user::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH};
use crate::schema::entities::{role, shared_credentials, shared_workflow};
use crate::{
    ColumnSpec, DialectResolver, EntitySchema, EntitySchemaBuilder, Generation,
    RelationDescriptor, Result as CoreErrorResult,
};

pub const ENTITY_NAME: &str = "User";
pub const TABLE_NAME: &str = "user";

/// The `personalizationAnswers` column resolves to the backend's JSON type
/// and the two date columns to its current-time expression; everything else
/// keeps its logical spelling.
#[track_caller]
pub fn user_schema(resolver: &DialectResolver) -> CoreErrorResult<EntitySchema> {
    EntitySchemaBuilder::new(resolver, ENTITY_NAME)
        .table_name(TABLE_NAME)
        .column(ColumnSpec::primary_generated("id", Generation::Uuid))
        .column(ColumnSpec::varchar("email").length(MAX_EMAIL_LENGTH))
        .column(ColumnSpec::varchar("firstName").length(MAX_NAME_LENGTH))
        .column(ColumnSpec::varchar("lastName").length(MAX_NAME_LENGTH))
        .column(ColumnSpec::varchar("password"))
        .column(ColumnSpec::varchar("resetPasswordToken").nullable())
        .column(ColumnSpec::json("personalizationAnswers").nullable())
        .relation(
            RelationDescriptor::many_to_one("globalRole", role::ENTITY_NAME)
                .inverse("globalForUsers")
                .cascade_writes(),
        )
        .relation(RelationDescriptor::one_to_many(
            "sharedWorkflows",
            shared_workflow::ENTITY_NAME,
            "user",
        ))
        .relation(RelationDescriptor::one_to_many(
            "sharedCredentials",
            shared_credentials::ENTITY_NAME,
            "user",
        ))
        .column(ColumnSpec::create_date("createdAt"))
        .column(ColumnSpec::update_date("updatedAt"))
        .unique_index(&["email"])
        .build()
}
