use crate::{
    ColumnSpec, CoreError, DatabaseType, DialectResolver, EntitySchemaBuilder, Generation,
    RelationDescriptor,
};

fn resolver() -> DialectResolver {
    DialectResolver::new(DatabaseType::Sqlite)
}

#[test]
fn test_table_name_defaults_to_snake_case() {
    let resolver = resolver();
    let schema = EntitySchemaBuilder::new(&resolver, "SharedWorkflow")
        .column(ColumnSpec::primary_generated("id", Generation::Uuid))
        .build()
        .unwrap();

    assert_eq!(schema.table_name, "shared_workflow");
}

#[test]
fn test_columns_are_resolved_when_added() {
    let resolver = resolver();
    let schema = EntitySchemaBuilder::new(&resolver, "Thing")
        .column(ColumnSpec::primary_generated("id", Generation::Uuid))
        .column(ColumnSpec::json("data").nullable())
        .column(ColumnSpec::update_date("updatedAt"))
        .build()
        .unwrap();

    let data = schema.column("data").unwrap();
    assert_eq!(data.logical_type, "json");
    assert_eq!(data.concrete_type, "simple-json");
    assert!(data.nullable);

    let updated_at = schema.column("updatedAt").unwrap();
    assert_eq!(updated_at.precision, Some(3));
    assert_eq!(
        updated_at.default_expression.as_deref(),
        Some(resolver.timestamp_expression())
    );
    assert_eq!(
        updated_at.on_update_expression.as_deref(),
        Some(resolver.timestamp_expression())
    );
}

#[test]
fn test_plain_datetime_uses_override_but_date_columns_do_not() {
    let resolver = DialectResolver::new(DatabaseType::Postgres);
    let schema = EntitySchemaBuilder::new(&resolver, "Thing")
        .column(ColumnSpec::primary_generated("id", Generation::Uuid))
        .column(ColumnSpec::new("expiresAt", "datetime"))
        .column(ColumnSpec::create_date("createdAt"))
        .build()
        .unwrap();

    assert_eq!(schema.column("expiresAt").unwrap().concrete_type, "timestamptz");
    assert_eq!(schema.column("createdAt").unwrap().concrete_type, "datetime");
}

#[test]
fn test_missing_primary_key_is_rejected() {
    let resolver = resolver();
    let result = EntitySchemaBuilder::new(&resolver, "Thing")
        .column(ColumnSpec::varchar("name"))
        .build();

    assert!(matches!(result, Err(CoreError::Schema { .. })));
}

#[test]
fn test_duplicate_column_is_rejected() {
    let resolver = resolver();
    let result = EntitySchemaBuilder::new(&resolver, "Thing")
        .column(ColumnSpec::primary_generated("id", Generation::Uuid))
        .column(ColumnSpec::varchar("name"))
        .column(ColumnSpec::varchar("name"))
        .build();

    assert!(matches!(result, Err(CoreError::Schema { .. })));
}

#[test]
fn test_join_column_colliding_with_column_is_rejected() {
    let resolver = resolver();
    let result = EntitySchemaBuilder::new(&resolver, "Thing")
        .column(ColumnSpec::primary_generated("id", Generation::Uuid))
        .column(ColumnSpec::varchar("ownerId"))
        .relation(RelationDescriptor::many_to_one("owner", "User"))
        .build();

    assert!(matches!(result, Err(CoreError::Schema { .. })));
}

#[test]
fn test_index_on_unknown_column_is_rejected() {
    let resolver = resolver();
    let result = EntitySchemaBuilder::new(&resolver, "Thing")
        .column(ColumnSpec::primary_generated("id", Generation::Uuid))
        .unique_index(&["missing"])
        .build();

    assert!(matches!(result, Err(CoreError::Schema { .. })));
}

#[test]
fn test_index_may_cover_join_column() {
    let resolver = resolver();
    let schema = EntitySchemaBuilder::new(&resolver, "Thing")
        .column(ColumnSpec::primary_generated("id", Generation::Uuid))
        .relation(RelationDescriptor::many_to_one("owner", "User"))
        .unique_index(&["ownerId"])
        .build()
        .unwrap();

    assert_eq!(schema.indices[0].name, "IDX_thing_ownerId");
    assert!(schema.indices[0].unique);
}

#[test]
fn test_primary_key_includes_primary_join_columns() {
    let resolver = resolver();
    let schema = EntitySchemaBuilder::new(&resolver, "Share")
        .column(ColumnSpec::varchar("resourceId").length(36).primary())
        .relation(RelationDescriptor::many_to_one("user", "User").primary())
        .build()
        .unwrap();

    assert_eq!(schema.primary_key(), vec!["resourceId", "userId"]);
}
