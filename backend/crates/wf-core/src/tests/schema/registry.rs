use crate::{
    ColumnSpec, CoreError, DatabaseType, DialectResolver, EntitySchema, EntitySchemaBuilder,
    Generation, RelationDescriptor, SchemaRegistry,
};

fn entity(
    resolver: &DialectResolver,
    name: &str,
    relations: Vec<RelationDescriptor>,
) -> EntitySchema {
    relations
        .into_iter()
        .fold(
            EntitySchemaBuilder::new(resolver, name)
                .column(ColumnSpec::primary_generated("id", Generation::Increment)),
            |builder, relation| builder.relation(relation),
        )
        .build()
        .unwrap()
}

#[test]
fn test_relations_resolve_regardless_of_registration_order() {
    let resolver = DialectResolver::new(DatabaseType::Sqlite);
    let mut registry = SchemaRegistry::new(DatabaseType::Sqlite);

    registry
        .register(entity(
            &resolver,
            "Child",
            vec![RelationDescriptor::many_to_one("parent", "Parent").inverse("children")],
        ))
        .unwrap();
    registry
        .register(entity(
            &resolver,
            "Parent",
            vec![RelationDescriptor::one_to_many("children", "Child", "parent")],
        ))
        .unwrap();

    let resolved = registry.resolve().unwrap();

    let names: Vec<&str> = resolved
        .entities
        .iter()
        .map(|e| e.schema.name.as_str())
        .collect();
    assert_eq!(names, vec!["Parent", "Child"]);

    let child = resolved.entity("Child").unwrap();
    let parent_relation = &child.relations[0];
    assert_eq!(parent_relation.target_index, 0);
    assert_eq!(parent_relation.target_table, "parent");
    assert_eq!(parent_relation.join_column.as_deref(), Some("parentId"));
    assert_eq!(
        parent_relation.referenced_column.as_ref().map(|c| c.name.as_str()),
        Some("id")
    );
}

#[test]
fn test_unregistered_target_is_rejected() {
    let resolver = DialectResolver::new(DatabaseType::Sqlite);
    let mut registry = SchemaRegistry::new(DatabaseType::Sqlite);
    registry
        .register(entity(
            &resolver,
            "Child",
            vec![RelationDescriptor::many_to_one("parent", "Parent")],
        ))
        .unwrap();

    assert!(matches!(
        registry.resolve(),
        Err(CoreError::UnresolvedRelation { .. })
    ));
}

#[test]
fn test_inverse_that_points_elsewhere_is_rejected() {
    let resolver = DialectResolver::new(DatabaseType::Sqlite);
    let mut registry = SchemaRegistry::new(DatabaseType::Sqlite);
    registry
        .register(entity(
            &resolver,
            "Child",
            vec![RelationDescriptor::many_to_one("parent", "Parent").inverse("children")],
        ))
        .unwrap();
    registry
        .register(entity(
            &resolver,
            "Other",
            vec![RelationDescriptor::many_to_one("parent", "Parent")],
        ))
        .unwrap();
    registry
        .register(entity(
            &resolver,
            "Parent",
            vec![RelationDescriptor::one_to_many("children", "Other", "parent")],
        ))
        .unwrap();

    assert!(matches!(
        registry.resolve(),
        Err(CoreError::UnresolvedRelation { .. })
    ));
}

#[test]
fn test_missing_inverse_field_is_rejected() {
    let resolver = DialectResolver::new(DatabaseType::Sqlite);
    let mut registry = SchemaRegistry::new(DatabaseType::Sqlite);
    registry
        .register(entity(
            &resolver,
            "Parent",
            vec![RelationDescriptor::one_to_many("children", "Child", "parent")],
        ))
        .unwrap();
    registry.register(entity(&resolver, "Child", vec![])).unwrap();

    assert!(matches!(
        registry.resolve(),
        Err(CoreError::UnresolvedRelation { .. })
    ));
}

#[test]
fn test_foreign_key_cycle_is_rejected() {
    let resolver = DialectResolver::new(DatabaseType::Sqlite);
    let mut registry = SchemaRegistry::new(DatabaseType::Sqlite);
    registry
        .register(entity(
            &resolver,
            "A",
            vec![RelationDescriptor::many_to_one("b", "B")],
        ))
        .unwrap();
    registry
        .register(entity(
            &resolver,
            "B",
            vec![RelationDescriptor::many_to_one("a", "A")],
        ))
        .unwrap();

    assert!(matches!(registry.resolve(), Err(CoreError::Schema { .. })));
}

#[test]
fn test_self_reference_is_not_a_cycle() {
    let resolver = DialectResolver::new(DatabaseType::Sqlite);
    let mut registry = SchemaRegistry::new(DatabaseType::Sqlite);
    registry
        .register(entity(
            &resolver,
            "Node",
            vec![RelationDescriptor::many_to_one("parent", "Node").nullable()],
        ))
        .unwrap();

    let resolved = registry.resolve().unwrap();
    assert_eq!(resolved.entities[0].relations[0].target_index, 0);
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let resolver = DialectResolver::new(DatabaseType::Sqlite);
    let mut registry = SchemaRegistry::new(DatabaseType::Sqlite);
    registry.register(entity(&resolver, "Thing", vec![])).unwrap();

    assert!(matches!(
        registry.register(entity(&resolver, "Thing", vec![])),
        Err(CoreError::DuplicateEntity { .. })
    ));
}
