//! Registration pass that turns name-based relation declarations into
//! concrete handles.
//!
//! Entities are declared independently and may reference each other in any
//! order (User -> Role and Role -> User). Nothing is looked up until
//! [`SchemaRegistry::resolve`], which checks every target and inverse, then
//! orders the entities so each table comes after the tables it references.

use crate::{
    Cardinality, CascadePolicy, ColumnDescriptor, CoreError, DatabaseType, EntitySchema, OnDelete,
    Result as CoreErrorResult,
};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

#[derive(Debug, Default)]
pub struct SchemaRegistry {
    database_type: DatabaseType,
    entities: Vec<EntitySchema>,
}

/// A relation whose target has been found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRelation {
    pub field: String,
    pub cardinality: Cardinality,
    pub cascade: CascadePolicy,
    pub on_delete: OnDelete,
    pub inverse_field: Option<String>,
    pub target_entity: String,
    /// Position of the target in [`ResolvedSchema::entities`]
    pub target_index: usize,
    pub target_table: String,
    /// Target's primary key column; owning side only
    pub referenced_column: Option<ColumnDescriptor>,
    pub join_column: Option<String>,
    pub nullable: bool,
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEntity {
    #[serde(flatten)]
    pub schema: EntitySchema,
    #[serde(rename = "resolvedRelations")]
    pub relations: Vec<ResolvedRelation>,
}

impl ResolvedEntity {
    pub fn owning_relations(&self) -> impl Iterator<Item = &ResolvedRelation> {
        self.relations
            .iter()
            .filter(|r| r.cardinality == Cardinality::ManyToOne)
    }
}

/// Every registered entity, in table-creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSchema {
    pub database_type: DatabaseType,
    pub entities: Vec<ResolvedEntity>,
}

impl ResolvedSchema {
    pub fn entity(&self, name: &str) -> Option<&ResolvedEntity> {
        self.entities.iter().find(|e| e.schema.name == name)
    }
}

impl SchemaRegistry {
    pub fn new(database_type: DatabaseType) -> Self {
        Self {
            database_type,
            entities: Vec::new(),
        }
    }

    pub fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    #[track_caller]
    pub fn register(&mut self, schema: EntitySchema) -> CoreErrorResult<()> {
        if self
            .entities
            .iter()
            .any(|e| e.name == schema.name || e.table_name == schema.table_name)
        {
            return Err(CoreError::DuplicateEntity {
                entity: schema.name,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.entities.push(schema);
        Ok(())
    }

    #[track_caller]
    pub fn resolve(self) -> CoreErrorResult<ResolvedSchema> {
        let location = Location::caller();

        for entity in &self.entities {
            for relation in &entity.relations {
                self.check_relation(entity, &relation.field, location)?;
            }
        }

        let order = self.creation_order(location)?;
        let ordered: Vec<EntitySchema> = order
            .into_iter()
            .map(|i| self.entities[i].clone())
            .collect();

        let entities = ordered
            .iter()
            .map(|schema| resolve_entity(schema, &ordered, location))
            .collect::<CoreErrorResult<Vec<_>>>()?;

        Ok(ResolvedSchema {
            database_type: self.database_type,
            entities,
        })
    }

    fn find(&self, name: &str) -> Option<&EntitySchema> {
        self.entities.iter().find(|e| e.name == name)
    }

    fn check_relation(
        &self,
        entity: &EntitySchema,
        field: &str,
        location: &'static Location<'static>,
    ) -> CoreErrorResult<()> {
        let unresolved = |message: String| CoreError::UnresolvedRelation {
            entity: entity.name.clone(),
            field: field.to_string(),
            message,
            location: ErrorLocation::from(location),
        };

        let Some(relation) = entity.relation(field) else {
            return Err(unresolved("relation is not declared".to_string()));
        };

        let Some(target) = self.find(&relation.target) else {
            return Err(unresolved(format!(
                "target entity {} is not registered",
                relation.target
            )));
        };

        if relation.cardinality == Cardinality::ManyToOne {
            let primary_key = target.primary_key();
            if primary_key.len() != 1 || target.column(primary_key[0]).is_none() {
                return Err(unresolved(format!(
                    "target {} must have exactly one primary key column",
                    target.name
                )));
            }
        }

        let Some(inverse_field) = relation.inverse_field.as_deref() else {
            return Ok(());
        };

        let Some(inverse) = target.relation(inverse_field) else {
            return Err(unresolved(format!(
                "inverse field {}.{} does not exist",
                target.name, inverse_field
            )));
        };

        let expected = match relation.cardinality {
            Cardinality::ManyToOne => Cardinality::OneToMany,
            Cardinality::OneToMany => Cardinality::ManyToOne,
        };
        if inverse.cardinality != expected || inverse.target != entity.name {
            return Err(unresolved(format!(
                "inverse field {}.{} does not point back at {}",
                target.name, inverse_field, entity.name
            )));
        }

        Ok(())
    }

    /// Stable topological order over many-to-one edges, registration order
    /// breaking ties. Self references do not count as dependencies.
    fn creation_order(&self, location: &'static Location<'static>) -> CoreErrorResult<Vec<usize>> {
        let dependencies: Vec<Vec<usize>> = self
            .entities
            .iter()
            .map(|entity| {
                entity
                    .relations
                    .iter()
                    .filter(|r| r.is_owning_side() && r.target != entity.name)
                    .filter_map(|r| self.entities.iter().position(|e| e.name == r.target))
                    .collect()
            })
            .collect();

        let mut placed = vec![false; self.entities.len()];
        let mut order = Vec::with_capacity(self.entities.len());

        while order.len() < self.entities.len() {
            let next = (0..self.entities.len())
                .find(|&i| !placed[i] && dependencies[i].iter().all(|&d| placed[d]));

            let Some(next) = next else {
                let stuck: Vec<&str> = (0..self.entities.len())
                    .filter(|&i| !placed[i])
                    .map(|i| self.entities[i].name.as_str())
                    .collect();
                return Err(CoreError::Schema {
                    message: format!("foreign key cycle between {}", stuck.join(", ")),
                    location: ErrorLocation::from(location),
                });
            };

            placed[next] = true;
            order.push(next);
        }

        Ok(order)
    }
}

fn resolve_entity(
    schema: &EntitySchema,
    ordered: &[EntitySchema],
    location: &'static Location<'static>,
) -> CoreErrorResult<ResolvedEntity> {
    let relations = schema
        .relations
        .iter()
        .map(|relation| {
            let target_index = ordered
                .iter()
                .position(|e| e.name == relation.target)
                .ok_or_else(|| CoreError::UnresolvedRelation {
                    entity: schema.name.clone(),
                    field: relation.field.clone(),
                    message: format!("target entity {} is not registered", relation.target),
                    location: ErrorLocation::from(location),
                })?;
            let target = &ordered[target_index];

            let referenced_column = match relation.cardinality {
                Cardinality::ManyToOne => target
                    .primary_key()
                    .first()
                    .and_then(|pk| target.column(pk))
                    .cloned(),
                Cardinality::OneToMany => None,
            };

            Ok(ResolvedRelation {
                field: relation.field.clone(),
                cardinality: relation.cardinality,
                cascade: relation.cascade,
                on_delete: relation.on_delete,
                inverse_field: relation.inverse_field.clone(),
                target_entity: target.name.clone(),
                target_index,
                target_table: target.table_name.clone(),
                referenced_column,
                join_column: relation.join_column.clone(),
                nullable: relation.nullable,
                primary: relation.primary,
            })
        })
        .collect::<CoreErrorResult<Vec<_>>>()?;

    Ok(ResolvedEntity {
        schema: schema.clone(),
        relations,
    })
}
