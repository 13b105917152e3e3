use crate::{
    Cardinality, ColumnDescriptor, ColumnSpec, CoreError, DialectResolver, IndexDescriptor,
    RelationDescriptor, Result as CoreErrorResult,
};

use std::collections::HashSet;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// Backend-specific description of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySchema {
    pub name: String,
    pub table_name: String,
    pub columns: Vec<ColumnDescriptor>,
    pub relations: Vec<RelationDescriptor>,
    pub indices: Vec<IndexDescriptor>,
}

impl EntitySchema {
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn relation(&self, field: &str) -> Option<&RelationDescriptor> {
        self.relations.iter().find(|r| r.field == field)
    }

    /// Primary key column names: declared columns first, then join columns
    /// of relations marked primary.
    pub fn primary_key(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.primary)
            .map(|c| c.name.as_str())
            .chain(
                self.relations
                    .iter()
                    .filter(|r| r.primary)
                    .filter_map(|r| r.join_column.as_deref()),
            )
            .collect()
    }
}

/// Collects column and relation declarations for one entity, resolving each
/// column against the backend as it is added.
pub struct EntitySchemaBuilder<'r> {
    resolver: &'r DialectResolver,
    name: String,
    table_name: String,
    columns: Vec<ColumnDescriptor>,
    relations: Vec<RelationDescriptor>,
    unique_indices: Vec<Vec<String>>,
}

impl<'r> EntitySchemaBuilder<'r> {
    /// Table name defaults to the snake_case form of `name`.
    pub fn new(resolver: &'r DialectResolver, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            resolver,
            table_name: to_snake_case(&name),
            name,
            columns: Vec::new(),
            relations: Vec::new(),
            unique_indices: Vec::new(),
        }
    }

    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn column(mut self, spec: ColumnSpec) -> Self {
        self.columns.push(spec.resolve(self.resolver));
        self
    }

    pub fn relation(mut self, relation: RelationDescriptor) -> Self {
        self.relations.push(relation);
        self
    }

    pub fn unique_index(mut self, columns: &[&str]) -> Self {
        self.unique_indices
            .push(columns.iter().map(|c| c.to_string()).collect());
        self
    }

    #[track_caller]
    pub fn build(self) -> CoreErrorResult<EntitySchema> {
        let location = Location::caller();
        let schema_error = |message: String| CoreError::Schema {
            message,
            location: ErrorLocation::from(location),
        };

        let mut storage_columns: HashSet<&str> = HashSet::new();
        for column in &self.columns {
            if !storage_columns.insert(column.name.as_str()) {
                return Err(schema_error(format!(
                    "{}: duplicate column {}",
                    self.name, column.name
                )));
            }
        }

        let mut fields: HashSet<&str> = HashSet::new();
        for relation in &self.relations {
            if !fields.insert(relation.field.as_str()) {
                return Err(schema_error(format!(
                    "{}: duplicate relation {}",
                    self.name, relation.field
                )));
            }
            match relation.cardinality {
                Cardinality::ManyToOne => {
                    let Some(join_column) = relation.join_column.as_deref() else {
                        return Err(schema_error(format!(
                            "{}.{}: many-to-one relation needs a join column",
                            self.name, relation.field
                        )));
                    };
                    if !storage_columns.insert(join_column) {
                        return Err(schema_error(format!(
                            "{}.{}: join column {} collides with another column",
                            self.name, relation.field, join_column
                        )));
                    }
                }
                Cardinality::OneToMany => {
                    if relation.inverse_field.is_none() || relation.primary {
                        return Err(schema_error(format!(
                            "{}.{}: one-to-many relation needs an inverse field and cannot be primary",
                            self.name, relation.field
                        )));
                    }
                }
            }
        }

        for columns in &self.unique_indices {
            if columns.is_empty() {
                return Err(schema_error(format!("{}: empty index", self.name)));
            }
            if let Some(missing) = columns
                .iter()
                .find(|c| !storage_columns.contains(c.as_str()))
            {
                return Err(schema_error(format!(
                    "{}: index references unknown column {}",
                    self.name, missing
                )));
            }
        }

        let indices = self
            .unique_indices
            .iter()
            .map(|columns| {
                let columns: Vec<&str> = columns.iter().map(String::as_str).collect();
                IndexDescriptor::unique(&self.table_name, &columns)
            })
            .collect();

        let schema = EntitySchema {
            name: self.name,
            table_name: self.table_name,
            columns: self.columns,
            relations: self.relations,
            indices,
        };

        if schema.primary_key().is_empty() {
            return Err(schema_error(format!("{}: no primary key", schema.name)));
        }

        Ok(schema)
    }
}

fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
