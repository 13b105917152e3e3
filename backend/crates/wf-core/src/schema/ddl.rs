//! `CREATE TABLE` / `CREATE UNIQUE INDEX` rendering for a resolved schema.

use crate::{ColumnDescriptor, DatabaseType, Generation, ResolvedEntity, ResolvedSchema};

/// Length used for `varchar` columns declared without one
pub const DEFAULT_VARCHAR_LENGTH: u32 = 255;

#[derive(Debug, Clone, Copy)]
pub struct DdlRenderer {
    database_type: DatabaseType,
}

impl DdlRenderer {
    pub fn new(database_type: DatabaseType) -> Self {
        Self { database_type }
    }

    /// All statements for `schema`: tables in creation order, then indices.
    pub fn render(&self, schema: &ResolvedSchema) -> Vec<String> {
        let mut statements: Vec<String> = schema
            .entities
            .iter()
            .map(|entity| self.create_table(entity))
            .collect();

        statements.extend(
            schema
                .entities
                .iter()
                .flat_map(|entity| self.create_indices(entity)),
        );

        statements
    }

    pub fn create_table(&self, entity: &ResolvedEntity) -> String {
        let table = &entity.schema.table_name;
        let primary_key = entity.schema.primary_key();
        let inline_primary = self.inline_primary_key(entity);

        let mut lines: Vec<String> = entity
            .schema
            .columns
            .iter()
            .map(|column| {
                let inline = inline_primary == Some(column.name.as_str());
                self.column_definition(column, inline)
            })
            .collect();

        // Join columns take the referenced key's storage type
        for relation in entity.owning_relations() {
            let (Some(join_column), Some(referenced)) =
                (relation.join_column.as_deref(), relation.referenced_column.as_ref())
            else {
                continue;
            };
            let null = if relation.nullable { "" } else { " NOT NULL" };
            lines.push(format!(
                "{} {}{}",
                self.quote(join_column),
                self.storage_type(referenced),
                null
            ));
        }

        if inline_primary.is_none() {
            let columns: Vec<String> = primary_key.iter().map(|c| self.quote(c)).collect();
            lines.push(format!(
                "CONSTRAINT {} PRIMARY KEY ({})",
                self.quote(&format!("PK_{table}")),
                columns.join(", ")
            ));
        }

        for relation in entity.owning_relations() {
            let (Some(join_column), Some(referenced)) =
                (relation.join_column.as_deref(), relation.referenced_column.as_ref())
            else {
                continue;
            };
            lines.push(format!(
                "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({}) ON DELETE {}",
                self.quote(&format!("FK_{table}_{join_column}")),
                self.quote(join_column),
                self.quote(&relation.target_table),
                self.quote(&referenced.name),
                relation.on_delete.as_sql()
            ));
        }

        format!(
            "CREATE TABLE {} (\n    {}\n)",
            self.quote(table),
            lines.join(",\n    ")
        )
    }

    pub fn create_indices(&self, entity: &ResolvedEntity) -> Vec<String> {
        entity
            .schema
            .indices
            .iter()
            .map(|index| {
                let columns: Vec<String> = index.columns.iter().map(|c| self.quote(c)).collect();
                format!(
                    "CREATE {}INDEX {} ON {} ({})",
                    if index.unique { "UNIQUE " } else { "" },
                    self.quote(&index.name),
                    self.quote(&entity.schema.table_name),
                    columns.join(", ")
                )
            })
            .collect()
    }

    pub fn quote(&self, identifier: &str) -> String {
        match self.database_type {
            DatabaseType::MySql | DatabaseType::MariaDb => format!("`{identifier}`"),
            DatabaseType::Sqlite | DatabaseType::Postgres => format!("\"{identifier}\""),
        }
    }

    /// Storage type for a resolved concrete type on this backend.
    pub fn storage_type(&self, column: &ColumnDescriptor) -> String {
        let precision = column.precision.map(|p| format!("({p})")).unwrap_or_default();

        match (column.concrete_type.as_str(), self.database_type) {
            ("uuid", DatabaseType::Postgres) => "uuid".to_string(),
            ("uuid", _) => "varchar(36)".to_string(),
            ("varchar", _) => format!(
                "varchar({})",
                column.length.unwrap_or(DEFAULT_VARCHAR_LENGTH)
            ),
            ("integer", DatabaseType::MySql | DatabaseType::MariaDb) => "int".to_string(),
            ("integer", _) => "integer".to_string(),
            ("simple-json", _) => "text".to_string(),
            ("json", DatabaseType::Sqlite) => "text".to_string(),
            ("json", _) => "json".to_string(),
            ("timestamptz", _) => format!("timestamp{precision} with time zone"),
            ("datetime", DatabaseType::Sqlite) => "datetime".to_string(),
            ("datetime", DatabaseType::Postgres) => format!("timestamp{precision}"),
            ("datetime", _) => format!("datetime{precision}"),
            (other, _) => other.to_string(),
        }
    }

    fn column_definition(&self, column: &ColumnDescriptor, inline_primary: bool) -> String {
        let mut definition = format!("{} ", self.quote(&column.name));

        match (column.generation, self.database_type) {
            (Some(Generation::Increment), DatabaseType::Postgres) => definition.push_str("SERIAL"),
            _ => definition.push_str(&self.storage_type(column)),
        }

        if inline_primary {
            definition.push_str(" PRIMARY KEY AUTOINCREMENT");
        }

        if !column.nullable {
            definition.push_str(" NOT NULL");
        }

        if column.generation == Some(Generation::Increment)
            && matches!(
                self.database_type,
                DatabaseType::MySql | DatabaseType::MariaDb
            )
        {
            definition.push_str(" AUTO_INCREMENT");
        }

        if let Some(default) = &column.default_expression {
            match self.database_type {
                DatabaseType::Sqlite => definition.push_str(&format!(" DEFAULT ({default})")),
                _ => definition.push_str(&format!(" DEFAULT {default}")),
            }
        }

        // Only MySQL-family backends have a column-level on-update clause;
        // elsewhere the update hook writes the value.
        if let Some(on_update) = &column.on_update_expression
            && matches!(
                self.database_type,
                DatabaseType::MySql | DatabaseType::MariaDb
            )
        {
            definition.push_str(&format!(" ON UPDATE {on_update}"));
        }

        definition
    }

    /// SQLite only allows AUTOINCREMENT on an inline single-column key.
    fn inline_primary_key<'e>(&self, entity: &'e ResolvedEntity) -> Option<&'e str> {
        if self.database_type != DatabaseType::Sqlite {
            return None;
        }
        let primary_key = entity.schema.primary_key();
        match primary_key.as_slice() {
            [only] => entity
                .schema
                .column(only)
                .filter(|c| c.generation == Some(Generation::Increment))
                .map(|c| c.name.as_str()),
            _ => None,
        }
    }
}
