use crate::DialectResolver;
use crate::dialect::dialect_resolver::TIMESTAMP_PRECISION;

use serde::Serialize;

/// Logical type names. Most backends spell these the same way; where one
/// does not, [`DialectResolver::resolve_type`] supplies the override.
pub mod logical {
    pub const UUID: &str = "uuid";
    pub const VARCHAR: &str = "varchar";
    pub const INTEGER: &str = "integer";
    pub const JSON: &str = "json";
    pub const DATETIME: &str = "datetime";
}

/// How a primary key value comes into existence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Generation {
    /// Random UUID assigned in-process before insert
    Uuid,
    /// Backend sequence / auto-increment
    Increment,
}

/// Column intent as written in an entity declaration, before the backend's
/// vocabulary is applied.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    name: String,
    logical_type: String,
    nullable: bool,
    length: Option<u32>,
    precision: Option<u16>,
    primary: bool,
    generation: Option<Generation>,
    /// Date columns keep their logical type; only their expressions vary
    dialect_typed: bool,
    default_current_timestamp: bool,
    on_update_current_timestamp: bool,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, logical_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logical_type: logical_type.into(),
            nullable: false,
            length: None,
            precision: None,
            primary: false,
            generation: None,
            dialect_typed: true,
            default_current_timestamp: false,
            on_update_current_timestamp: false,
        }
    }

    pub fn primary_generated(name: impl Into<String>, generation: Generation) -> Self {
        let logical_type = match generation {
            Generation::Uuid => logical::UUID,
            Generation::Increment => logical::INTEGER,
        };
        let mut spec = Self::new(name, logical_type);
        spec.primary = true;
        spec.generation = Some(generation);
        spec
    }

    pub fn varchar(name: impl Into<String>) -> Self {
        Self::new(name, logical::VARCHAR)
    }

    pub fn json(name: impl Into<String>) -> Self {
        Self::new(name, logical::JSON)
    }

    /// Set once on insert by the backend's current-time expression.
    ///
    /// The type is not looked up in the override table, so Postgres gets
    /// `timestamp(3)` here even though it maps a bare `datetime` to
    /// `timestamptz`.
    pub fn create_date(name: impl Into<String>) -> Self {
        let mut spec = Self::new(name, logical::DATETIME).precision(TIMESTAMP_PRECISION);
        spec.dialect_typed = false;
        spec.default_current_timestamp = true;
        spec
    }

    /// Like [`ColumnSpec::create_date`], and refreshed on every update.
    pub fn update_date(name: impl Into<String>) -> Self {
        let mut spec = Self::create_date(name);
        spec.on_update_current_timestamp = true;
        spec
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn precision(mut self, precision: u16) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn resolve(self, resolver: &DialectResolver) -> ColumnDescriptor {
        let concrete_type = if self.dialect_typed {
            resolver.resolve_type(&self.logical_type).to_string()
        } else {
            self.logical_type.clone()
        };
        let now = resolver.timestamp_expression();

        ColumnDescriptor {
            concrete_type,
            default_expression: self.default_current_timestamp.then(|| now.to_string()),
            on_update_expression: self.on_update_current_timestamp.then(|| now.to_string()),
            name: self.name,
            logical_type: self.logical_type,
            nullable: self.nullable,
            length: self.length,
            precision: self.precision,
            primary: self.primary,
            generation: self.generation,
        }
    }
}

/// A column with its backend-specific type and expressions filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub name: String,
    pub logical_type: String,
    pub concrete_type: String,
    pub nullable: bool,
    pub length: Option<u32>,
    pub precision: Option<u16>,
    pub primary: bool,
    pub generation: Option<Generation>,
    pub default_expression: Option<String>,
    pub on_update_expression: Option<String>,
}
