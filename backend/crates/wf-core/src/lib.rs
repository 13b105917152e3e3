pub mod dialect;
pub mod error;
pub mod models;
pub mod schema;
pub mod validation;


pub use dialect::database_type::DatabaseType;
pub use dialect::dialect_resolver::{DialectResolver, TIMESTAMP_PRECISION};
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::personalization_answers::PersonalizationAnswers;
pub use models::role::Role;
pub use models::role_scope::RoleScope;
pub use models::shared_credentials::SharedCredentials;
pub use models::shared_workflow::SharedWorkflow;
pub use models::user::{NewUser, User};
pub use schema::column::{ColumnDescriptor, ColumnSpec, Generation};
pub use schema::ddl::DdlRenderer;
pub use schema::entity_schema::{EntitySchema, EntitySchemaBuilder};
pub use schema::index::IndexDescriptor;
pub use schema::registry::{ResolvedEntity, ResolvedRelation, ResolvedSchema, SchemaRegistry};
pub use schema::relation::{Cardinality, CascadePolicy, OnDelete, RelationDescriptor};
pub use schema::identity_schema;
pub use validation::validate_entity;
