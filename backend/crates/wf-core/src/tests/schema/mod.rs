mod ddl;
mod entity_schema;
mod registry;
