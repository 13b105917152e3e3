//! Backend selection and the per-backend vocabulary used while declaring
//! entity schemas.

pub mod database_type;
pub mod dialect_resolver;
