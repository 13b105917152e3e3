pub mod connection;
pub mod error;
pub mod repositories;
pub mod schema_installer;


pub use connection::{open_database, open_in_memory};
pub use error::{DbError, Result};
pub use repositories::role_repository::RoleRepository;
pub use repositories::shared_credentials_repository::SharedCredentialsRepository;
pub use repositories::shared_workflow_repository::SharedWorkflowRepository;
pub use repositories::user_repository::UserRepository;
pub use schema_installer::{InstallReport, SchemaInstaller};
