pub mod role;
pub mod shared_credentials;
pub mod shared_workflow;
pub mod user;
