pub mod personalization_answers;
pub mod role;
pub mod role_scope;
pub mod shared_credentials;
pub mod shared_workflow;
pub mod user;
