mod personalization_answers;
mod role_scope;
mod user;
