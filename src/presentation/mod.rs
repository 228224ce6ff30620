/// Documents and their pages
pub mod document;
/// Document packages
pub mod package;
/// Workflow recipients and roles
pub mod recipient;
/// Serialization utilities for API responses
pub mod serialization;
/// Users and their enterprise
pub mod user;
/// Wire shapes of the workflow endpoints
pub mod workflow;
