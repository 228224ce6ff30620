/// Account service interface
pub mod account;
/// Enterprise management service interface
pub mod enterprise;
/// Package and document service interface
pub mod package;
/// Document preparation and signing service interface
pub mod preparation;
/// Personal settings service interface
pub mod settings;
/// Workflow service interface
pub mod workflow;
