/// Account endpoints implemented on the connection
pub mod account_service;
/// Enterprise management endpoints implemented on the connection
pub mod enterprise_service;
/// Package and document endpoints implemented on the connection
pub mod package_service;
/// Document preparation and signing endpoints implemented on the connection
pub mod preparation_service;
/// Personal settings endpoints implemented on the connection
pub mod settings_service;
/// Request shapes shared by the services
pub(crate) mod types;
/// Workflow endpoints implemented on the connection
pub mod workflow_service;

pub use crate::application::interfaces::account::*;
pub use crate::application::interfaces::enterprise::*;
pub use crate::application::interfaces::package::*;
pub use crate::application::interfaces::preparation::*;
pub use crate::application::interfaces::settings::*;
pub use crate::application::interfaces::workflow::*;
