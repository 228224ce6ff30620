/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! # SigningHub Client Prelude
//!
//! Brings the commonly used types and traits of the crate into scope with one import.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use signinghub_client::prelude::*;
//!
//! # async fn run() -> ShResult<()> {
//! let config = Config::new();
//! let mut connection = Connection::from_config(&config)?;
//! connection.authenticate().await?;
//! let response = connection.get_account().await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Environment configuration
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

/// Logging setup
pub use crate::utils::logger::setup_logger;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and result alias
pub use crate::error::{AppError, ShResult};

// ============================================================================
// CONNECTION AND TRANSPORT
// ============================================================================

/// Session state and request builder
pub use crate::application::connection::{ApiRequest, Connection, ConnectionBuilder};

/// Raw HTTP types
pub use crate::model::http::{ApiResponse, HeaderProfile, RequestBody};

/// API version of a connection
pub use crate::model::api_version::ApiVersion;

// ============================================================================
// SERVICE INTERFACES
// ============================================================================

/// Endpoint groups, all implemented by [`Connection`]
pub use crate::application::services::{
    AccountService, EnterpriseService, PackageService, PreparationService, SettingsService,
    WorkflowService,
};

// ============================================================================
// REQUEST OPTIONS
// ============================================================================

/// Options and bodies of the endpoint wrappers
pub use crate::model::requests::*;

// ============================================================================
// DOMAIN OBJECTS
// ============================================================================

/// Packages, documents, pages, users and recipients
pub use crate::presentation::document::{Document, FieldMap, Page};
pub use crate::presentation::package::{Package, PackageStatus};
pub use crate::presentation::recipient::{Recipient, RecipientKind, WorkflowRole};
pub use crate::presentation::user::{Enterprise, User};
