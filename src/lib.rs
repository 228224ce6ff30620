/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! # SigningHub Client
//!
//! Typed asynchronous client for the SigningHub document-signing REST API.
//!
//! ## Features
//!
//! - **Connection**: base URL, optional port and API version (v3 or v4) with validated setters
//! - **Authentication**: OAuth password and refresh token grants, bearer token handling and
//!   capture of the `x-change-password` token
//! - **Endpoint wrappers**: account, enterprise, package, workflow, preparation and settings
//!   calls grouped in service traits implemented by [`application::connection::Connection`];
//!   every wrapper returns the raw response
//! - **Domain objects**: [`presentation::package::Package`], documents, pages, users and
//!   recipients hydrated from workflow JSON
//! - **Configuration**: environment variables with `.env` support
//! - **Logging**: structured logging through `tracing`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use signinghub_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> ShResult<()> {
//!     setup_logger();
//!
//!     let mut connection = Connection::builder("https://api.signinghub.com")
//!         .client("client-id", "client-secret")
//!         .user("user@example.com", "password")
//!         .build()?;
//!     connection.authenticate().await?;
//!
//!     let mut package = Package::new(1234)?;
//!     package.fetch_workflow_details(&connection).await?;
//!     for document in package.documents() {
//!         println!("{:?} has {} pages", document.name(), document.page_count());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! [`application::config::Config::new`] reads:
//!
//! ```bash
//! SIGNINGHUB_URL=https://api.signinghub.com
//! SIGNINGHUB_PORT=
//! SIGNINGHUB_ADMIN_URL=
//! SIGNINGHUB_ADMIN_PORT=
//! SIGNINGHUB_API_VERSION=4
//! SIGNINGHUB_CLIENT_ID=your_client_id
//! SIGNINGHUB_CLIENT_SECRET=your_client_secret
//! SIGNINGHUB_USERNAME=user@example.com
//! SIGNINGHUB_PASSWORD=your_password
//! SIGNINGHUB_SCOPE=
//! SIGNINGHUB_TIMEOUT=30
//! LOGLEVEL=INFO
//! ```

/// Configuration, connection and service implementations
pub mod application;

/// Constants used across the crate
pub mod constants;

/// Error type of the crate
pub mod error;

/// HTTP primitive, request options and response models
pub mod model;

/// Domain objects hydrated from API responses
pub mod presentation;

/// Convenient re-exports
pub mod prelude;

/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
