/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Error types for the SigningHub client
//!
//! Every fallible operation in the crate returns [`AppError`]. Local precondition failures
//! (`InvalidInput`, `MissingField`, `InvalidState`) are raised before any request leaves the
//! process. Remote failures only become errors in the fetch-and-hydrate helpers of the domain
//! objects, through [`AppError::RemoteStatus`]; the endpoint wrappers hand back the raw response.

use reqwest::StatusCode;
use std::fmt;

/// Convenience result alias used across the crate
pub type ShResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure, no HTTP response was received
    Network(reqwest::Error),
    /// Local I/O failure, e.g. reading a document before upload
    Io(std::io::Error),
    /// A body could not be parsed as JSON
    Json(serde_json::Error),
    /// The remote service answered with a non-success status
    RemoteStatus {
        /// Status code returned by the service
        status: StatusCode,
        /// Raw body returned with the status
        body: String,
    },
    /// A value supplied by the caller is not acceptable
    InvalidInput(String),
    /// A value required by the operation is not set
    MissingField(String),
    /// The local state of an object forbids the operation
    InvalidState(String),
    /// The service answered with an empty payload where content was expected
    EmptyResponse(String),
    /// A JSON payload does not have the expected shape
    Deserialization(String),
    /// A request body could not be serialized
    SerializationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::RemoteStatus { status, body } => {
                write!(f, "unexpected status {status}: {body}")
            }
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::MissingField(field) => write!(f, "missing required field: {field}"),
            AppError::InvalidState(msg) => write!(f, "invalid state: {msg}"),
            AppError::EmptyResponse(msg) => write!(f, "empty response: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::SerializationError(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl AppError {
    /// Returns true for errors raised locally before any request was sent
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            AppError::InvalidInput(_) | AppError::MissingField(_) | AppError::InvalidState(_)
        )
    }

    /// Status code carried by a remote failure, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::RemoteStatus { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}
