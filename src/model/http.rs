/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! HTTP plumbing shared by every SigningHub call
//!
//! The service is addressed through one request primitive, [`make_http_request`], which never
//! interprets the status code: the caller receives an [`ApiResponse`] holding status, headers
//! and the full body, and decides what a non-success status means.

use crate::error::AppError;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Final header list of a request, in insertion order
pub type Headers = Vec<(String, String)>;

/// Semantic header set of a request
///
/// Each endpoint declares what it sends and what it expects back; the connection turns the
/// profile into concrete `Accept` / `Content-Type` headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderProfile {
    /// Reads JSON, sends nothing
    #[default]
    JsonRead,
    /// Sends and reads JSON
    JsonWrite,
    /// Sends a form-encoded body and reads JSON
    Form,
    /// Reads a binary document
    OctetStream,
    /// Sends a binary document and reads JSON
    Upload,
    /// Reads a PNG page image
    Png,
}

impl HeaderProfile {
    /// Base headers for the profile, without authentication
    #[must_use]
    pub fn headers(self) -> Headers {
        let pairs: &[(&str, &str)] = match self {
            HeaderProfile::JsonRead => &[("Accept", "application/json")],
            HeaderProfile::JsonWrite => &[
                ("Content-Type", "application/json"),
                ("Accept", "application/json"),
            ],
            HeaderProfile::Form => &[
                ("Content-Type", "application/x-www-form-urlencoded"),
                ("Accept", "application/json"),
            ],
            HeaderProfile::OctetStream => &[("Accept", "application/octet-stream")],
            HeaderProfile::Upload => &[
                ("Content-Type", "application/octet-stream"),
                ("Accept", "application/json"),
            ],
            HeaderProfile::Png => &[("Accept", "image/png")],
        };
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }
}

/// Body of an outgoing request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// JSON document
    Json(Value),
    /// `application/x-www-form-urlencoded` pairs
    Form(Vec<(String, String)>),
    /// Raw bytes, e.g. a PDF being uploaded
    Binary(Vec<u8>),
}

/// Raw response of the SigningHub service
///
/// The body is read eagerly so the response can be inspected several times and handed back to
/// the caller after the connection or a domain object looked at it.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ApiResponse {
    /// Builds a response from its parts
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// True for any 2xx status
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Response headers
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Value of a response header, if present and valid UTF-8
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Raw body bytes
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Body decoded as UTF-8, invalid sequences replaced
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body parsed as JSON into `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Turns a non-success status into [`AppError::RemoteStatus`]
    pub fn error_for_status(&self) -> Result<&Self, AppError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(AppError::RemoteStatus {
                status: self.status,
                body: self.text(),
            })
        }
    }
}

/// Sends one HTTP request and returns the raw response
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method (GET, POST, PUT, DELETE)
/// * `url` - Full URL to request
/// * `headers` - Header list, applied in order
/// * `body` - Body of the request
///
/// # Returns
///
/// * `Ok(ApiResponse)` - Any response the service produced, whatever its status
/// * `Err(AppError)` - Only when no response was received
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    headers: &[(String, String)],
    body: RequestBody,
) -> Result<ApiResponse, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in headers {
        request = request.header(name.as_str(), value.as_str());
    }

    request = match body {
        RequestBody::Empty => request,
        // the content type already comes from the header profile
        RequestBody::Json(value) => request.body(serde_json::to_vec(&value)?),
        RequestBody::Form(pairs) => request.form(&pairs),
        RequestBody::Binary(bytes) => request.body(bytes),
    };

    let response = request.send().await?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await?.to_vec();
    debug!("Response status: {} ({} bytes)", status, body.len());

    Ok(ApiResponse::new(status, headers, body))
}
