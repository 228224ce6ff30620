/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Session state of a SigningHub installation
//!
//! A [`Connection`] holds everything needed to address and authenticate against one remote
//! instance:
//! - base URL, optional port and the cached effective URL derived from them
//! - the targeted API version
//! - the optional address of the administration console
//! - client and user credentials
//! - the tokens obtained from the last authentication call
//!
//! Every endpoint wrapper goes through [`Connection::execute`], which assembles the headers of
//! an [`ApiRequest`], injects the bearer token and returns the raw [`ApiResponse`].

use crate::application::config::{Config, Credentials};
use crate::constants::{
    AUTHENTICATE_PATH, DEFAULT_TIMEOUT_SECS, GRANT_TYPE_PASSWORD, GRANT_TYPE_REFRESH_TOKEN,
    HEADER_X_CHANGE_PASSWORD, USER_AGENT,
};
use crate::error::{AppError, ShResult};
use crate::model::api_version::ApiVersion;
use crate::model::http::{ApiResponse, HeaderProfile, Headers, RequestBody, make_http_request};
use crate::model::responses::{AboutResponse, AuthenticateResponse};
use chrono::{DateTime, Utc};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// One call to the SigningHub service, before headers and URL are resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    profile: HeaderProfile,
    headers: Headers,
    body: RequestBody,
    versioned: bool,
    authenticated: bool,
}

impl ApiRequest {
    /// Request on a path relative to `/v{version}/`
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            profile: HeaderProfile::default(),
            headers: Vec::new(),
            body: RequestBody::Empty,
            versioned: true,
            authenticated: true,
        }
    }

    /// GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Overrides the header profile
    #[must_use]
    pub fn profile(mut self, profile: HeaderProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Adds a header after the profile headers
    pub fn header(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.headers.push((name.into(), value.to_string()));
        self
    }

    /// Adds a header only when a value is given
    pub fn optional_header<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.header(name, value),
            None => self,
        }
    }

    /// Serializes `body` as the JSON payload and switches to the JSON write profile
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> ShResult<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| AppError::SerializationError(e.to_string()))?;
        self.body = RequestBody::Json(value);
        self.profile = HeaderProfile::JsonWrite;
        Ok(self)
    }

    /// Form-encoded payload
    #[must_use]
    pub fn form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Form(pairs);
        self.profile = HeaderProfile::Form;
        self
    }

    /// Binary payload, sent as an octet stream
    #[must_use]
    pub fn binary(mut self, bytes: Vec<u8>) -> Self {
        self.body = RequestBody::Binary(bytes);
        self.profile = HeaderProfile::Upload;
        self
    }

    /// The path is resolved against the base URL without the version prefix
    #[must_use]
    pub fn unversioned(mut self) -> Self {
        self.versioned = false;
        self
    }

    /// No bearer token is attached
    #[must_use]
    pub fn anonymous(mut self) -> Self {
        self.authenticated = false;
        self
    }

    /// HTTP method of the request
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base or versioned URL
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Body of the request
    #[must_use]
    pub fn body(&self) -> &RequestBody {
        &self.body
    }
}

/// Removes every trailing `/` and checks the remainder is an absolute URL
fn normalize_url(url: &str) -> ShResult<String> {
    let stripped = url.trim().trim_end_matches('/');
    if stripped.is_empty() {
        return Err(AppError::InvalidInput("url cannot be empty".to_string()));
    }
    let parsed = Url::parse(stripped)
        .map_err(|e| AppError::InvalidInput(format!("invalid url {stripped}: {e}")))?;
    if !parsed.has_host() {
        return Err(AppError::InvalidInput(format!("url has no host: {stripped}")));
    }
    Ok(stripped.to_string())
}

fn require<'a>(value: &'a Option<String>, name: &str) -> ShResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| AppError::MissingField(name.to_string()))
}

/// Builder of a [`Connection`]
#[derive(Debug, Clone, Default)]
pub struct ConnectionBuilder {
    url: String,
    api_port: Option<u16>,
    api_version: Option<u8>,
    admin_url: Option<String>,
    admin_port: Option<u16>,
    credentials: Credentials,
    timeout: Option<u64>,
}

impl ConnectionBuilder {
    /// Starts a builder for the given base URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Port appended to the URL
    #[must_use]
    pub fn api_port(mut self, port: u16) -> Self {
        self.api_port = Some(port);
        self
    }

    /// API version, validated on [`ConnectionBuilder::build`]
    #[must_use]
    pub fn api_version(mut self, version: u8) -> Self {
        self.api_version = Some(version);
        self
    }

    /// OAuth client credentials
    #[must_use]
    pub fn client(mut self, client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        self.credentials.client_id = Some(client_id.into());
        self.credentials.client_secret = Some(client_secret.into());
        self
    }

    /// User credentials for the password grant
    #[must_use]
    pub fn user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials.username = Some(username.into());
        self.credentials.password = Some(password.into());
        self
    }

    /// Scope of the password grant
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.credentials.scope = Some(scope.into());
        self
    }

    /// Existing access token
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.credentials.access_token = Some(token.into());
        self
    }

    /// Existing refresh token
    #[must_use]
    pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
        self.credentials.refresh_token = Some(token.into());
        self
    }

    /// Base URL of the administration console, validated on [`ConnectionBuilder::build`]
    #[must_use]
    pub fn admin_url(mut self, url: impl Into<String>) -> Self {
        self.admin_url = Some(url.into());
        self
    }

    /// Port of the administration console
    #[must_use]
    pub fn admin_port(mut self, port: u16) -> Self {
        self.admin_port = Some(port);
        self
    }

    /// Per request timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Validates the settings and creates the connection
    pub fn build(self) -> ShResult<Connection> {
        let url = normalize_url(&self.url)?;
        let admin_url = self.admin_url.as_deref().map(normalize_url).transpose()?;
        let api_version = match self.api_version {
            Some(version) => ApiVersion::try_from(version)?,
            None => ApiVersion::default(),
        };
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(
                self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .build()?;

        let mut credentials = self.credentials;
        let access_token = credentials.access_token.take();
        let refresh_token = credentials.refresh_token.take();
        let token_obtained_at = access_token.as_ref().map(|_| Utc::now());

        let mut connection = Connection {
            http_client,
            url,
            api_port: self.api_port,
            full_url: String::new(),
            api_version,
            admin_url,
            admin_port: self.admin_port,
            credentials,
            access_token,
            refresh_token,
            x_change_password_token: None,
            token_obtained_at,
        };
        connection.refresh_full_url();
        debug!("Connection created for {}", connection.full_url);
        Ok(connection)
    }
}

/// Session with one SigningHub installation
#[derive(Debug, Clone)]
pub struct Connection {
    http_client: Client,
    url: String,
    api_port: Option<u16>,
    full_url: String,
    api_version: ApiVersion,
    admin_url: Option<String>,
    admin_port: Option<u16>,
    credentials: Credentials,
    access_token: Option<String>,
    refresh_token: Option<String>,
    x_change_password_token: Option<String>,
    token_obtained_at: Option<DateTime<Utc>>,
}

impl Connection {
    /// Shorthand for [`ConnectionBuilder::new`]
    pub fn builder(url: impl Into<String>) -> ConnectionBuilder {
        ConnectionBuilder::new(url)
    }

    /// Creates a connection from an environment [`Config`]
    pub fn from_config(config: &Config) -> ShResult<Self> {
        let mut builder = ConnectionBuilder::new(config.rest_api.url.clone())
            .api_version(config.api_version)
            .timeout(config.rest_api.timeout);
        builder.api_port = config.rest_api.port;
        builder.admin_url = config.rest_api.admin_url.clone();
        builder.admin_port = config.rest_api.admin_port;
        builder.credentials = config.credentials.clone();
        builder.build()
    }

    fn refresh_full_url(&mut self) {
        self.full_url = match self.api_port {
            Some(port) => format!("{}:{}", self.url, port),
            None => self.url.clone(),
        };
    }

    /// Base URL without trailing separators
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replaces the base URL; the previous one is kept when the new one is rejected
    pub fn set_url(&mut self, url: &str) -> ShResult<()> {
        self.url = normalize_url(url)?;
        self.refresh_full_url();
        Ok(())
    }

    /// Configured port
    #[must_use]
    pub fn api_port(&self) -> Option<u16> {
        self.api_port
    }

    /// Sets or clears the port
    pub fn set_api_port(&mut self, port: Option<u16>) {
        self.api_port = port;
        self.refresh_full_url();
    }

    /// Effective base URL: `{url}` or `{url}:{port}`
    #[must_use]
    pub fn full_url(&self) -> &str {
        &self.full_url
    }

    /// Targeted API version
    #[must_use]
    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Sets the API version; only 3 and 4 are accepted
    pub fn set_api_version(&mut self, version: u8) -> ShResult<()> {
        self.api_version = ApiVersion::try_from(version)?;
        Ok(())
    }

    /// Base URL of the administration console
    #[must_use]
    pub fn admin_url(&self) -> Option<&str> {
        self.admin_url.as_deref()
    }

    /// Sets or clears the administration console URL; a rejected URL keeps the previous one
    pub fn set_admin_url(&mut self, url: Option<&str>) -> ShResult<()> {
        self.admin_url = url.map(normalize_url).transpose()?;
        Ok(())
    }

    /// Port of the administration console
    #[must_use]
    pub fn admin_port(&self) -> Option<u16> {
        self.admin_port
    }

    /// Sets or clears the administration console port
    pub fn set_admin_port(&mut self, port: Option<u16>) {
        self.admin_port = port;
    }

    /// Effective administration console URL, with the port appended when set
    #[must_use]
    pub fn admin_full_url(&self) -> Option<String> {
        self.admin_url.as_ref().map(|url| match self.admin_port {
            Some(port) => format!("{url}:{port}"),
            None => url.clone(),
        })
    }

    /// Stored credentials
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Replaces the stored credentials; tokens are untouched
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Credentials {
            access_token: None,
            refresh_token: None,
            ..credentials
        };
    }

    /// Current access token
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Sets or clears the access token
    pub fn set_access_token(&mut self, token: Option<String>) {
        self.token_obtained_at = token.as_ref().map(|_| Utc::now());
        self.access_token = token;
    }

    /// Current refresh token
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Sets or clears the refresh token
    pub fn set_refresh_token(&mut self, token: Option<String>) {
        self.refresh_token = token;
    }

    /// Change password token returned by the last authentication, if any
    #[must_use]
    pub fn x_change_password_token(&self) -> Option<&str> {
        self.x_change_password_token.as_deref()
    }

    /// When the current tokens were stored
    #[must_use]
    pub fn token_obtained_at(&self) -> Option<DateTime<Utc>> {
        self.token_obtained_at
    }

    /// True when an access token is stored
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// URL of a versioned endpoint
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/v{}/{}",
            self.full_url,
            self.api_version,
            path.trim_start_matches('/')
        )
    }

    /// URL of an endpoint outside the version prefix
    #[must_use]
    pub fn unversioned_endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.full_url, path.trim_start_matches('/'))
    }

    /// Final headers of a request with the given profile
    ///
    /// The bearer header is only added for authenticated calls and only when a token is stored.
    #[must_use]
    pub fn build_headers(&self, profile: HeaderProfile, authenticated: bool) -> Headers {
        let mut headers = profile.headers();
        if authenticated {
            if let Some(token) = &self.access_token {
                headers.push(("Authorization".to_string(), format!("Bearer {token}")));
            }
        }
        headers
    }

    /// Sends a request and returns the raw response, whatever its status
    pub async fn execute(&self, request: ApiRequest) -> ShResult<ApiResponse> {
        let url = if request.versioned {
            self.endpoint(&request.path)
        } else {
            self.unversioned_endpoint(&request.path)
        };
        let mut headers = self.build_headers(request.profile, request.authenticated);
        headers.extend(request.headers);

        make_http_request(&self.http_client, request.method, &url, &headers, request.body).await
    }

    /// Authenticates with the password grant
    ///
    /// On a 200 response carrying both tokens they are stored, together with the
    /// `x-change-password` header when present. Any other outcome clears the stored tokens.
    /// The raw response is returned in both cases.
    ///
    /// # Errors
    ///
    /// * `MissingField` when client id, client secret, username or password is not set
    /// * `Network` when no response was received; tokens are cleared first
    pub async fn authenticate(&mut self) -> ShResult<ApiResponse> {
        let client_id = require(&self.credentials.client_id, "client_id")?;
        let client_secret = require(&self.credentials.client_secret, "client_secret")?;
        let username = require(&self.credentials.username, "username")?;
        let password = require(&self.credentials.password, "password")?;

        let mut form = vec![
            ("grant_type".to_string(), GRANT_TYPE_PASSWORD.to_string()),
            ("client_id".to_string(), client_id.to_string()),
            ("client_secret".to_string(), client_secret.to_string()),
            ("username".to_string(), username.to_string()),
            ("password".to_string(), password.to_string()),
        ];
        if let Some(scope) = &self.credentials.scope {
            form.push(("scope".to_string(), scope.clone()));
        }

        info!("Authenticating {} against {}", username, self.full_url);
        self.run_authentication(form).await
    }

    /// Authenticates with the refresh token grant, same token contract as [`Self::authenticate`]
    ///
    /// # Errors
    ///
    /// * `MissingField` when client id, client secret or the refresh token is not set
    /// * `Network` when no response was received; tokens are cleared first
    pub async fn authenticate_with_refresh_token(&mut self) -> ShResult<ApiResponse> {
        let client_id = require(&self.credentials.client_id, "client_id")?;
        let client_secret = require(&self.credentials.client_secret, "client_secret")?;
        let refresh_token = require(&self.refresh_token, "refresh_token")?;

        let form = vec![
            ("grant_type".to_string(), GRANT_TYPE_REFRESH_TOKEN.to_string()),
            ("client_id".to_string(), client_id.to_string()),
            ("client_secret".to_string(), client_secret.to_string()),
            ("refresh_token".to_string(), refresh_token.to_string()),
        ];

        info!("Refreshing access token against {}", self.full_url);
        self.run_authentication(form).await
    }

    async fn run_authentication(&mut self, form: Vec<(String, String)>) -> ShResult<ApiResponse> {
        let request = ApiRequest::post(AUTHENTICATE_PATH)
            .form(form)
            .unversioned()
            .anonymous();

        match self.execute(request).await {
            Ok(response) => {
                self.store_tokens(&response);
                Ok(response)
            }
            Err(e) => {
                warn!("Authentication request failed: {e}");
                self.reset_tokens();
                Err(e)
            }
        }
    }

    fn store_tokens(&mut self, response: &ApiResponse) {
        if response.status() != StatusCode::OK {
            warn!("Authentication rejected with status {}", response.status());
            self.reset_tokens();
            return;
        }
        match response.json::<AuthenticateResponse>() {
            Ok(tokens) => {
                self.access_token = Some(tokens.access_token);
                self.refresh_token = Some(tokens.refresh_token);
                self.x_change_password_token = response
                    .header(HEADER_X_CHANGE_PASSWORD)
                    .map(str::to_string);
                self.token_obtained_at = Some(Utc::now());
                info!("Authentication successful");
            }
            Err(e) => {
                warn!("Authentication response could not be parsed: {e}");
                self.reset_tokens();
            }
        }
    }

    fn reset_tokens(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.x_change_password_token = None;
        self.token_obtained_at = None;
    }

    /// Reads the product version from the `about` endpoint and derives the API version
    ///
    /// The detected version is stored on the connection when `apply` is true.
    ///
    /// # Errors
    ///
    /// * `RemoteStatus` on a non-success response
    /// * `Json` when the body has no `version`
    /// * `InvalidInput` when the product version cannot be mapped
    pub async fn detect_api_version(&mut self, apply: bool) -> ShResult<ApiVersion> {
        let response = self.execute(ApiRequest::get("about").anonymous()).await?;
        response.error_for_status()?;
        let about: AboutResponse = response.json()?;
        let detected = ApiVersion::from_product_version(&about.version)?;
        info!(
            "SigningHub {} serves API v{}",
            about.version, detected
        );
        if apply {
            self.api_version = detected;
        }
        Ok(detected)
    }

    pub(crate) fn require_api_version(&self, minimum: ApiVersion, operation: &str) -> ShResult<()> {
        if self.api_version < minimum {
            return Err(AppError::InvalidInput(format!(
                "{operation} requires API version {minimum} or newer, connection uses {}",
                self.api_version
            )));
        }
        Ok(())
    }
}
