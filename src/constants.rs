/// User agent string used in HTTP requests to identify this client to the SigningHub API
pub const USER_AGENT: &str = "signinghub-client/0.2.0";
/// Default timeout in seconds for a single REST request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Path of the OAuth token endpoint; it is not prefixed with the API version
pub const AUTHENTICATE_PATH: &str = "authenticate";
/// Grant type used for username/password authentication
pub const GRANT_TYPE_PASSWORD: &str = "password";
/// Grant type used for refresh token authentication
pub const GRANT_TYPE_REFRESH_TOKEN: &str = "refresh_token";
/// First SigningHub product version served by API v4 (major, minor, patch)
pub const API_V4_MIN_PRODUCT_VERSION: (u32, u32, u32) = (7, 7, 9);

/// Identification of the source application of an uploaded document
pub const HEADER_X_SOURCE: &str = "x-source";
/// Name of an uploaded document
pub const HEADER_X_FILE_NAME: &str = "x-file-name";
/// Asks the service to convert an uploaded document to PDF
pub const HEADER_X_CONVERT_DOCUMENT: &str = "x-convert-document";
/// Free text filter applied by listing endpoints
pub const HEADER_X_SEARCH_TEXT: &str = "x-search-text";
/// Restricts listing endpoints to enterprise-wide records
pub const HEADER_X_ENTERPRISE: &str = "x-enterprise";
/// Requests or announces base64 encoded binary payloads
pub const HEADER_X_BASE64: &str = "x-base64";
/// Document opening password
pub const HEADER_X_PASSWORD: &str = "x-password";
/// One time password used as second factor
pub const HEADER_X_OTP: &str = "x-otp";
/// Response-only header carrying a change password token after authentication
pub const HEADER_X_CHANGE_PASSWORD: &str = "x-change-password";

/// Default value of the `x-source` header on uploads
pub const DEFAULT_DOCUMENT_SOURCE: &str = "API";
