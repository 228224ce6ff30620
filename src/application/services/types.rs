/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Request shapes shared by the service implementations

use crate::application::connection::ApiRequest;
use crate::constants::{HEADER_X_ENTERPRISE, HEADER_X_OTP, HEADER_X_PASSWORD, HEADER_X_SEARCH_TEXT};
use crate::model::requests::{DocumentAccessOptions, ListingOptions};
use serde::Serialize;

/// JSON body addressing a user by email, with the optional attributes flattened next to it
#[derive(Debug, Serialize)]
pub(crate) struct UserBody<'a, T: Serialize> {
    pub user_email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<&'a str>,
    #[serde(flatten)]
    pub options: &'a T,
}

impl<'a, T: Serialize> UserBody<'a, T> {
    pub fn new(user_email: &'a str, user_name: Option<&'a str>, options: &'a T) -> Self {
        Self {
            user_email,
            user_name,
            options,
        }
    }
}

/// Appends `/base64` when the payload is requested base64 encoded
pub(crate) fn base64_path(path: String, base64: bool) -> String {
    if base64 { format!("{path}/base64") } else { path }
}

/// Adds the `x-search-text` and `x-enterprise` headers of a listing call
pub(crate) fn with_listing(request: ApiRequest, options: &ListingOptions) -> ApiRequest {
    request
        .optional_header(HEADER_X_SEARCH_TEXT, options.search_text.as_deref())
        .optional_header(HEADER_X_ENTERPRISE, options.enterprise)
}

/// Adds the `x-password` and `x-otp` headers of a protected document
pub(crate) fn with_access(request: ApiRequest, options: &DocumentAccessOptions) -> ApiRequest {
    request
        .optional_header(HEADER_X_PASSWORD, options.password.as_deref())
        .optional_header(HEADER_X_OTP, options.otp.as_deref())
}
