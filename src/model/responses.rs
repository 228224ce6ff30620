/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Token payload returned by the `/authenticate` endpoint
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticateResponse {
    /// Bearer token for subsequent calls
    pub access_token: String,
    /// Token used for the refresh grant
    pub refresh_token: String,
    /// Token type, usually "bearer"
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the access token in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Installation information returned by the unauthenticated `about` endpoint
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutResponse {
    /// The name configured for the SigningHub installation
    #[serde(default)]
    pub installation_name: Option<String>,
    /// Exact product version, e.g. `7.7.9.0`
    pub version: String,
    /// Full build number
    #[serde(default)]
    pub build: Option<String>,
    /// Copyright statement
    #[serde(default)]
    pub copyright: Option<String>,
}
