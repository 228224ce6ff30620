/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::utils::config::{get_env_non_empty, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Client and user credentials for a SigningHub installation
pub struct Credentials {
    /// OAuth client id of the integration
    pub client_id: Option<String>,
    /// OAuth client secret of the integration
    pub client_secret: Option<String>,
    /// Email of the SigningHub user
    pub username: Option<String>,
    /// Password of the SigningHub user
    pub password: Option<String>,
    /// Optional scope, the email of a user to act on behalf of
    pub scope: Option<String>,
    /// Access token obtained earlier, reused without authenticating again
    pub access_token: Option<String>,
    /// Refresh token obtained earlier
    pub refresh_token: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the SigningHub API, e.g. `https://api.signinghub.com`
    pub url: String,
    /// Optional port appended to the URL
    pub port: Option<u16>,
    /// Base URL of the administration console
    pub admin_url: Option<String>,
    /// Port of the administration console
    pub admin_port: Option<u16>,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the SigningHub client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// API version to target, 3 or 4
    pub api_version: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// Values are read from the process environment, after loading a `.env` file when one is
    /// present. Missing credentials are logged but do not abort: they are only required once an
    /// authentication call is made.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let url = get_env_or_default("SIGNINGHUB_URL", String::from("https://api.signinghub.com"));
        let credentials = Credentials {
            client_id: get_env_non_empty("SIGNINGHUB_CLIENT_ID"),
            client_secret: get_env_non_empty("SIGNINGHUB_CLIENT_SECRET"),
            username: get_env_non_empty("SIGNINGHUB_USERNAME"),
            password: get_env_non_empty("SIGNINGHUB_PASSWORD"),
            scope: get_env_non_empty("SIGNINGHUB_SCOPE"),
            access_token: get_env_non_empty("SIGNINGHUB_ACCESS_TOKEN"),
            refresh_token: get_env_non_empty("SIGNINGHUB_REFRESH_TOKEN"),
        };

        if credentials.client_id.is_none() {
            error!("SIGNINGHUB_CLIENT_ID not found in environment variables or .env file");
        }
        if credentials.client_secret.is_none() {
            error!("SIGNINGHUB_CLIENT_SECRET not found in environment variables or .env file");
        }
        if credentials.username.is_none() && credentials.access_token.is_none() {
            error!("SIGNINGHUB_USERNAME not found in environment variables or .env file");
        }

        Config {
            credentials,
            rest_api: RestApiConfig {
                url,
                port: get_env_or_none("SIGNINGHUB_PORT"),
                admin_url: get_env_non_empty("SIGNINGHUB_ADMIN_URL"),
                admin_port: get_env_or_none("SIGNINGHUB_ADMIN_PORT"),
                timeout: get_env_or_default("SIGNINGHUB_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            api_version: get_env_or_default("SIGNINGHUB_API_VERSION", 4),
        }
    }
}
