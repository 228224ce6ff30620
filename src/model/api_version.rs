/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::constants::API_V4_MIN_PRODUCT_VERSION;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version of the SigningHub REST API targeted by a connection
///
/// SigningHub releases before 7.7.9 only serve API v3; later releases serve API v4.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum ApiVersion {
    /// API v3
    V3,
    /// API v4
    #[default]
    V4,
}

impl ApiVersion {
    /// All versions accepted by the client
    pub const SUPPORTED: [ApiVersion; 2] = [ApiVersion::V3, ApiVersion::V4];

    /// Numeric form used in the `/v{n}/` path prefix
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            ApiVersion::V3 => 3,
            ApiVersion::V4 => 4,
        }
    }

    /// Derives the API version from a SigningHub product version such as `7.7.9.0`
    ///
    /// A four-part version at or above 7.7.9 maps to v4 and anything lower to v3. Shorter
    /// version strings belong to the newer release scheme and map to v4. Longer ones, or parts
    /// that are not numbers, are rejected.
    pub fn from_product_version(version: &str) -> Result<Self, AppError> {
        let parts = version
            .trim()
            .split('.')
            .map(|part| {
                part.parse::<u32>().map_err(|_| {
                    AppError::InvalidInput(format!("invalid SigningHub version: {version}"))
                })
            })
            .collect::<Result<Vec<u32>, AppError>>()?;

        match parts.len() {
            4 => {
                if (parts[0], parts[1], parts[2]) >= API_V4_MIN_PRODUCT_VERSION {
                    Ok(ApiVersion::V4)
                } else {
                    Ok(ApiVersion::V3)
                }
            }
            1..=3 => Ok(ApiVersion::V4),
            _ => Err(AppError::InvalidInput(format!(
                "unknown length of version number: {version}"
            ))),
        }
    }
}

impl TryFrom<u8> for ApiVersion {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(ApiVersion::V3),
            4 => Ok(ApiVersion::V4),
            other => Err(AppError::InvalidInput(format!(
                "API version should be one of [3, 4], got {other}"
            ))),
        }
    }
}

impl From<ApiVersion> for u8 {
    fn from(version: ApiVersion) -> Self {
        version.as_u8()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
