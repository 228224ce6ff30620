/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Deserialization helpers for SigningHub payloads
//!
//! A field using one of these helpers through `deserialize_with` (and without
//! `#[serde(default)]`) must be present in the payload, even when its value is `null`.

use serde::{Deserialize, Deserializer};

/// Key must be present; `null` becomes `None`
pub mod nullable {
    use super::*;

    /// Deserializes a required key whose value may be `null`
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer)
    }
}

/// Key must be present; `null` becomes an empty vector
pub mod null_as_empty_vec {
    use super::*;

    /// Deserializes a required list whose value may be `null`
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let opt = Option::<Vec<T>>::deserialize(deserializer)?;
        Ok(opt.unwrap_or_default())
    }
}
