/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::connection::Connection;
use crate::application::interfaces::settings::SettingsService;
use crate::error::{AppError, ShResult};
use crate::model::http::ApiResponse;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

/// Body of `GET settings/profile`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralProfile {
    /// General information
    pub general: GeneralSection,
    /// Security settings
    pub security: SecuritySection,
    /// Locale settings
    pub locale: LocaleSection,
    /// Enterprise affiliation
    pub enterprise: EnterpriseSection,
}

/// `general` block of [`GeneralProfile`]
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSection {
    /// Email of the user
    pub user_email: String,
    /// Display name
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub user_name: Option<String>,
    /// Job title
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub job_title: Option<String>,
    /// Company name
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub company_name: Option<String>,
    /// Mobile number
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub mobile_number: Option<String>,
    /// Enterprise role name
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub enterprise_role: Option<String>,
    /// Registration authority user id
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub ra_userid: Option<String>,
    /// National id
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub user_national_id: Option<String>,
}

/// `security` block of [`GeneralProfile`]
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecuritySection {
    /// Security question
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub question: Option<String>,
}

/// `locale` block of [`GeneralProfile`]
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleSection {
    /// Country code
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub country: Option<String>,
    /// Time zone
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub timezone: Option<String>,
    /// Language code
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub language: Option<String>,
}

/// `enterprise` block of [`GeneralProfile`]
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnterpriseSection {
    /// Name of the enterprise
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub enterprise_name: Option<String>,
    /// Display name of the enterprise owner
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub owner: Option<String>,
    /// Email of the enterprise owner
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub owner_email: Option<String>,
    /// Mobile number of the enterprise
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub mobile_number: Option<String>,
}

/// SigningHub enterprise a user belongs to
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize)]
pub struct Enterprise {
    /// Name of the enterprise
    pub name: Option<String>,
    /// Display name of the owner
    pub owner_name: Option<String>,
    /// Email of the owner
    pub owner_email: Option<String>,
}

impl From<&EnterpriseSection> for Enterprise {
    fn from(section: &EnterpriseSection) -> Self {
        Self {
            name: section.enterprise_name.clone(),
            owner_name: section.owner.clone(),
            owner_email: section.owner_email.clone(),
        }
    }
}

/// A SigningHub identity
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize)]
pub struct User {
    email: String,
    name: Option<String>,
    job_title: Option<String>,
    company_name: Option<String>,
    mobile_number: Option<String>,
    enterprise_role: Option<String>,
    ra_user_id: Option<String>,
    national_id: Option<String>,
    security_question: Option<String>,
    country: Option<String>,
    timezone: Option<String>,
    language: Option<String>,
    enterprise: Option<Enterprise>,
    enterprise_owner: Option<Box<User>>,
    enterprise_owner_email: Option<String>,
    enterprise_mobile_number: Option<String>,
}

impl User {
    /// User known only by email and optional display name
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the email is empty
    pub fn new(email: impl Into<String>, name: Option<String>) -> ShResult<Self> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(AppError::InvalidInput("user email cannot be empty".to_string()));
        }
        Ok(Self {
            email,
            name,
            ..Self::default()
        })
    }

    /// User hydrated from a general profile payload
    pub fn from_general_profile(json: &Value) -> ShResult<Self> {
        let mut user = Self::default();
        user.set_general_profile_information(json)?;
        Ok(user)
    }

    /// Replaces every profile attribute with the content of a general profile payload
    ///
    /// The user is left untouched when the payload does not have the expected shape.
    pub fn set_general_profile_information(&mut self, json: &Value) -> ShResult<()> {
        let profile = GeneralProfile::deserialize(json)
            .map_err(|e| AppError::Deserialization(format!("general profile: {e}")))?;

        let enterprise_owner = match &profile.enterprise.owner_email {
            Some(email) if !email.is_empty() => Some(Box::new(User {
                email: email.clone(),
                name: profile.enterprise.owner.clone(),
                ..User::default()
            })),
            _ => None,
        };

        *self = User {
            email: profile.general.user_email,
            name: profile.general.user_name,
            job_title: profile.general.job_title,
            company_name: profile.general.company_name,
            mobile_number: profile.general.mobile_number,
            enterprise_role: profile.general.enterprise_role,
            ra_user_id: profile.general.ra_userid,
            national_id: profile.general.user_national_id,
            security_question: profile.security.question,
            country: profile.locale.country,
            timezone: profile.locale.timezone,
            language: profile.locale.language,
            enterprise: Some(Enterprise::from(&profile.enterprise)),
            enterprise_owner,
            enterprise_owner_email: profile.enterprise.owner_email,
            enterprise_mobile_number: profile.enterprise.mobile_number,
        };
        Ok(())
    }

    /// Fetches the profile of the authenticated user and hydrates this user from it
    ///
    /// # Errors
    ///
    /// * `RemoteStatus` on a non-success response, the user is left unchanged
    /// * `Json` / `Deserialization` when the body is not a general profile
    pub async fn fetch_general_profile_information(
        &mut self,
        connection: &Connection,
    ) -> ShResult<ApiResponse> {
        let response = connection.get_general_profile_information().await?;
        if let Err(e) = response.error_for_status() {
            warn!("General profile fetch failed: {e}");
            return Err(e);
        }
        let json: Value = response.json()?;
        self.set_general_profile_information(&json)?;
        info!("Profile of {} loaded", self.email);
        Ok(response)
    }

    /// Email
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Job title
    #[must_use]
    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }

    /// Company name
    #[must_use]
    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }

    /// Mobile number
    #[must_use]
    pub fn mobile_number(&self) -> Option<&str> {
        self.mobile_number.as_deref()
    }

    /// Enterprise role
    #[must_use]
    pub fn enterprise_role(&self) -> Option<&str> {
        self.enterprise_role.as_deref()
    }

    /// Registration authority user id
    #[must_use]
    pub fn ra_user_id(&self) -> Option<&str> {
        self.ra_user_id.as_deref()
    }

    /// National id
    #[must_use]
    pub fn national_id(&self) -> Option<&str> {
        self.national_id.as_deref()
    }

    /// Security question
    #[must_use]
    pub fn security_question(&self) -> Option<&str> {
        self.security_question.as_deref()
    }

    /// Country
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Time zone
    #[must_use]
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// Language
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Enterprise affiliation
    #[must_use]
    pub fn enterprise(&self) -> Option<&Enterprise> {
        self.enterprise.as_ref()
    }

    /// Owner of the enterprise
    #[must_use]
    pub fn enterprise_owner(&self) -> Option<&User> {
        self.enterprise_owner.as_deref()
    }

    /// Email of the enterprise owner
    #[must_use]
    pub fn enterprise_owner_email(&self) -> Option<&str> {
        self.enterprise_owner_email.as_deref()
    }

    /// Mobile number of the enterprise
    #[must_use]
    pub fn enterprise_mobile_number(&self) -> Option<&str> {
        self.enterprise_mobile_number.as_deref()
    }
}
