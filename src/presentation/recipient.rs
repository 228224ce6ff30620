/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::workflow::WorkflowUser;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of a participant in a package workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowRole {
    /// Signs the documents
    Signer,
    /// Reviews the documents
    Reviewer,
    /// May edit the documents
    Editor,
    /// Receives a copy
    CarbonCopy,
    /// Hosts an in-person signature
    InpersonHost,
    /// Any role this client does not know about
    #[serde(other)]
    Other,
}

/// Which kind of participant a [`Recipient`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipientKind {
    /// An individual user, identified by email
    User,
    /// A contact group, identified by name
    Group,
    /// A placeholder to be replaced by a real user later
    Placeholder,
}

/// A workflow participant as returned by the workflow endpoints
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize)]
pub struct Recipient {
    kind: RecipientKind,
    email: Option<String>,
    name: Option<String>,
    group_name: Option<String>,
    group_members: Value,
    placeholder: Option<String>,
    role: WorkflowRole,
    order: Option<u32>,
    signing_order: Option<u32>,
}

fn populated(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl Recipient {
    /// Individual user recipient
    pub fn user(email: impl Into<String>, name: Option<String>, role: WorkflowRole) -> Self {
        Self {
            kind: RecipientKind::User,
            email: Some(email.into()),
            name,
            group_name: None,
            group_members: Value::Null,
            placeholder: None,
            role,
            order: None,
            signing_order: None,
        }
    }

    /// Group recipient
    pub fn group(group_name: impl Into<String>, role: WorkflowRole) -> Self {
        Self {
            kind: RecipientKind::Group,
            email: None,
            name: None,
            group_name: Some(group_name.into()),
            group_members: Value::Null,
            placeholder: None,
            role,
            order: None,
            signing_order: None,
        }
    }

    /// Kind of participant
    #[must_use]
    pub fn kind(&self) -> RecipientKind {
        self.kind
    }

    /// True for an individual user
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.kind == RecipientKind::User
    }

    /// True for a contact group
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.kind == RecipientKind::Group
    }

    /// True for a placeholder
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.kind == RecipientKind::Placeholder
    }

    /// Email of a user recipient
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name of a group recipient
    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// Members of a group recipient, as sent by the service
    #[must_use]
    pub fn group_members(&self) -> &Value {
        &self.group_members
    }

    /// Placeholder name
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Role in the workflow
    #[must_use]
    pub fn role(&self) -> WorkflowRole {
        self.role
    }

    /// Position in the workflow
    #[must_use]
    pub fn order(&self) -> Option<u32> {
        self.order
    }

    /// Signing order
    #[must_use]
    pub fn signing_order(&self) -> Option<u32> {
        self.signing_order
    }
}

impl TryFrom<&WorkflowUser> for Recipient {
    type Error = AppError;

    /// Classifies a workflow entry; an entry carrying both an email and a group name is rejected
    fn try_from(entry: &WorkflowUser) -> Result<Self, Self::Error> {
        let kind = match (populated(&entry.user_email), populated(&entry.group_name)) {
            (true, false) => RecipientKind::User,
            (false, true) => RecipientKind::Group,
            (false, false) => RecipientKind::Placeholder,
            (true, true) => {
                return Err(AppError::Deserialization(format!(
                    "workflow entry at order {:?} has both a user email and a group name",
                    entry.order
                )));
            }
        };

        Ok(Self {
            kind,
            email: entry.user_email.clone().filter(|v| !v.is_empty()),
            name: entry.user_name.clone(),
            group_name: entry.group_name.clone().filter(|v| !v.is_empty()),
            group_members: entry.group_members.clone(),
            placeholder: entry.placeholder.clone(),
            role: entry.role,
            order: entry.order,
            signing_order: entry.signing_order,
        })
    }
}

/// Workflow participants split by role
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RoleBuckets {
    pub signers: Vec<Recipient>,
    pub reviewers: Vec<Recipient>,
    pub carbon_copy: Vec<Recipient>,
    pub users: Vec<Recipient>,
}

impl RoleBuckets {
    /// Builds every bucket from the raw entries; nothing is returned when one entry is invalid
    pub(crate) fn partition(entries: &[WorkflowUser]) -> Result<Self, AppError> {
        let mut buckets = RoleBuckets::default();
        for entry in entries {
            let recipient = Recipient::try_from(entry)?;
            match recipient.role {
                WorkflowRole::Signer => buckets.signers.push(recipient.clone()),
                WorkflowRole::Reviewer => buckets.reviewers.push(recipient.clone()),
                WorkflowRole::CarbonCopy => buckets.carbon_copy.push(recipient.clone()),
                _ => {}
            }
            buckets.users.push(recipient);
        }
        Ok(buckets)
    }
}
