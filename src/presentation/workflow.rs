/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Wire shapes of the workflow endpoints
//!
//! These structs mirror `GET packages/{id}/workflow` and `GET packages/{id}/workflow/users`
//! one to one. Every documented key is required; keys whose value may be `null` use the
//! [`nullable`](crate::presentation::serialization::nullable) helper.

use crate::presentation::package::PackageStatus;
use crate::presentation::recipient::WorkflowRole;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of the workflow details endpoint
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDetails {
    /// Package identifier
    pub package_id: i64,
    /// Package name
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub package_name: Option<String>,
    /// Email of the package owner
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub package_owner: Option<String>,
    /// Display name of the package owner
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub owner_name: Option<String>,
    /// Workflow status of the package
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub package_status: Option<PackageStatus>,
    /// Folder holding the package
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub folder: Option<String>,
    /// Name of the next signer
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub next_signer: Option<String>,
    /// Emails of the next signers
    #[serde(deserialize_with = "crate::presentation::serialization::null_as_empty_vec::deserialize")]
    pub next_signer_email: Vec<String>,
    /// Upload timestamp as sent by the service
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub uploaded_on: Option<String>,
    /// Last modification timestamp as sent by the service
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub modified_on: Option<String>,
    /// Workflow configuration
    pub workflow: WorkflowSection,
    /// Documents of the package
    pub documents: Vec<DocumentDetails>,
    /// Workflow participants
    pub users: Vec<WorkflowUser>,
}

/// `workflow` block of [`WorkflowDetails`]
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSection {
    /// "SERIAL", "PARALLEL" or "CUSTOM"
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub workflow_type: Option<String>,
    /// Whether the workflow continues after a decline
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub continue_on_decline: Option<bool>,
    /// "ONLY_ME", "ME_AND_OTHERS" or "ONLY_OTHERS"
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub workflow_mode: Option<String>,
    /// Message to the recipients
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub message: Option<String>,
    /// Whether the package is read only
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub read_only: Option<bool>,
    /// Post processing configuration, kept as sent
    pub post_process: Value,
}

/// Certify block of a document entry
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CertifyPolicy {
    /// Whether certification is enabled
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub enabled: Option<bool>,
    /// Permissions that can be selected
    pub allowed_permissions: Value,
    /// Permission selected by default
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub default_permission: Option<String>,
}

/// One entry of the `documents` list
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDetails {
    /// Document identifier
    pub document_id: i64,
    /// Document name
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub document_name: Option<String>,
    /// File type, e.g. "pdf"
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub document_type: Option<String>,
    /// Position of the document in the package
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub document_order: Option<i64>,
    /// Source application of the upload
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub document_source: Option<String>,
    /// Page height
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub document_height: Option<f64>,
    /// Page width
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub document_width: Option<f64>,
    /// Number of pages
    pub document_pages: u32,
    /// Creation timestamp
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub created_on: Option<String>,
    /// Last modification timestamp
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub modified_on: Option<String>,
    /// Form field summary, kept as sent
    pub form_fields: Value,
    /// Applied template, kept as sent
    pub template: Value,
    /// Certify policy
    pub certify: CertifyPolicy,
    /// Lock form fields after the last signature
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub lock_form_fields: Option<bool>,
    /// Whether the document is locked
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub locked: Option<bool>,
}

/// One entry of the `users` list
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowUser {
    /// Email of a user recipient
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub user_email: Option<String>,
    /// Display name
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub user_name: Option<String>,
    /// Name of a group recipient
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub group_name: Option<String>,
    /// Members of a group recipient, kept as sent
    pub group_members: Value,
    /// Role in the workflow
    pub role: WorkflowRole,
    /// Position in the workflow
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub order: Option<u32>,
    /// Signing order for "CUSTOM" workflows
    #[serde(deserialize_with = "crate::presentation::serialization::nullable::deserialize")]
    pub signing_order: Option<u32>,
    /// Placeholder name, only sent for placeholder recipients
    #[serde(default)]
    pub placeholder: Option<String>,
}

/// Body of the workflow users endpoint
///
/// Installations answer either with a bare array or with an object holding a `users` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkflowUsers {
    /// Bare array of entries
    List(Vec<WorkflowUser>),
    /// Object wrapping the entries
    Wrapped {
        /// Workflow participants
        users: Vec<WorkflowUser>,
    },
}

impl WorkflowUsers {
    /// The entries, whatever the envelope
    #[must_use]
    pub fn into_users(self) -> Vec<WorkflowUser> {
        match self {
            WorkflowUsers::List(users) | WorkflowUsers::Wrapped { users } => users,
        }
    }
}
