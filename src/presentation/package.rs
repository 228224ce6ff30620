/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::connection::Connection;
use crate::application::interfaces::package::PackageService;
use crate::application::interfaces::workflow::WorkflowService;
use crate::error::{AppError, ShResult};
use crate::model::http::ApiResponse;
use crate::presentation::document::Document;
use crate::presentation::recipient::{Recipient, RoleBuckets};
use crate::presentation::user::User;
use crate::presentation::workflow::{WorkflowDetails, WorkflowUsers};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

/// Workflow status of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PackageStatus {
    /// Not shared yet
    Draft,
    /// Waiting for recipients
    Pending,
    /// Signed
    Signed,
    /// Declined by a recipient
    Declined,
    /// Being processed by the recipients
    InProgress,
    /// Edited by a recipient
    Edited,
    /// Reviewed by a recipient
    Reviewed,
    /// Every recipient is done
    Completed,
    /// Any status this client does not know about
    #[serde(other)]
    Unknown,
}

/// A document package and its workflow
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize)]
pub struct Package {
    id: Option<i64>,
    name: Option<String>,
    owner: Option<User>,
    owner_name: Option<String>,
    status: Option<PackageStatus>,
    folder: Option<String>,
    next_signer: Option<String>,
    next_signer_email: Vec<String>,
    uploaded_on: Option<String>,
    modified_on: Option<String>,
    workflow_type: Option<String>,
    workflow_mode: Option<String>,
    continue_on_decline: Option<bool>,
    message: Option<String>,
    read_only: Option<bool>,
    post_process: Value,
    documents: Vec<Document>,
    signers: Vec<Recipient>,
    reviewers: Vec<Recipient>,
    carbon_copy: Vec<Recipient>,
    users: Vec<Recipient>,
}

fn validate_id(id: i64) -> ShResult<i64> {
    if id <= 0 {
        return Err(AppError::InvalidInput(format!(
            "package id should be a positive integer, got {id}"
        )));
    }
    Ok(id)
}

impl Package {
    /// Package known only by identifier
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `id` is not positive
    pub fn new(id: i64) -> ShResult<Self> {
        Ok(Self {
            id: Some(validate_id(id)?),
            ..Self::default()
        })
    }

    /// Package identified by a textual id, e.g. read from user input
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `id` is not a positive integer
    pub fn from_id_str(id: &str) -> ShResult<Self> {
        let parsed = id.trim().parse::<i64>().map_err(|_| {
            AppError::InvalidInput(format!("package id should be an integer, got {id:?}"))
        })?;
        Self::new(parsed)
    }

    /// Package hydrated from a workflow details payload
    pub fn from_workflow_details(json: &Value) -> ShResult<Self> {
        let mut package = Self::default();
        package.set_workflow_details(json)?;
        Ok(package)
    }

    /// Replaces the whole state with the content of a workflow details payload
    ///
    /// Documents and recipients are rebuilt from scratch. The package is left untouched when the
    /// payload does not have the expected shape.
    ///
    /// A workflow entry is either a user (email), a group (group name) or a placeholder (neither).
    /// An entry carrying both an email and a group name is ambiguous: the whole payload is
    /// rejected with `Deserialization` instead of flagging the recipient as both kinds.
    pub fn set_workflow_details(&mut self, json: &Value) -> ShResult<()> {
        let details = WorkflowDetails::deserialize(json)
            .map_err(|e| AppError::Deserialization(format!("workflow details: {e}")))?;
        let buckets = RoleBuckets::partition(&details.users)?;

        let owner = match &details.package_owner {
            Some(email) if !email.is_empty() => {
                Some(User::new(email.clone(), details.owner_name.clone())?)
            }
            _ => None,
        };
        let documents = details
            .documents
            .iter()
            .map(|document| Document::from_details(details.package_id, document))
            .collect();

        *self = Package {
            id: Some(details.package_id),
            name: details.package_name,
            owner,
            owner_name: details.owner_name,
            status: details.package_status,
            folder: details.folder,
            next_signer: details.next_signer,
            next_signer_email: details.next_signer_email,
            uploaded_on: details.uploaded_on,
            modified_on: details.modified_on,
            workflow_type: details.workflow.workflow_type,
            workflow_mode: details.workflow.workflow_mode,
            continue_on_decline: details.workflow.continue_on_decline,
            message: details.workflow.message,
            read_only: details.workflow.read_only,
            post_process: details.workflow.post_process,
            documents,
            signers: buckets.signers,
            reviewers: buckets.reviewers,
            carbon_copy: buckets.carbon_copy,
            users: buckets.users,
        };
        Ok(())
    }

    /// Replaces the recipients with the content of a workflow users payload
    pub fn set_workflow_users(&mut self, json: &Value) -> ShResult<()> {
        let users = WorkflowUsers::deserialize(json)
            .map_err(|e| AppError::Deserialization(format!("workflow users: {e}")))?
            .into_users();
        let buckets = RoleBuckets::partition(&users)?;
        self.signers = buckets.signers;
        self.reviewers = buckets.reviewers;
        self.carbon_copy = buckets.carbon_copy;
        self.users = buckets.users;
        Ok(())
    }

    fn require_id(&self) -> ShResult<i64> {
        let id = self
            .id
            .ok_or_else(|| AppError::MissingField("package id".to_string()))?;
        validate_id(id)
    }

    /// Fetches the workflow details of this package and hydrates from them
    ///
    /// # Errors
    ///
    /// * `MissingField` / `InvalidInput` when no valid identifier is set, before any call
    /// * `RemoteStatus` on a non-success response, the package is left unchanged
    /// * `EmptyResponse` when the service answers with an empty document
    /// * `Json` / `Deserialization` when the body is not a workflow details document
    pub async fn fetch_workflow_details(&mut self, connection: &Connection) -> ShResult<ApiResponse> {
        let id = self.require_id()?;
        let response = connection.get_workflow_details(id).await?;
        if let Err(e) = response.error_for_status() {
            warn!("Workflow details of package {id} could not be fetched: {e}");
            return Err(e);
        }
        if response.bytes().iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::EmptyResponse(format!(
                "workflow details of package {id}"
            )));
        }
        let json: Value = response.json()?;
        if json.is_null() || json.as_object().is_some_and(|map| map.is_empty()) {
            return Err(AppError::EmptyResponse(format!(
                "workflow details of package {id}"
            )));
        }
        self.set_workflow_details(&json)?;
        info!(
            "Package {} loaded with {} documents and {} recipients",
            id,
            self.documents.len(),
            self.users.len()
        );
        Ok(response)
    }

    /// Fetches the workflow users of this package and replaces the recipients
    pub async fn fetch_workflow_users(&mut self, connection: &Connection) -> ShResult<ApiResponse> {
        let id = self.require_id()?;
        let response = connection.get_workflow_users(id).await?;
        if let Err(e) = response.error_for_status() {
            warn!("Workflow users of package {id} could not be fetched: {e}");
            return Err(e);
        }
        let json: Value = response.json()?;
        self.set_workflow_users(&json)?;
        Ok(response)
    }

    /// Shares the package with its recipients
    ///
    /// # Errors
    ///
    /// `InvalidState` unless the cached status is `DRAFT`, before any call
    pub async fn share(&self, connection: &Connection) -> ShResult<ApiResponse> {
        let id = self.require_id()?;
        if self.status != Some(PackageStatus::Draft) {
            return Err(AppError::InvalidState(format!(
                "package {id} is not a draft (status {:?}) and cannot be shared",
                self.status
            )));
        }
        connection.share_document_package(id).await
    }

    /// Identifier
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Sets the identifier of a package not hydrated yet
    pub fn set_id(&mut self, id: i64) -> ShResult<()> {
        self.id = Some(validate_id(id)?);
        Ok(())
    }

    /// Name
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Owner
    #[must_use]
    pub fn owner(&self) -> Option<&User> {
        self.owner.as_ref()
    }

    /// Display name of the owner
    #[must_use]
    pub fn owner_name(&self) -> Option<&str> {
        self.owner_name.as_deref()
    }

    /// Cached workflow status
    #[must_use]
    pub fn status(&self) -> Option<PackageStatus> {
        self.status
    }

    /// Folder
    #[must_use]
    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    /// Name of the next signer
    #[must_use]
    pub fn next_signer(&self) -> Option<&str> {
        self.next_signer.as_deref()
    }

    /// Emails of the next signers
    #[must_use]
    pub fn next_signer_email(&self) -> &[String] {
        &self.next_signer_email
    }

    /// Upload timestamp
    #[must_use]
    pub fn uploaded_on(&self) -> Option<&str> {
        self.uploaded_on.as_deref()
    }

    /// Last modification timestamp
    #[must_use]
    pub fn modified_on(&self) -> Option<&str> {
        self.modified_on.as_deref()
    }

    /// Workflow type
    #[must_use]
    pub fn workflow_type(&self) -> Option<&str> {
        self.workflow_type.as_deref()
    }

    /// Workflow mode
    #[must_use]
    pub fn workflow_mode(&self) -> Option<&str> {
        self.workflow_mode.as_deref()
    }

    /// Decline behaviour
    #[must_use]
    pub fn continue_on_decline(&self) -> Option<bool> {
        self.continue_on_decline
    }

    /// Message to the recipients
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Read only flag
    #[must_use]
    pub fn read_only(&self) -> Option<bool> {
        self.read_only
    }

    /// Post processing configuration
    #[must_use]
    pub fn post_process(&self) -> &Value {
        &self.post_process
    }

    /// Documents
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Mutable documents, to fetch their page fields
    pub fn documents_mut(&mut self) -> &mut [Document] {
        &mut self.documents
    }

    /// Document with the given identifier
    #[must_use]
    pub fn document(&self, document_id: i64) -> Option<&Document> {
        self.documents.iter().find(|d| d.id() == document_id)
    }

    /// Recipients with the signer role
    #[must_use]
    pub fn signers(&self) -> &[Recipient] {
        &self.signers
    }

    /// Recipients with the reviewer role
    #[must_use]
    pub fn reviewers(&self) -> &[Recipient] {
        &self.reviewers
    }

    /// Recipients with the carbon copy role
    #[must_use]
    pub fn carbon_copy(&self) -> &[Recipient] {
        &self.carbon_copy
    }

    /// Every workflow participant, in the order sent by the service
    #[must_use]
    pub fn users(&self) -> &[Recipient] {
        &self.users
    }
}
