use crate::error::ShResult;
use crate::model::http::ApiResponse;
use crate::model::requests::{
    PlaceholderRequest, UpdatePlaceholderOptions, UpdateWorkflowDetailsOptions,
    UpdateWorkflowGroupOptions, UpdateWorkflowRecipientOptions, WorkflowAuthenticationUpdate, WorkflowGroupRequest, WorkflowPermissionsUpdate,
    WorkflowRemindersUpdate, WorkflowUserRequest,
};
use async_trait::async_trait;

/// Interface for the workflow endpoints of a package
///
/// Recipients are addressed by their `order` in the workflow.
#[async_trait]
pub trait WorkflowService: Send + Sync {
    /// Gets the workflow details of a package
    async fn get_workflow_details(&self, package_id: i64) -> ShResult<ApiResponse>;

    /// Updates the workflow settings of a package
    async fn update_workflow_details(
        &self,
        package_id: i64,
        options: &UpdateWorkflowDetailsOptions,
    ) -> ShResult<ApiResponse>;

    /// Gets the workflow history
    async fn get_workflow_history(&self, package_id: i64) -> ShResult<ApiResponse>;

    /// Gets one entry of the workflow history
    async fn get_workflow_history_details(
        &self,
        package_id: i64,
        log_id: i64,
        base64: bool,
    ) -> ShResult<ApiResponse>;

    /// Gets the certificate stored with a workflow history entry
    async fn get_certificate_saved_in_workflow_history(
        &self,
        package_id: i64,
        log_id: i64,
        encryption_key: &str,
    ) -> ShResult<ApiResponse>;

    /// Gets the process evidence report
    async fn get_process_evidence_report(&self, package_id: i64) -> ShResult<ApiResponse>;

    /// Runs the post processing of a package again
    async fn update_post_processing(&self, package_id: i64) -> ShResult<ApiResponse>;

    /// Adds users to the workflow
    async fn add_users_to_workflow(
        &self,
        package_id: i64,
        users: &[WorkflowUserRequest],
    ) -> ShResult<ApiResponse>;

    /// Updates the recipient at `order`
    async fn update_workflow_user(
        &self,
        package_id: i64,
        order: u32,
        options: &UpdateWorkflowRecipientOptions,
    ) -> ShResult<ApiResponse>;

    /// Adds contact groups to the workflow
    async fn add_groups_to_workflow(
        &self,
        package_id: i64,
        groups: &[WorkflowGroupRequest],
    ) -> ShResult<ApiResponse>;

    /// Updates the group recipient at `order`
    async fn update_workflow_group(
        &self,
        package_id: i64,
        order: u32,
        options: &UpdateWorkflowGroupOptions,
    ) -> ShResult<ApiResponse>;

    /// Adds placeholders to the workflow
    async fn add_placeholder_to_workflow(
        &self,
        package_id: i64,
        placeholders: &[PlaceholderRequest],
    ) -> ShResult<ApiResponse>;

    /// Updates the placeholder at `order`
    async fn update_placeholder(
        &self,
        package_id: i64,
        order: u32,
        options: &UpdatePlaceholderOptions,
    ) -> ShResult<ApiResponse>;

    /// Lists the workflow recipients
    async fn get_workflow_users(&self, package_id: i64) -> ShResult<ApiResponse>;

    /// Moves a recipient to another position
    async fn update_workflow_users_order(
        &self,
        package_id: i64,
        old_order: u32,
        new_order: u32,
    ) -> ShResult<ApiResponse>;

    /// Gets the permissions of a recipient
    async fn get_workflow_user_permissions(&self, package_id: i64, order: u32)
    -> ShResult<ApiResponse>;

    /// Updates the permissions of a recipient
    async fn update_workflow_user_permissions(
        &self,
        package_id: i64,
        order: u32,
        permissions: &WorkflowPermissionsUpdate,
    ) -> ShResult<ApiResponse>;

    /// Gets the document opening authentication of a recipient
    async fn get_workflow_user_authentication(
        &self,
        package_id: i64,
        order: u32,
    ) -> ShResult<ApiResponse>;

    /// Updates the document opening authentication of a recipient
    async fn update_workflow_user_authentication(
        &self,
        package_id: i64,
        order: u32,
        authentication: &WorkflowAuthenticationUpdate,
    ) -> ShResult<ApiResponse>;

    /// Removes a recipient from the workflow
    async fn delete_workflow_user(&self, package_id: i64, order: u32) -> ShResult<ApiResponse>;

    /// Requests the OTP protecting a document
    async fn open_document_via_otp(&self, package_id: i64, order: u32) -> ShResult<ApiResponse>;

    /// Opens a password protected document
    async fn open_document_via_password(
        &self,
        package_id: i64,
        order: u32,
        password: &str,
    ) -> ShResult<ApiResponse>;

    /// Gets the reminder settings of a recipient
    async fn get_workflow_reminders(&self, package_id: i64, order: u32) -> ShResult<ApiResponse>;

    /// Updates the reminder settings of a recipient
    async fn update_workflow_reminders(
        &self,
        package_id: i64,
        order: u32,
        reminders: &WorkflowRemindersUpdate,
    ) -> ShResult<ApiResponse>;
}
