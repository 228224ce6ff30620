/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

use crate::application::connection::{ApiRequest, Connection};
use crate::application::interfaces::workflow::WorkflowService;
use crate::constants::HEADER_X_BASE64;
use crate::error::ShResult;
use crate::model::http::ApiResponse;
use crate::model::requests::{
    PlaceholderRequest, UpdatePlaceholderOptions, UpdateWorkflowDetailsOptions,
    UpdateWorkflowGroupOptions, UpdateWorkflowRecipientOptions, WorkflowAuthenticationUpdate, WorkflowGroupRequest, WorkflowPermissionsUpdate,
    WorkflowRemindersUpdate, WorkflowUserRequest,
};
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

fn workflow_path(package_id: i64) -> String {
    format!("packages/{package_id}/workflow")
}

fn recipient_path(package_id: i64, order: u32) -> String {
    format!("packages/{package_id}/workflow/{order}")
}

/// Group and placeholder recipients are updated through the enterprise scope
fn enterprise_recipient_path(package_id: i64, order: u32) -> String {
    format!("enterprise/{}", recipient_path(package_id, order))
}

#[async_trait]
impl WorkflowService for Connection {
    async fn get_workflow_details(&self, package_id: i64) -> ShResult<ApiResponse> {
        debug!("Getting workflow details of package {}", package_id);
        self.execute(ApiRequest::get(workflow_path(package_id)))
            .await
    }

    async fn update_workflow_details(
        &self,
        package_id: i64,
        options: &UpdateWorkflowDetailsOptions,
    ) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::put(workflow_path(package_id)).json(options)?)
            .await
    }

    async fn get_workflow_history(&self, package_id: i64) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get(format!("packages/{package_id}/log")))
            .await
    }

    async fn get_workflow_history_details(
        &self,
        package_id: i64,
        log_id: i64,
        base64: bool,
    ) -> ShResult<ApiResponse> {
        let request = ApiRequest::get(format!("packages/{package_id}/log/{log_id}/details"))
            .header(HEADER_X_BASE64, base64);
        self.execute(request).await
    }

    async fn get_certificate_saved_in_workflow_history(
        &self,
        package_id: i64,
        log_id: i64,
        encryption_key: &str,
    ) -> ShResult<ApiResponse> {
        let path = format!("packages/{package_id}/log/{log_id}/details/{encryption_key}");
        self.execute(ApiRequest::get(path)).await
    }

    async fn get_process_evidence_report(&self, package_id: i64) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get(format!("packages/{package_id}/report")))
            .await
    }

    async fn update_post_processing(&self, package_id: i64) -> ShResult<ApiResponse> {
        // the service exposes this operation as a GET
        let path = format!("{}/post_process", workflow_path(package_id));
        self.execute(ApiRequest::get(path)).await
    }

    async fn add_users_to_workflow(
        &self,
        package_id: i64,
        users: &[WorkflowUserRequest],
    ) -> ShResult<ApiResponse> {
        info!("Adding {} users to package {}", users.len(), package_id);
        let path = format!("{}/users", workflow_path(package_id));
        self.execute(ApiRequest::post(path).json(users)?).await
    }

    async fn update_workflow_user(
        &self,
        package_id: i64,
        order: u32,
        options: &UpdateWorkflowRecipientOptions,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/user", recipient_path(package_id, order));
        self.execute(ApiRequest::put(path).json(options)?).await
    }

    async fn add_groups_to_workflow(
        &self,
        package_id: i64,
        groups: &[WorkflowGroupRequest],
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/groups", workflow_path(package_id));
        self.execute(ApiRequest::post(path).json(groups)?).await
    }

    async fn update_workflow_group(
        &self,
        package_id: i64,
        order: u32,
        options: &UpdateWorkflowGroupOptions,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/group", enterprise_recipient_path(package_id, order));
        self.execute(ApiRequest::put(path).json(options)?).await
    }

    async fn add_placeholder_to_workflow(
        &self,
        package_id: i64,
        placeholders: &[PlaceholderRequest],
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/placeholder", workflow_path(package_id));
        self.execute(ApiRequest::post(path).json(placeholders)?)
            .await
    }

    async fn update_placeholder(
        &self,
        package_id: i64,
        order: u32,
        options: &UpdatePlaceholderOptions,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/placeholder", enterprise_recipient_path(package_id, order));
        self.execute(ApiRequest::put(path).json(options)?).await
    }

    async fn get_workflow_users(&self, package_id: i64) -> ShResult<ApiResponse> {
        let path = format!("{}/users", workflow_path(package_id));
        self.execute(ApiRequest::get(path)).await
    }

    async fn update_workflow_users_order(
        &self,
        package_id: i64,
        old_order: u32,
        new_order: u32,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/reorder", recipient_path(package_id, old_order));
        let request = ApiRequest::put(path).json(&json!({ "order": new_order }))?;
        self.execute(request).await
    }

    async fn get_workflow_user_permissions(
        &self,
        package_id: i64,
        order: u32,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/permissions", recipient_path(package_id, order));
        self.execute(ApiRequest::get(path)).await
    }

    async fn update_workflow_user_permissions(
        &self,
        package_id: i64,
        order: u32,
        permissions: &WorkflowPermissionsUpdate,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/permissions", recipient_path(package_id, order));
        self.execute(ApiRequest::put(path).json(permissions)?)
            .await
    }

    async fn get_workflow_user_authentication(
        &self,
        package_id: i64,
        order: u32,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/authentication", recipient_path(package_id, order));
        self.execute(ApiRequest::get(path)).await
    }

    async fn update_workflow_user_authentication(
        &self,
        package_id: i64,
        order: u32,
        authentication: &WorkflowAuthenticationUpdate,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/authentication", recipient_path(package_id, order));
        self.execute(ApiRequest::put(path).json(authentication)?)
            .await
    }

    async fn delete_workflow_user(&self, package_id: i64, order: u32) -> ShResult<ApiResponse> {
        info!("Removing recipient {} from package {}", order, package_id);
        self.execute(ApiRequest::delete(recipient_path(package_id, order)))
            .await
    }

    async fn open_document_via_otp(&self, package_id: i64, order: u32) -> ShResult<ApiResponse> {
        let path = format!("{}/authentication/otp", recipient_path(package_id, order));
        self.execute(ApiRequest::post(path)).await
    }

    async fn open_document_via_password(
        &self,
        package_id: i64,
        order: u32,
        password: &str,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/authentication/password", recipient_path(package_id, order));
        let request = ApiRequest::post(path).json(&json!({ "password": password }))?;
        self.execute(request).await
    }

    async fn get_workflow_reminders(&self, package_id: i64, order: u32) -> ShResult<ApiResponse> {
        let path = format!("{}/reminders", recipient_path(package_id, order));
        self.execute(ApiRequest::get(path)).await
    }

    async fn update_workflow_reminders(
        &self,
        package_id: i64,
        order: u32,
        reminders: &WorkflowRemindersUpdate,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/reminders", recipient_path(package_id, order));
        self.execute(ApiRequest::put(path).json(reminders)?).await
    }
}
