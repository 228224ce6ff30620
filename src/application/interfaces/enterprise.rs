use crate::error::ShResult;
use crate::model::http::ApiResponse;
use crate::model::requests::{
    CertificateRequest, CertificateUpdate, GroupRequest, ListingOptions, RegisterEnterpriseUserOptions,
    UpdateEnterpriseUserOptions,
};
use async_trait::async_trait;

/// Interface for the enterprise management endpoints
#[async_trait]
pub trait EnterpriseService: Send + Sync {
    /// Gets information about the installation; no token is sent
    async fn about_signinghub(&self) -> ShResult<ApiResponse>;

    /// Registers a user in the enterprise
    async fn register_enterprise_user(
        &self,
        user_email: &str,
        user_name: &str,
        options: &RegisterEnterpriseUserOptions,
    ) -> ShResult<ApiResponse>;

    /// Lists the enterprise users, filtered by `x-search-text`
    async fn get_enterprise_users(&self, options: &ListingOptions) -> ShResult<ApiResponse>;

    /// Updates an enterprise user
    async fn update_enterprise_user(
        &self,
        user_email: &str,
        options: &UpdateEnterpriseUserOptions,
    ) -> ShResult<ApiResponse>;

    /// Deletes an enterprise user
    async fn delete_enterprise_user(&self, user_email: &str) -> ShResult<ApiResponse>;

    /// Invites a user to the enterprise
    async fn invite_enterprise_user(
        &self,
        user_email: &str,
        user_name: &str,
        enterprise_role: Option<&str>,
    ) -> ShResult<ApiResponse>;

    /// Lists the pending invitations
    async fn get_enterprise_invitations(
        &self,
        page_number: u32,
        records_per_page: u32,
    ) -> ShResult<ApiResponse>;

    /// Withdraws the invitation of a user
    async fn delete_enterprise_user_invitation(&self, user_email: &str) -> ShResult<ApiResponse>;

    /// Gets the enterprise branding, images in base64
    async fn get_enterprise_branding(&self) -> ShResult<ApiResponse>;

    /// Gets any package of the enterprise
    async fn get_package(&self, package_id: i64) -> ShResult<ApiResponse>;

    /// Assigns a signing certificate to a user
    async fn add_certificate(&self, certificate: &CertificateRequest) -> ShResult<ApiResponse>;

    /// Updates a signing certificate of a user
    async fn update_certificate(
        &self,
        certificate_id: i64,
        certificate: &CertificateUpdate,
    ) -> ShResult<ApiResponse>;

    /// Removes a signing certificate from a user
    async fn delete_certificate(
        &self,
        certificate_id: i64,
        user_email: &str,
    ) -> ShResult<ApiResponse>;

    /// Gets an enterprise contact group
    async fn get_enterprise_group(&self, group_id: i64) -> ShResult<ApiResponse>;

    /// Creates an enterprise contact group
    async fn add_enterprise_group(&self, group: &GroupRequest) -> ShResult<ApiResponse>;

    /// Updates an enterprise contact group
    async fn update_enterprise_group(
        &self,
        group_id: i64,
        group: &GroupRequest,
    ) -> ShResult<ApiResponse>;

    /// Deletes an enterprise contact group
    async fn delete_enterprise_group(&self, group_id: i64) -> ShResult<ApiResponse>;

    /// Completes the workflow of a package on behalf of the remaining recipients
    async fn complete_workflow_in_the_middle(&self, package_id: i64) -> ShResult<ApiResponse>;
}
