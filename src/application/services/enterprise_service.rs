/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

use crate::application::connection::{ApiRequest, Connection};
use crate::application::interfaces::enterprise::EnterpriseService;
use crate::application::services::types::{UserBody, with_listing};
use crate::constants::HEADER_X_BASE64;
use crate::error::ShResult;
use crate::model::http::ApiResponse;
use crate::model::requests::{
    CertificateRequest, CertificateUpdate, GroupRequest, ListingOptions, RegisterEnterpriseUserOptions,
    UpdateEnterpriseUserOptions,
};
use async_trait::async_trait;
use serde_json::json;
use tracing::info;

#[async_trait]
impl EnterpriseService for Connection {
    async fn about_signinghub(&self) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get("about").anonymous()).await
    }

    async fn register_enterprise_user(
        &self,
        user_email: &str,
        user_name: &str,
        options: &RegisterEnterpriseUserOptions,
    ) -> ShResult<ApiResponse> {
        info!("Registering enterprise user {}", user_email);
        let body = UserBody::new(user_email, Some(user_name), options);
        self.execute(ApiRequest::post("enterprise/users").json(&body)?)
            .await
    }

    async fn get_enterprise_users(&self, options: &ListingOptions) -> ShResult<ApiResponse> {
        let request = with_listing(ApiRequest::get("enterprise/users"), options);
        self.execute(request).await
    }

    async fn update_enterprise_user(
        &self,
        user_email: &str,
        options: &UpdateEnterpriseUserOptions,
    ) -> ShResult<ApiResponse> {
        let body = UserBody::new(user_email, None, options);
        self.execute(ApiRequest::put("enterprise/users").json(&body)?)
            .await
    }

    async fn delete_enterprise_user(&self, user_email: &str) -> ShResult<ApiResponse> {
        info!("Deleting enterprise user {}", user_email);
        let request =
            ApiRequest::delete("enterprise/users").json(&json!({ "user_email": user_email }))?;
        self.execute(request).await
    }

    async fn invite_enterprise_user(
        &self,
        user_email: &str,
        user_name: &str,
        enterprise_role: Option<&str>,
    ) -> ShResult<ApiResponse> {
        let mut body = json!({ "user_email": user_email, "user_name": user_name });
        if let Some(role) = enterprise_role {
            body["enterprise_role"] = json!(role);
        }
        self.execute(ApiRequest::post("enterprise/invitations").json(&body)?)
            .await
    }

    async fn get_enterprise_invitations(
        &self,
        page_number: u32,
        records_per_page: u32,
    ) -> ShResult<ApiResponse> {
        let path = format!("enterprise/invitations/{page_number}/{records_per_page}");
        self.execute(ApiRequest::get(path)).await
    }

    async fn delete_enterprise_user_invitation(&self, user_email: &str) -> ShResult<ApiResponse> {
        let request = ApiRequest::delete("enterprise/invitations")
            .json(&json!({ "user_email": user_email }))?;
        self.execute(request).await
    }

    async fn get_enterprise_branding(&self) -> ShResult<ApiResponse> {
        let request = ApiRequest::get("enterprise/branding").header(HEADER_X_BASE64, true);
        self.execute(request).await
    }

    async fn get_package(&self, package_id: i64) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get(format!("enterprise/packages/{package_id}")))
            .await
    }

    async fn add_certificate(&self, certificate: &CertificateRequest) -> ShResult<ApiResponse> {
        let request = ApiRequest::post("enterprise/signingcertificates").json(certificate)?;
        self.execute(request).await
    }

    async fn update_certificate(
        &self,
        certificate_id: i64,
        certificate: &CertificateUpdate,
    ) -> ShResult<ApiResponse> {
        info!("Updating certificate {} of {}", certificate_id, certificate.user_email);
        let request = ApiRequest::put(format!("enterprise/signingcertificates/{certificate_id}"))
            .json(certificate)?;
        self.execute(request).await
    }

    async fn delete_certificate(
        &self,
        certificate_id: i64,
        user_email: &str,
    ) -> ShResult<ApiResponse> {
        let request = ApiRequest::delete(format!("enterprise/signingcertificates/{certificate_id}"))
            .json(&json!({ "user_email": user_email }))?;
        self.execute(request).await
    }

    async fn get_enterprise_group(&self, group_id: i64) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get(format!("enterprise/groups/{group_id}")))
            .await
    }

    async fn add_enterprise_group(&self, group: &GroupRequest) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::post("enterprise/groups").json(group)?)
            .await
    }

    async fn update_enterprise_group(
        &self,
        group_id: i64,
        group: &GroupRequest,
    ) -> ShResult<ApiResponse> {
        let request = ApiRequest::put(format!("enterprise/groups/{group_id}")).json(group)?;
        self.execute(request).await
    }

    async fn delete_enterprise_group(&self, group_id: i64) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::delete(format!("enterprise/groups/{group_id}")))
            .await
    }

    async fn complete_workflow_in_the_middle(&self, package_id: i64) -> ShResult<ApiResponse> {
        info!("Completing workflow of package {}", package_id);
        let request = ApiRequest::post(format!("enterprise/packages/{package_id}/complete"));
        self.execute(request).await
    }
}
