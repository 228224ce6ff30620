/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

use crate::application::connection::{ApiRequest, Connection};
use crate::application::interfaces::account::AccountService;
use crate::application::services::types::UserBody;
use crate::constants::HEADER_X_BASE64;
use crate::error::ShResult;
use crate::model::http::ApiResponse;
use crate::model::requests::RegisterFreeTrialOptions;
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

#[async_trait]
impl AccountService for Connection {
    async fn get_service_agreements(&self) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get("terms")).await
    }

    async fn otp_login_authentication(&self, mobile_number: Option<&str>) -> ShResult<ApiResponse> {
        let body = match mobile_number {
            Some(number) => json!({ "mobile_number": number }),
            None => json!({}),
        };
        self.execute(ApiRequest::post("authentication/otp").json(&body)?)
            .await
    }

    async fn register_user_free_trial(
        &self,
        user_email: &str,
        user_name: &str,
        options: &RegisterFreeTrialOptions,
    ) -> ShResult<ApiResponse> {
        info!("Registering free trial for {}", user_email);
        let body = UserBody::new(user_email, Some(user_name), options);
        self.execute(ApiRequest::post("account").json(&body)?).await
    }

    async fn get_account(&self) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get("account")).await
    }

    async fn get_account_password_policy(&self) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get("account/password_policy"))
            .await
    }

    async fn get_user_role(&self, base64: bool) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get("account/role").header(HEADER_X_BASE64, base64))
            .await
    }

    async fn resend_activation_email(&self, user_email: &str) -> ShResult<ApiResponse> {
        let request =
            ApiRequest::post("account/activation/resend").json(&json!({ "user_email": user_email }))?;
        self.execute(request).await
    }

    async fn send_forgot_password_request(&self, user_email: &str) -> ShResult<ApiResponse> {
        let request =
            ApiRequest::post("account/password/reset").json(&json!({ "user_email": user_email }))?;
        self.execute(request).await
    }

    async fn set_new_password(
        &self,
        new_password: &str,
        security_question: &str,
        security_answer: &str,
    ) -> ShResult<ApiResponse> {
        let request = ApiRequest::put("account/password/new").json(&json!({
            "password": new_password,
            "security_question": security_question,
            "security_answer": security_answer,
        }))?;
        self.execute(request).await
    }

    async fn get_account_invitations(&self) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get("account/invitations")).await
    }

    async fn accept_account_invitations(&self, enterprise_name: &str) -> ShResult<ApiResponse> {
        let request = ApiRequest::put("account/invitations")
            .json(&json!({ "enterprise_name": enterprise_name }))?;
        self.execute(request).await
    }

    async fn reject_all_account_invitations(&self) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::delete("account/invitations"))
            .await
    }

    async fn account_usage_statistics(&self) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get("account/statistics/usage"))
            .await
    }

    async fn document_statistics(&self) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get("account/statistics/documents"))
            .await
    }

    async fn get_notifications(
        &self,
        records_per_page: u32,
        page_number: u32,
    ) -> ShResult<ApiResponse> {
        debug!("Getting notifications page {}", page_number);
        let path = format!("account/notifications/{records_per_page}/{page_number}");
        self.execute(ApiRequest::get(path)).await
    }

    async fn device_registration_for_push_notification(
        &self,
        device_token: &str,
        os_type: &str,
    ) -> ShResult<ApiResponse> {
        let request = ApiRequest::post("users/notifications/devices").json(&json!({
            "device_token": device_token,
            "os_type": os_type,
        }))?;
        self.execute(request).await
    }

    async fn get_user_activity_logs(
        &self,
        records_per_page: u32,
        page_number: u32,
    ) -> ShResult<ApiResponse> {
        // the service expects the page before its size here
        let path = format!("account/log/{page_number}/{records_per_page}");
        self.execute(ApiRequest::get(path)).await
    }

    async fn get_user_activity_logs_details(
        &self,
        log_id: i64,
        base64: bool,
    ) -> ShResult<ApiResponse> {
        let request =
            ApiRequest::get(format!("account/log/{log_id}/details")).header(HEADER_X_BASE64, base64);
        self.execute(request).await
    }

    async fn add_identity_for_a_user(
        &self,
        user_email: &str,
        provider: &str,
        name: &str,
        key: &str,
        value: &str,
    ) -> ShResult<ApiResponse> {
        let request = ApiRequest::post("account/identity").json(&json!({
            "user_email": user_email,
            "provider": provider,
            "name": name,
            "key": key,
            "value": value,
        }))?;
        self.execute(request).await
    }

    async fn get_registered_devices(&self) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get("authorization/devices"))
            .await
    }
}
