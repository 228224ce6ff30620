use crate::error::ShResult;
use crate::model::http::ApiResponse;
use crate::model::requests::RegisterFreeTrialOptions;
use async_trait::async_trait;

/// Interface for the account endpoints of the authenticated user
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the service agreements of the installation
    async fn get_service_agreements(&self) -> ShResult<ApiResponse>;

    /// Requests a login OTP by SMS
    ///
    /// # Arguments
    /// * `mobile_number` - Number to send the OTP to; the profile number is used when `None`
    async fn otp_login_authentication(&self, mobile_number: Option<&str>) -> ShResult<ApiResponse>;

    /// Registers a new user for a free trial
    async fn register_user_free_trial(
        &self,
        user_email: &str,
        user_name: &str,
        options: &RegisterFreeTrialOptions,
    ) -> ShResult<ApiResponse>;

    /// Gets the account of the authenticated user
    async fn get_account(&self) -> ShResult<ApiResponse>;

    /// Gets the password policy applying to the account
    async fn get_account_password_policy(&self) -> ShResult<ApiResponse>;

    /// Gets the role of the authenticated user
    async fn get_user_role(&self, base64: bool) -> ShResult<ApiResponse>;

    /// Sends the activation email again
    async fn resend_activation_email(&self, user_email: &str) -> ShResult<ApiResponse>;

    /// Starts the forgot password procedure
    async fn send_forgot_password_request(&self, user_email: &str) -> ShResult<ApiResponse>;

    /// Sets a new password after a reset
    async fn set_new_password(
        &self,
        new_password: &str,
        security_question: &str,
        security_answer: &str,
    ) -> ShResult<ApiResponse>;

    /// Gets the pending enterprise invitations
    async fn get_account_invitations(&self) -> ShResult<ApiResponse>;

    /// Accepts the invitation of an enterprise
    async fn accept_account_invitations(&self, enterprise_name: &str) -> ShResult<ApiResponse>;

    /// Rejects every pending invitation
    async fn reject_all_account_invitations(&self) -> ShResult<ApiResponse>;

    /// Gets usage statistics of the account
    async fn account_usage_statistics(&self) -> ShResult<ApiResponse>;

    /// Gets document statistics of the account
    async fn document_statistics(&self) -> ShResult<ApiResponse>;

    /// Gets a page of notifications
    async fn get_notifications(
        &self,
        records_per_page: u32,
        page_number: u32,
    ) -> ShResult<ApiResponse>;

    /// Registers a mobile device for push notifications
    async fn device_registration_for_push_notification(
        &self,
        device_token: &str,
        os_type: &str,
    ) -> ShResult<ApiResponse>;

    /// Gets a page of the activity log
    async fn get_user_activity_logs(
        &self,
        records_per_page: u32,
        page_number: u32,
    ) -> ShResult<ApiResponse>;

    /// Gets one entry of the activity log
    async fn get_user_activity_logs_details(&self, log_id: i64, base64: bool)
    -> ShResult<ApiResponse>;

    /// Links an external identity to a user
    async fn add_identity_for_a_user(
        &self,
        user_email: &str,
        provider: &str,
        name: &str,
        key: &str,
        value: &str,
    ) -> ShResult<ApiResponse>;

    /// Gets the devices registered for authorization
    async fn get_registered_devices(&self) -> ShResult<ApiResponse>;
}
