/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

use crate::application::connection::{ApiRequest, Connection};
use crate::application::interfaces::settings::SettingsService;
use crate::application::services::types::{base64_path, with_listing};
use crate::constants::HEADER_X_BASE64;
use crate::error::ShResult;
use crate::model::http::ApiResponse;
use crate::model::requests::{
    AppearanceUpdate, DelegationSettingsUpdate, GroupRequest, ListingOptions, SignatureDevice,
    SignatureMetadataUpdate, UpdateGeneralProfileOptions,
};
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

/// Paged listing under `settings/`, page size first
fn settings_listing(
    resource: &str,
    records_per_page: u32,
    page_number: u32,
    options: &ListingOptions,
) -> ApiRequest {
    let path = format!("settings/{resource}/{records_per_page}/{page_number}");
    with_listing(ApiRequest::get(path), options)
}

fn appearance_path(segment: &str) -> String {
    format!("settings/signatures/appearance/{segment}")
}

#[async_trait]
impl SettingsService for Connection {
    async fn get_general_profile_information(&self) -> ShResult<ApiResponse> {
        debug!("Getting general profile information");
        self.execute(ApiRequest::get("settings/profile")).await
    }

    async fn update_general_profile_information(
        &self,
        options: &UpdateGeneralProfileOptions,
    ) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::put("settings/profile/general").json(options)?)
            .await
    }

    async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> ShResult<ApiResponse> {
        info!("Changing password");
        let request = ApiRequest::put("settings/profile/password").json(&json!({
            "user_old_password": old_password,
            "user_new_password": new_password,
        }))?;
        self.execute(request).await
    }

    async fn get_profile_picture(&self, base64: bool) -> ShResult<ApiResponse> {
        let path = base64_path("settings/profile/general/photo".to_string(), base64);
        self.execute(ApiRequest::get(path)).await
    }

    async fn update_profile_picture(&self, photo_base64: &str) -> ShResult<ApiResponse> {
        let request = ApiRequest::put("settings/profile/general/photo/base64")
            .json(&json!({ "photo": photo_base64 }))?;
        self.execute(request).await
    }

    async fn update_security_settings(
        &self,
        password: &str,
        security_question: &str,
        security_answer: &str,
    ) -> ShResult<ApiResponse> {
        info!("Updating security settings");
        let request = ApiRequest::put("settings/profile/security").json(&json!({
            "password": password,
            "question": security_question,
            "answer": security_answer,
        }))?;
        self.execute(request).await
    }

    async fn update_locale_settings(
        &self,
        country: &str,
        timezone: &str,
        language: &str,
    ) -> ShResult<ApiResponse> {
        let request = ApiRequest::put("settings/profile/locale").json(&json!({
            "country": country,
            "timezone": timezone,
            "language": language,
        }))?;
        self.execute(request).await
    }

    async fn get_signature_settings(&self, base64: bool) -> ShResult<ApiResponse> {
        let request = ApiRequest::get("settings/signatures").header(HEADER_X_BASE64, base64);
        self.execute(request).await
    }

    async fn get_signature_appearance(&self, signature_type: &str) -> ShResult<ApiResponse> {
        let path = appearance_path(&format!("design/{signature_type}/preview"));
        self.execute(ApiRequest::get(path)).await
    }

    async fn get_hand_signature_text(&self, device: SignatureDevice) -> ShResult<ApiResponse> {
        let path = appearance_path(&format!("hand_signature/{}/text", device.preview_segment()));
        self.execute(ApiRequest::get(path)).await
    }

    async fn get_hand_signature_upload(&self, device: SignatureDevice) -> ShResult<ApiResponse> {
        let path = appearance_path(&format!("hand_signature/{}/upload", device.preview_segment()));
        self.execute(ApiRequest::get(path)).await
    }

    async fn update_signature_appearance_design(
        &self,
        default_design: &str,
    ) -> ShResult<ApiResponse> {
        let request = ApiRequest::put(appearance_path("design"))
            .json(&json!({ "default_design": default_design }))?;
        self.execute(request).await
    }

    async fn update_signature_settings_metadata(
        &self,
        metadata: &SignatureMetadataUpdate,
    ) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::put("settings/signatures/metadata").json(metadata)?)
            .await
    }

    async fn update_hand_signature(
        &self,
        device: SignatureDevice,
        appearance: &AppearanceUpdate,
    ) -> ShResult<ApiResponse> {
        let path = appearance_path(device.appearance_segment());
        self.execute(ApiRequest::put(path).json(appearance)?).await
    }

    async fn get_initials_for_upload_option(&self) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get(appearance_path("initials/upload")))
            .await
    }

    async fn get_initials_for_text_option(&self) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get(appearance_path("initials/text")))
            .await
    }

    async fn update_initials_appearance(
        &self,
        appearance: &AppearanceUpdate,
    ) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::put(appearance_path("initials")).json(appearance)?)
            .await
    }

    async fn get_signature_delegation_settings(&self) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get("settings/delegate")).await
    }

    async fn update_signature_delegation_settings(
        &self,
        delegation: &DelegationSettingsUpdate,
    ) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::put("settings/delegate").json(delegation)?)
            .await
    }

    async fn add_contact(&self, user_email: &str, user_name: &str) -> ShResult<ApiResponse> {
        let request = ApiRequest::post("settings/contacts")
            .json(&json!({ "user_email": user_email, "user_name": user_name }))?;
        self.execute(request).await
    }

    async fn get_contacts(
        &self,
        records_per_page: u32,
        page_number: u32,
        options: &ListingOptions,
    ) -> ShResult<ApiResponse> {
        self.execute(settings_listing("contacts", records_per_page, page_number, options))
            .await
    }

    async fn get_groups(
        &self,
        records_per_page: u32,
        page_number: u32,
        options: &ListingOptions,
    ) -> ShResult<ApiResponse> {
        self.execute(settings_listing("groups", records_per_page, page_number, options))
            .await
    }

    async fn get_library_documents(
        &self,
        records_per_page: u32,
        page_number: u32,
        options: &ListingOptions,
    ) -> ShResult<ApiResponse> {
        self.execute(settings_listing("library", records_per_page, page_number, options))
            .await
    }

    async fn get_templates(
        &self,
        records_per_page: u32,
        page_number: u32,
        options: &ListingOptions,
    ) -> ShResult<ApiResponse> {
        self.execute(settings_listing("templates", records_per_page, page_number, options))
            .await
    }

    async fn reset_email_notifications(&self) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::put("settings/notifications/email/reset"))
            .await
    }

    async fn get_personal_group(&self, group_id: i64) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get(format!("settings/groups/{group_id}")))
            .await
    }

    async fn add_personal_group(&self, group: &GroupRequest) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::post("settings/groups").json(group)?)
            .await
    }

    async fn update_personal_group(
        &self,
        group_id: i64,
        group: &GroupRequest,
    ) -> ShResult<ApiResponse> {
        let request = ApiRequest::put(format!("settings/groups/{group_id}")).json(group)?;
        self.execute(request).await
    }

    async fn delete_personal_group(&self, group_id: i64) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::delete(format!("settings/groups/{group_id}")))
            .await
    }
}
