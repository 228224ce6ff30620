use crate::error::ShResult;
use crate::model::http::ApiResponse;
use crate::model::requests::{
    AppearanceUpdate, DelegationSettingsUpdate, GroupRequest, ListingOptions, SignatureDevice,
    SignatureMetadataUpdate, UpdateGeneralProfileOptions,
};
use async_trait::async_trait;

/// Interface for the personal settings of the authenticated user
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Gets the general profile
    async fn get_general_profile_information(&self) -> ShResult<ApiResponse>;

    /// Updates the general profile
    async fn update_general_profile_information(
        &self,
        options: &UpdateGeneralProfileOptions,
    ) -> ShResult<ApiResponse>;

    /// Changes the password
    async fn change_password(&self, old_password: &str, new_password: &str)
    -> ShResult<ApiResponse>;

    /// Gets the profile picture
    async fn get_profile_picture(&self, base64: bool) -> ShResult<ApiResponse>;

    /// Replaces the profile picture with a base64 encoded image
    async fn update_profile_picture(&self, photo_base64: &str) -> ShResult<ApiResponse>;

    /// Updates the security question; the current password confirms the change
    async fn update_security_settings(
        &self,
        password: &str,
        security_question: &str,
        security_answer: &str,
    ) -> ShResult<ApiResponse>;

    /// Updates country, time zone and language
    async fn update_locale_settings(
        &self,
        country: &str,
        timezone: &str,
        language: &str,
    ) -> ShResult<ApiResponse>;

    /// Gets the signature settings
    async fn get_signature_settings(&self, base64: bool) -> ShResult<ApiResponse>;

    /// Gets a preview of a signature appearance design
    async fn get_signature_appearance(&self, signature_type: &str) -> ShResult<ApiResponse>;

    /// Gets the text hand signature of a device
    async fn get_hand_signature_text(&self, device: SignatureDevice) -> ShResult<ApiResponse>;

    /// Gets the uploaded hand signature of a device
    async fn get_hand_signature_upload(&self, device: SignatureDevice) -> ShResult<ApiResponse>;

    /// Sets the default appearance design
    async fn update_signature_appearance_design(
        &self,
        default_design: &str,
    ) -> ShResult<ApiResponse>;

    /// Updates the reason, location and contact embedded in signatures
    async fn update_signature_settings_metadata(
        &self,
        metadata: &SignatureMetadataUpdate,
    ) -> ShResult<ApiResponse>;

    /// Updates the hand signature of a device
    async fn update_hand_signature(
        &self,
        device: SignatureDevice,
        appearance: &AppearanceUpdate,
    ) -> ShResult<ApiResponse>;

    /// Gets the uploaded initials
    async fn get_initials_for_upload_option(&self) -> ShResult<ApiResponse>;

    /// Gets the text initials
    async fn get_initials_for_text_option(&self) -> ShResult<ApiResponse>;

    /// Updates the initials appearance
    async fn update_initials_appearance(&self, appearance: &AppearanceUpdate)
    -> ShResult<ApiResponse>;

    /// Gets the signature delegation settings
    async fn get_signature_delegation_settings(&self) -> ShResult<ApiResponse>;

    /// Updates the signature delegation settings
    async fn update_signature_delegation_settings(
        &self,
        delegation: &DelegationSettingsUpdate,
    ) -> ShResult<ApiResponse>;

    /// Adds a personal contact
    async fn add_contact(&self, user_email: &str, user_name: &str) -> ShResult<ApiResponse>;

    /// Lists the contacts
    async fn get_contacts(
        &self,
        records_per_page: u32,
        page_number: u32,
        options: &ListingOptions,
    ) -> ShResult<ApiResponse>;

    /// Lists the contact groups
    async fn get_groups(
        &self,
        records_per_page: u32,
        page_number: u32,
        options: &ListingOptions,
    ) -> ShResult<ApiResponse>;

    /// Lists the library documents
    async fn get_library_documents(
        &self,
        records_per_page: u32,
        page_number: u32,
        options: &ListingOptions,
    ) -> ShResult<ApiResponse>;

    /// Lists the workflow templates
    async fn get_templates(
        &self,
        records_per_page: u32,
        page_number: u32,
        options: &ListingOptions,
    ) -> ShResult<ApiResponse>;

    /// Restores the default email notification settings
    async fn reset_email_notifications(&self) -> ShResult<ApiResponse>;

    /// Gets a personal contact group
    async fn get_personal_group(&self, group_id: i64) -> ShResult<ApiResponse>;

    /// Creates a personal contact group
    async fn add_personal_group(&self, group: &GroupRequest) -> ShResult<ApiResponse>;

    /// Updates a personal contact group
    async fn update_personal_group(&self, group_id: i64, group: &GroupRequest)
    -> ShResult<ApiResponse>;

    /// Deletes a personal contact group
    async fn delete_personal_group(&self, group_id: i64) -> ShResult<ApiResponse>;
}
