use crate::error::ShResult;
use crate::model::http::ApiResponse;
use crate::model::requests::{
    AutoplaceRequest, ChoiceField, ChoiceFieldUpdate, ElectronicSignatureField, FieldPlacement,
    FieldUpdate, FillFormFieldsRequest, ReasonRequest, SignDocumentRequest, TextboxField,
    TextboxFieldUpdate,
};
use async_trait::async_trait;

/// Interface for document preparation and signing
#[async_trait]
pub trait PreparationService: Send + Sync {
    /// Gets the fields placed on one page (1-based)
    async fn get_document_fields(
        &self,
        package_id: i64,
        document_id: i64,
        page_number: u32,
    ) -> ShResult<ApiResponse>;

    /// Assigns an existing field to the recipient at `order`
    async fn assign_document_field(
        &self,
        package_id: i64,
        document_id: i64,
        field_name: &str,
        order: u32,
    ) -> ShResult<ApiResponse>;

    /// Adds a signature field; API v4 only
    async fn add_signature_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &FieldPlacement,
    ) -> ShResult<ApiResponse>;

    /// Adds a digital signature field, the API v3 counterpart of a signature field
    async fn add_digital_signature_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &FieldPlacement,
    ) -> ShResult<ApiResponse>;

    /// Adds an electronic signature field
    async fn add_electronic_signature_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &ElectronicSignatureField,
    ) -> ShResult<ApiResponse>;

    /// Adds an initials field
    async fn add_initials_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &FieldPlacement,
    ) -> ShResult<ApiResponse>;

    /// Adds an in-person signature field
    async fn add_in_person_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &FieldPlacement,
    ) -> ShResult<ApiResponse>;

    /// Adds a text box
    async fn add_textbox_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &TextboxField,
    ) -> ShResult<ApiResponse>;

    /// Adds a radio button
    async fn add_radiobox_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &ChoiceField,
    ) -> ShResult<ApiResponse>;

    /// Adds a check box; a radio group is rejected
    async fn add_checkbox_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &ChoiceField,
    ) -> ShResult<ApiResponse>;

    /// Places fields next to every occurrence of a text
    ///
    /// The request is validated with [`AutoplaceRequest::validate`] before it is sent.
    async fn autoplace_fields(
        &self,
        package_id: i64,
        document_id: i64,
        request: &AutoplaceRequest,
    ) -> ShResult<ApiResponse>;

    /// Updates a digital signature field
    async fn update_digital_signature_field(
        &self,
        package_id: i64,
        document_id: i64,
        update: &FieldUpdate,
    ) -> ShResult<ApiResponse>;

    /// Updates an electronic signature field
    async fn update_electronic_signature_field(
        &self,
        package_id: i64,
        document_id: i64,
        update: &FieldUpdate,
    ) -> ShResult<ApiResponse>;

    /// Updates an in-person signature field
    async fn update_in_person_field(
        &self,
        package_id: i64,
        document_id: i64,
        update: &FieldUpdate,
    ) -> ShResult<ApiResponse>;

    /// Updates an initials field
    async fn update_initials_field(
        &self,
        package_id: i64,
        document_id: i64,
        update: &FieldUpdate,
    ) -> ShResult<ApiResponse>;

    /// Updates a text box
    async fn update_textbox_field(
        &self,
        package_id: i64,
        document_id: i64,
        update: &TextboxFieldUpdate,
    ) -> ShResult<ApiResponse>;

    /// Updates a radio button
    async fn update_radiobox_field(
        &self,
        package_id: i64,
        document_id: i64,
        update: &ChoiceFieldUpdate,
    ) -> ShResult<ApiResponse>;

    /// Updates a check box; a radio group is rejected
    async fn update_checkbox_field(
        &self,
        package_id: i64,
        document_id: i64,
        update: &ChoiceFieldUpdate,
    ) -> ShResult<ApiResponse>;

    /// Deletes a field
    async fn delete_document_field(
        &self,
        package_id: i64,
        document_id: i64,
        field_name: &str,
    ) -> ShResult<ApiResponse>;

    /// Requests the OTP protecting a signature field
    async fn signer_authentication_via_otp(
        &self,
        package_id: i64,
        document_id: i64,
        field_name: &str,
    ) -> ShResult<ApiResponse>;

    /// Fills an initials field with a base64 image
    async fn fill_initials(
        &self,
        package_id: i64,
        document_id: i64,
        field_name: &str,
        image_base64: &str,
        apply_to_all: Option<bool>,
    ) -> ShResult<ApiResponse>;

    /// Fills form fields
    async fn fill_form_fields(
        &self,
        package_id: i64,
        document_id: i64,
        fields: &FillFormFieldsRequest,
    ) -> ShResult<ApiResponse>;

    /// Signs a signature field
    ///
    /// On API v4 the signing server and capacity are mandatory.
    async fn sign_document(
        &self,
        package_id: i64,
        document_id: i64,
        signature: &SignDocumentRequest,
    ) -> ShResult<ApiResponse>;

    /// Declines a package
    async fn decline_document(&self, package_id: i64, reason: &ReasonRequest)
    -> ShResult<ApiResponse>;

    /// Approves a package as reviewer
    async fn approve_document(&self, package_id: i64, reason: &ReasonRequest)
    -> ShResult<ApiResponse>;

    /// Submits a package as editor
    async fn submit_document(&self, package_id: i64) -> ShResult<ApiResponse>;

    /// Recalls a shared package
    async fn recall_document(&self, package_id: i64) -> ShResult<ApiResponse>;

    /// Finishes the processing of a package
    async fn finish_processing(&self, package_id: i64) -> ShResult<ApiResponse>;

    /// Gets the status of a remote authorization signing request
    async fn authorization_signing_request_status(
        &self,
        package_id: i64,
        document_id: i64,
        field_name: &str,
    ) -> ShResult<ApiResponse>;
}
