/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

use crate::application::connection::{ApiRequest, Connection};
use crate::application::interfaces::preparation::PreparationService;
use crate::constants::HEADER_X_OTP;
use crate::error::{AppError, ShResult};
use crate::model::api_version::ApiVersion;
use crate::model::http::ApiResponse;
use crate::model::requests::{
    AutoplaceRequest, ChoiceField, ChoiceFieldUpdate, ElectronicSignatureField, FieldPlacement,
    FieldUpdate, FillFormFieldsRequest, ReasonRequest, SignDocumentRequest, TextboxField,
    TextboxFieldUpdate,
};
use async_trait::async_trait;
use serde_json::json;
use tracing::info;

fn document_path(package_id: i64, document_id: i64) -> String {
    format!("packages/{package_id}/documents/{document_id}")
}

fn fields_path(package_id: i64, document_id: i64, kind: &str) -> String {
    format!("{}/fields/{kind}", document_path(package_id, document_id))
}

fn reject_radio_group(radio_group_name: Option<&str>) -> ShResult<()> {
    match radio_group_name {
        Some(_) => Err(AppError::InvalidInput(
            "radio_group_name cannot be set on a check box".to_string(),
        )),
        None => Ok(()),
    }
}

#[async_trait]
impl PreparationService for Connection {
    async fn get_document_fields(
        &self,
        package_id: i64,
        document_id: i64,
        page_number: u32,
    ) -> ShResult<ApiResponse> {
        let path = fields_path(package_id, document_id, &page_number.to_string());
        self.execute(ApiRequest::get(path)).await
    }

    async fn assign_document_field(
        &self,
        package_id: i64,
        document_id: i64,
        field_name: &str,
        order: u32,
    ) -> ShResult<ApiResponse> {
        let body = json!([{ "field_name": field_name, "order": order }]);
        let path = fields_path(package_id, document_id, "assign");
        self.execute(ApiRequest::put(path).json(&body)?).await
    }

    async fn add_signature_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &FieldPlacement,
    ) -> ShResult<ApiResponse> {
        self.require_api_version(ApiVersion::V4, "add_signature_field")?;
        let path = fields_path(package_id, document_id, "signature");
        self.execute(ApiRequest::post(path).json(field)?).await
    }

    async fn add_digital_signature_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &FieldPlacement,
    ) -> ShResult<ApiResponse> {
        let path = fields_path(package_id, document_id, "digital_signature");
        self.execute(ApiRequest::post(path).json(field)?).await
    }

    async fn add_electronic_signature_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &ElectronicSignatureField,
    ) -> ShResult<ApiResponse> {
        let path = fields_path(package_id, document_id, "electronic_signature");
        self.execute(ApiRequest::post(path).json(field)?).await
    }

    async fn add_initials_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &FieldPlacement,
    ) -> ShResult<ApiResponse> {
        let path = fields_path(package_id, document_id, "initials");
        self.execute(ApiRequest::post(path).json(field)?).await
    }

    async fn add_in_person_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &FieldPlacement,
    ) -> ShResult<ApiResponse> {
        let path = fields_path(package_id, document_id, "in_person_signature");
        self.execute(ApiRequest::post(path).json(field)?).await
    }

    async fn add_textbox_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &TextboxField,
    ) -> ShResult<ApiResponse> {
        let path = fields_path(package_id, document_id, "text");
        self.execute(ApiRequest::post(path).json(field)?).await
    }

    async fn add_radiobox_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &ChoiceField,
    ) -> ShResult<ApiResponse> {
        let path = fields_path(package_id, document_id, "radio");
        self.execute(ApiRequest::post(path).json(field)?).await
    }

    async fn add_checkbox_field(
        &self,
        package_id: i64,
        document_id: i64,
        field: &ChoiceField,
    ) -> ShResult<ApiResponse> {
        reject_radio_group(field.radio_group_name.as_deref())?;
        let path = fields_path(package_id, document_id, "checkbox");
        self.execute(ApiRequest::post(path).json(field)?).await
    }

    async fn autoplace_fields(
        &self,
        package_id: i64,
        document_id: i64,
        request: &AutoplaceRequest,
    ) -> ShResult<ApiResponse> {
        request.validate(self.api_version())?;
        info!(
            "Autoplacing {} fields on \"{}\" in document {}",
            request.field_type.as_str(),
            request.search_text,
            document_id
        );
        let path = fields_path(package_id, document_id, "autoplace");
        self.execute(ApiRequest::post(path).json(request)?).await
    }

    async fn update_digital_signature_field(
        &self,
        package_id: i64,
        document_id: i64,
        update: &FieldUpdate,
    ) -> ShResult<ApiResponse> {
        let path = fields_path(package_id, document_id, "digital_signature");
        self.execute(ApiRequest::put(path).json(update)?).await
    }

    async fn update_electronic_signature_field(
        &self,
        package_id: i64,
        document_id: i64,
        update: &FieldUpdate,
    ) -> ShResult<ApiResponse> {
        let path = fields_path(package_id, document_id, "electronic_signature");
        self.execute(ApiRequest::put(path).json(update)?).await
    }

    async fn update_in_person_field(
        &self,
        package_id: i64,
        document_id: i64,
        update: &FieldUpdate,
    ) -> ShResult<ApiResponse> {
        let path = fields_path(package_id, document_id, "in_person_signature");
        self.execute(ApiRequest::put(path).json(update)?).await
    }

    async fn update_initials_field(
        &self,
        package_id: i64,
        document_id: i64,
        update: &FieldUpdate,
    ) -> ShResult<ApiResponse> {
        let path = fields_path(package_id, document_id, "initials");
        self.execute(ApiRequest::put(path).json(update)?).await
    }

    async fn update_textbox_field(
        &self,
        package_id: i64,
        document_id: i64,
        update: &TextboxFieldUpdate,
    ) -> ShResult<ApiResponse> {
        let path = fields_path(package_id, document_id, "text");
        self.execute(ApiRequest::put(path).json(update)?).await
    }

    async fn update_radiobox_field(
        &self,
        package_id: i64,
        document_id: i64,
        update: &ChoiceFieldUpdate,
    ) -> ShResult<ApiResponse> {
        let path = fields_path(package_id, document_id, "radio");
        self.execute(ApiRequest::put(path).json(update)?).await
    }

    async fn update_checkbox_field(
        &self,
        package_id: i64,
        document_id: i64,
        update: &ChoiceFieldUpdate,
    ) -> ShResult<ApiResponse> {
        reject_radio_group(update.radio_group_name.as_deref())?;
        let path = fields_path(package_id, document_id, "checkbox");
        self.execute(ApiRequest::put(path).json(update)?).await
    }

    async fn delete_document_field(
        &self,
        package_id: i64,
        document_id: i64,
        field_name: &str,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/fields", document_path(package_id, document_id));
        let request = ApiRequest::delete(path).json(&json!({ "field_name": field_name }))?;
        self.execute(request).await
    }

    async fn signer_authentication_via_otp(
        &self,
        package_id: i64,
        document_id: i64,
        field_name: &str,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/otp", document_path(package_id, document_id));
        let request = ApiRequest::post(path).json(&json!({ "field_name": field_name }))?;
        self.execute(request).await
    }

    async fn fill_initials(
        &self,
        package_id: i64,
        document_id: i64,
        field_name: &str,
        image_base64: &str,
        apply_to_all: Option<bool>,
    ) -> ShResult<ApiResponse> {
        let mut body = json!({ "field_name": field_name, "image": image_base64 });
        if let Some(apply_to_all) = apply_to_all {
            body["apply_to_all"] = json!(apply_to_all);
        }
        let path = format!("{}/otp", document_path(package_id, document_id));
        self.execute(ApiRequest::post(path).json(&body)?).await
    }

    async fn fill_form_fields(
        &self,
        package_id: i64,
        document_id: i64,
        fields: &FillFormFieldsRequest,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/fields", document_path(package_id, document_id));
        self.execute(ApiRequest::put(path).json(fields)?).await
    }

    async fn sign_document(
        &self,
        package_id: i64,
        document_id: i64,
        signature: &SignDocumentRequest,
    ) -> ShResult<ApiResponse> {
        if self.api_version() >= ApiVersion::V4 {
            if signature.signing_server.is_none() {
                return Err(AppError::MissingField("signing_server".to_string()));
            }
            if signature.signing_capacity.is_none() {
                return Err(AppError::MissingField("signing_capacity".to_string()));
            }
        }
        info!(
            "Signing field {} of document {} in package {}",
            signature.field_name, document_id, package_id
        );
        let path = format!("{}/sign", document_path(package_id, document_id));
        let request = ApiRequest::post(path)
            .json(signature)?
            .optional_header(HEADER_X_OTP, signature.otp.as_deref());
        self.execute(request).await
    }

    async fn decline_document(
        &self,
        package_id: i64,
        reason: &ReasonRequest,
    ) -> ShResult<ApiResponse> {
        info!("Declining package {}", package_id);
        let request = ApiRequest::post(format!("packages/{package_id}/decline")).json(reason)?;
        self.execute(request).await
    }

    async fn approve_document(
        &self,
        package_id: i64,
        reason: &ReasonRequest,
    ) -> ShResult<ApiResponse> {
        info!("Approving package {}", package_id);
        let request = ApiRequest::post(format!("packages/{package_id}/approve")).json(reason)?;
        self.execute(request).await
    }

    async fn submit_document(&self, package_id: i64) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::post(format!("packages/{package_id}/submit")))
            .await
    }

    async fn recall_document(&self, package_id: i64) -> ShResult<ApiResponse> {
        info!("Recalling package {}", package_id);
        self.execute(ApiRequest::delete(format!("packages/{package_id}/workflow")))
            .await
    }

    async fn finish_processing(&self, package_id: i64) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::post(format!("packages/{package_id}/finish")))
            .await
    }

    async fn authorization_signing_request_status(
        &self,
        package_id: i64,
        document_id: i64,
        field_name: &str,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/field/status", document_path(package_id, document_id));
        let request = ApiRequest::post(path).json(&json!({ "field_name": field_name }))?;
        self.execute(request).await
    }
}
