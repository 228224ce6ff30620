/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

use crate::application::connection::{ApiRequest, Connection};
use crate::application::interfaces::package::PackageService;
use crate::application::services::types::{base64_path, with_access, with_listing};
use crate::constants::{
    HEADER_X_BASE64, HEADER_X_CONVERT_DOCUMENT, HEADER_X_FILE_NAME, HEADER_X_SOURCE,
};
use crate::error::{AppError, ShResult};
use crate::model::http::{ApiResponse, HeaderProfile};
use crate::model::requests::{
    CertifyPolicyUpdate, DocumentAccessOptions, ListingOptions, UploadOptions,
};
use async_trait::async_trait;
use serde_json::json;
use std::path::Path;
use tracing::{debug, info};

fn document_path(package_id: i64, document_id: i64) -> String {
    format!("packages/{package_id}/documents/{document_id}")
}

#[async_trait]
impl PackageService for Connection {
    async fn add_package(
        &self,
        package_name: &str,
        workflow_mode: Option<&str>,
    ) -> ShResult<ApiResponse> {
        info!("Creating package {}", package_name);
        let mut body = json!({ "package_name": package_name });
        if let Some(mode) = workflow_mode {
            body["workflow_mode"] = json!(mode);
        }
        self.execute(ApiRequest::post("packages").json(&body)?)
            .await
    }

    async fn rename_package(&self, package_id: i64, new_name: &str) -> ShResult<ApiResponse> {
        let request = ApiRequest::put(format!("packages/{package_id}"))
            .json(&json!({ "package_name": new_name }))?;
        self.execute(request).await
    }

    async fn upload_document(
        &self,
        package_id: i64,
        path: &Path,
        options: &UploadOptions,
    ) -> ShResult<ApiResponse> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                AppError::InvalidInput(format!("path has no file name: {}", path.display()))
            })?;
        let content = tokio::fs::read(path).await?;
        debug!("Read {} bytes from {}", content.len(), path.display());
        self.upload_document_bytes(package_id, &file_name, content, options)
            .await
    }

    async fn upload_document_bytes(
        &self,
        package_id: i64,
        file_name: &str,
        content: Vec<u8>,
        options: &UploadOptions,
    ) -> ShResult<ApiResponse> {
        if file_name.is_empty() {
            return Err(AppError::InvalidInput("file name cannot be empty".to_string()));
        }
        info!("Uploading {} into package {}", file_name, package_id);
        let request = ApiRequest::post(format!("packages/{package_id}/documents"))
            .binary(content)
            .header(HEADER_X_FILE_NAME, file_name)
            .header(HEADER_X_SOURCE, &options.source)
            .optional_header(HEADER_X_CONVERT_DOCUMENT, options.convert_document);
        self.execute(request).await
    }

    async fn apply_workflow_template(
        &self,
        package_id: i64,
        document_id: i64,
        template_name: &str,
        apply_to_all: Option<bool>,
    ) -> ShResult<ApiResponse> {
        let mut body = json!({ "template_name": template_name });
        if let Some(apply_to_all) = apply_to_all {
            body["apply_to_all"] = json!(apply_to_all);
        }
        let path = format!("{}/template", document_path(package_id, document_id));
        self.execute(ApiRequest::post(path).json(&body)?).await
    }

    async fn share_document_package(&self, package_id: i64) -> ShResult<ApiResponse> {
        info!("Sharing package {}", package_id);
        self.execute(ApiRequest::post(format!("packages/{package_id}/workflow")))
            .await
    }

    async fn change_document_package_owner(
        &self,
        package_id: i64,
        new_owner: &str,
    ) -> ShResult<ApiResponse> {
        let request = ApiRequest::put(format!("packages/{package_id}/owner"))
            .json(&json!({ "owner": new_owner }))?;
        self.execute(request).await
    }

    async fn get_document_details(
        &self,
        package_id: i64,
        document_id: i64,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/details", document_path(package_id, document_id));
        self.execute(ApiRequest::get(path)).await
    }

    async fn get_document_image(
        &self,
        package_id: i64,
        document_id: i64,
        page_number: u32,
        resolution: &str,
        base64: bool,
        access: &DocumentAccessOptions,
    ) -> ShResult<ApiResponse> {
        let path = format!(
            "{}/images/{page_number}/{resolution}",
            document_path(package_id, document_id)
        );
        let request = ApiRequest::get(base64_path(path, base64)).profile(HeaderProfile::Png);
        self.execute(with_access(request, access)).await
    }

    async fn download_document(
        &self,
        package_id: i64,
        document_id: i64,
        base64: bool,
        access: &DocumentAccessOptions,
    ) -> ShResult<ApiResponse> {
        let path = base64_path(document_path(package_id, document_id), base64);
        let request = ApiRequest::get(path).profile(HeaderProfile::OctetStream);
        self.execute(with_access(request, access)).await
    }

    async fn rename_document(
        &self,
        package_id: i64,
        document_id: i64,
        new_name: &str,
    ) -> ShResult<ApiResponse> {
        let request = ApiRequest::put(document_path(package_id, document_id))
            .json(&json!({ "document_name": new_name }))?;
        self.execute(request).await
    }

    async fn delete_document(&self, package_id: i64, document_id: i64) -> ShResult<ApiResponse> {
        info!("Deleting document {} of package {}", document_id, package_id);
        self.execute(ApiRequest::delete(document_path(package_id, document_id)))
            .await
    }

    async fn get_certify_policy_for_document(
        &self,
        package_id: i64,
        document_id: i64,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/certify", document_path(package_id, document_id));
        self.execute(ApiRequest::get(path)).await
    }

    async fn update_certify_policy_for_document(
        &self,
        package_id: i64,
        document_id: i64,
        policy: &CertifyPolicyUpdate,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/certify", document_path(package_id, document_id));
        self.execute(ApiRequest::put(path).json(policy)?).await
    }

    async fn get_package_verification(
        &self,
        package_id: i64,
        base64: bool,
    ) -> ShResult<ApiResponse> {
        let request = ApiRequest::get(format!("packages/{package_id}/verification"))
            .header(HEADER_X_BASE64, base64);
        self.execute(request).await
    }

    async fn get_document_verification(
        &self,
        package_id: i64,
        document_id: i64,
        base64: bool,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/verification", document_path(package_id, document_id));
        let request = ApiRequest::get(path).header(HEADER_X_BASE64, base64);
        self.execute(request).await
    }

    async fn change_document_order(
        &self,
        package_id: i64,
        document_id: i64,
        new_order: u32,
    ) -> ShResult<ApiResponse> {
        let path = format!("{}/reorder", document_path(package_id, document_id));
        let request = ApiRequest::put(path).json(&json!({ "order": new_order }))?;
        self.execute(request).await
    }

    async fn get_packages(
        &self,
        document_status: &str,
        page_number: u32,
        records_per_page: u32,
        options: &ListingOptions,
    ) -> ShResult<ApiResponse> {
        let path = format!("packages/{document_status}/{page_number}/{records_per_page}");
        self.execute(with_listing(ApiRequest::get(path), options))
            .await
    }

    async fn delete_package(&self, package_id: i64) -> ShResult<ApiResponse> {
        info!("Deleting package {}", package_id);
        self.execute(ApiRequest::delete(format!("packages/{package_id}")))
            .await
    }

    async fn download_package(
        &self,
        package_id: i64,
        base64: bool,
        access: &DocumentAccessOptions,
    ) -> ShResult<ApiResponse> {
        let path = base64_path(format!("packages/{package_id}"), base64);
        let request = ApiRequest::get(path).profile(HeaderProfile::OctetStream);
        self.execute(with_access(request, access)).await
    }

    async fn open_document_package(
        &self,
        package_id: i64,
        access: &DocumentAccessOptions,
    ) -> ShResult<ApiResponse> {
        let request = ApiRequest::get(format!("packages/{package_id}/open"));
        self.execute(with_access(request, access)).await
    }

    async fn close_document_package(&self, package_id: i64) -> ShResult<ApiResponse> {
        self.execute(ApiRequest::get(format!("packages/{package_id}/close")))
            .await
    }
}
