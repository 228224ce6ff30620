use crate::error::ShResult;
use crate::model::http::ApiResponse;
use crate::model::requests::{
    CertifyPolicyUpdate, DocumentAccessOptions, ListingOptions, UploadOptions,
};
use async_trait::async_trait;
use std::path::Path;

/// Interface for the package and document endpoints
#[async_trait]
pub trait PackageService: Send + Sync {
    /// Creates an empty package
    ///
    /// # Arguments
    /// * `package_name` - Name of the package
    /// * `workflow_mode` - "ONLY_ME", "ME_AND_OTHERS" or "ONLY_OTHERS"; enterprise default when `None`
    async fn add_package(
        &self,
        package_name: &str,
        workflow_mode: Option<&str>,
    ) -> ShResult<ApiResponse>;

    /// Renames a package
    async fn rename_package(&self, package_id: i64, new_name: &str) -> ShResult<ApiResponse>;

    /// Uploads a file from disk into a package
    ///
    /// The file name sent in `x-file-name` is the last component of `path`.
    async fn upload_document(
        &self,
        package_id: i64,
        path: &Path,
        options: &UploadOptions,
    ) -> ShResult<ApiResponse>;

    /// Uploads an in-memory document into a package
    async fn upload_document_bytes(
        &self,
        package_id: i64,
        file_name: &str,
        content: Vec<u8>,
        options: &UploadOptions,
    ) -> ShResult<ApiResponse>;

    /// Applies a workflow template to a document
    async fn apply_workflow_template(
        &self,
        package_id: i64,
        document_id: i64,
        template_name: &str,
        apply_to_all: Option<bool>,
    ) -> ShResult<ApiResponse>;

    /// Shares a draft package with its recipients
    async fn share_document_package(&self, package_id: i64) -> ShResult<ApiResponse>;

    /// Transfers a package to another owner
    async fn change_document_package_owner(
        &self,
        package_id: i64,
        new_owner: &str,
    ) -> ShResult<ApiResponse>;

    /// Gets the details of a document
    async fn get_document_details(&self, package_id: i64, document_id: i64)
    -> ShResult<ApiResponse>;

    /// Gets a PNG image of one page
    async fn get_document_image(
        &self,
        package_id: i64,
        document_id: i64,
        page_number: u32,
        resolution: &str,
        base64: bool,
        access: &DocumentAccessOptions,
    ) -> ShResult<ApiResponse>;

    /// Downloads a document
    async fn download_document(
        &self,
        package_id: i64,
        document_id: i64,
        base64: bool,
        access: &DocumentAccessOptions,
    ) -> ShResult<ApiResponse>;

    /// Renames a document
    async fn rename_document(
        &self,
        package_id: i64,
        document_id: i64,
        new_name: &str,
    ) -> ShResult<ApiResponse>;

    /// Deletes a document
    async fn delete_document(&self, package_id: i64, document_id: i64) -> ShResult<ApiResponse>;

    /// Gets the certify policy of a document
    async fn get_certify_policy_for_document(
        &self,
        package_id: i64,
        document_id: i64,
    ) -> ShResult<ApiResponse>;

    /// Updates the certify policy of a document
    async fn update_certify_policy_for_document(
        &self,
        package_id: i64,
        document_id: i64,
        policy: &CertifyPolicyUpdate,
    ) -> ShResult<ApiResponse>;

    /// Gets the signature verification of a package
    async fn get_package_verification(&self, package_id: i64, base64: bool)
    -> ShResult<ApiResponse>;

    /// Gets the signature verification of a document
    async fn get_document_verification(
        &self,
        package_id: i64,
        document_id: i64,
        base64: bool,
    ) -> ShResult<ApiResponse>;

    /// Moves a document inside its package
    async fn change_document_order(
        &self,
        package_id: i64,
        document_id: i64,
        new_order: u32,
    ) -> ShResult<ApiResponse>;

    /// Lists packages with a given status ("ALL", "DRAFT", "PENDING", ...)
    async fn get_packages(
        &self,
        document_status: &str,
        page_number: u32,
        records_per_page: u32,
        options: &ListingOptions,
    ) -> ShResult<ApiResponse>;

    /// Deletes a package
    async fn delete_package(&self, package_id: i64) -> ShResult<ApiResponse>;

    /// Downloads every document of a package
    async fn download_package(
        &self,
        package_id: i64,
        base64: bool,
        access: &DocumentAccessOptions,
    ) -> ShResult<ApiResponse>;

    /// Opens a package, locking it for the current user
    async fn open_document_package(
        &self,
        package_id: i64,
        access: &DocumentAccessOptions,
    ) -> ShResult<ApiResponse>;

    /// Closes a package opened with [`PackageService::open_document_package`]
    async fn close_document_package(&self, package_id: i64) -> ShResult<ApiResponse>;
}
