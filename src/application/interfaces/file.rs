use crate::application::upload::{ProgressCallback, UploadFile};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for document storage
///
/// Every failure is reported as [`AppError::Domain`] whose message is the
/// backend `detail` or an operation specific default.
#[async_trait]
pub trait FileService: Send + Sync {
    /// Uploads a document into `folder`
    ///
    /// # Arguments
    /// * `file` - Document content and name
    /// * `folder` - Destination folder (e.g. `listings`, `deals`, `profile`)
    /// * `is_public` - Whether the stored document is publicly readable
    /// * `progress` - Optional callback receiving the upload percentage
    async fn upload_document(
        &self,
        file: UploadFile,
        folder: &str,
        is_public: bool,
        progress: Option<ProgressCallback>,
    ) -> Result<Value, AppError>;

    /// Resolves the URL of a stored document
    ///
    /// `bucket` defaults to the configured bucket.
    async fn get_document_url(
        &self,
        path: &str,
        bucket: Option<&str>,
        is_public: bool,
    ) -> Result<String, AppError>;

    /// Deletes a stored document
    async fn delete_document(&self, path: &str, bucket: Option<&str>) -> Result<Value, AppError>;

    /// Lists the documents stored in `folder`
    async fn list_documents(&self, folder: &str, bucket: Option<&str>) -> Result<Value, AppError>;
}
