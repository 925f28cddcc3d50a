use crate::application::client::ApiClient;
use crate::application::services::FileService;
use crate::application::upload::{ProgressCallback, UploadFile, UploadForm};
use crate::constants::{
    DELETE_DOCUMENT_FAILED, GET_DOCUMENT_URL_FAILED, LIST_DOCUMENTS_FAILED, UPLOAD_DOCUMENT_FAILED,
};
use crate::error::AppError;
use crate::model::policy::translate_detail;
use crate::model::requests::{DocumentQuery, DocumentUrlQuery, FolderQuery};
use crate::model::responses::DocumentUrlResponse;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the document storage service
pub struct FileServiceImpl {
    client: Arc<ApiClient>,
}

impl FileServiceImpl {
    /// Creates a new instance of the file service
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn bucket(&self, bucket: Option<&str>) -> String {
        bucket
            .map(str::to_owned)
            .unwrap_or_else(|| self.client.config().files.default_bucket.clone())
    }
}

#[async_trait]
impl FileService for FileServiceImpl {
    async fn upload_document(
        &self,
        file: UploadFile,
        folder: &str,
        is_public: bool,
        progress: Option<ProgressCallback>,
    ) -> Result<Value, AppError> {
        info!("Uploading document {} to {}", file.file_name, folder);
        let form = UploadForm::new()
            .file("file", file)
            .text("folder", folder)
            .text("public", is_public.to_string());

        translate_detail(UPLOAD_DOCUMENT_FAILED, async {
            let response = self
                .client
                .upload_channel()
                .upload("/api/files/upload", form, progress)
                .await?;
            Ok::<_, AppError>(response.error_for_status()?.into_body())
        })
        .await
    }

    async fn get_document_url(
        &self,
        path: &str,
        bucket: Option<&str>,
        is_public: bool,
    ) -> Result<String, AppError> {
        let query = DocumentUrlQuery {
            path: path.to_string(),
            bucket: self.bucket(bucket),
            public: is_public,
        };
        debug!("Resolving URL of {}", path);
        translate_detail(GET_DOCUMENT_URL_FAILED, async {
            let response: DocumentUrlResponse =
                self.client.get_with_query("/api/files/url", &query).await?;
            Ok::<_, AppError>(response.url)
        })
        .await
    }

    async fn delete_document(&self, path: &str, bucket: Option<&str>) -> Result<Value, AppError> {
        let query = DocumentQuery {
            path: path.to_string(),
            bucket: self.bucket(bucket),
        };
        info!("Deleting document {}", path);
        translate_detail(
            DELETE_DOCUMENT_FAILED,
            self.client.delete_with_query("/api/files/delete", &query),
        )
        .await
    }

    async fn list_documents(&self, folder: &str, bucket: Option<&str>) -> Result<Value, AppError> {
        let query = FolderQuery {
            folder: folder.to_string(),
            bucket: self.bucket(bucket),
        };
        debug!("Listing documents in {}", folder);
        translate_detail(
            LIST_DOCUMENTS_FAILED,
            self.client.get_with_query("/api/files/list", &query),
        )
        .await
    }
}
