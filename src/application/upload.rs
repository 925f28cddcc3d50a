/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Multipart upload channel with progress reporting
//!
//! Uploads bypass the interceptor pipeline of [`ApiClient`](crate::application::client::ApiClient):
//! the channel attaches the session token itself and returns the raw
//! response without interpreting its status. When a progress callback is
//! supplied, file parts are streamed in chunks and the callback receives
//! `round(loaded * 100 / total)` after each chunk is handed to the transport.

use crate::application::config::Config;
use crate::application::interceptors::attach_bearer;
use crate::error::AppError;
use crate::model::http::ApiResponse;
use crate::session::store::SessionStore;
use bytes::Bytes;
use futures_util::stream;
use reqwest::header::HeaderMap;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

/// Receives upload progress as an integer percentage in `[0, 100]`
pub type ProgressCallback = Arc<dyn Fn(u8) + Send + Sync>;

/// Percentage of `total` covered by `loaded`, rounded half up
///
/// Returns `None` when `total` is zero, which is how transports that do not
/// know the payload size report it. The result never exceeds 100.
#[must_use]
pub fn percent_completed(loaded: u64, total: u64) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let total = u128::from(total);
    let percent = (u128::from(loaded) * 200 + total) / (total * 2);
    Some(percent.min(100) as u8)
}

/// Binary content of a file part
#[derive(Clone)]
pub struct UploadFile {
    /// File name announced to the backend
    pub file_name: String,
    /// MIME type, `application/octet-stream` when unset
    pub mime_type: Option<String>,
    /// File content
    pub bytes: Bytes,
}

impl UploadFile {
    /// Creates a file part from memory
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            bytes: bytes.into(),
        }
    }

    /// Reads a file part from disk, using the path's file name
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| AppError::InvalidInput(format!("{} has no file name", path.display())))?;
        Ok(Self::new(file_name, bytes))
    }

    /// Sets the MIME type
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Size in bytes
    #[must_use]
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Whether the file is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone)]
enum FormField {
    Text { name: String, value: String },
    File { name: String, file: UploadFile },
}

/// Fields of a multipart upload, in the order they are sent
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    fields: Vec<FormField>,
}

impl UploadForm {
    /// An empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text field
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FormField::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Appends a binary field
    pub fn file(mut self, name: impl Into<String>, file: UploadFile) -> Self {
        self.fields.push(FormField::File {
            name: name.into(),
            file,
        });
        self
    }

    /// Total size of the binary fields
    #[must_use]
    pub fn file_bytes(&self) -> u64 {
        self.fields
            .iter()
            .map(|field| match field {
                FormField::File { file, .. } => file.len(),
                FormField::Text { .. } => 0,
            })
            .sum()
    }

    fn into_multipart(self, progress: Option<ProgressCallback>, chunk_size: usize) -> Result<Form, AppError> {
        let tracker = progress.map(|callback| Arc::new(ProgressTracker::new(self.file_bytes(), callback)));

        let mut form = Form::new();
        for field in self.fields {
            form = match field {
                FormField::Text { name, value } => form.text(name, value),
                FormField::File { name, file } => {
                    let len = file.len();
                    let part = match &tracker {
                        Some(tracker) => Part::stream_with_length(
                            progress_body(file.bytes, chunk_size, Arc::clone(tracker)),
                            len,
                        ),
                        None => Part::stream_with_length(Body::from(file.bytes), len),
                    };
                    let mime = file
                        .mime_type
                        .as_deref()
                        .unwrap_or("application/octet-stream");
                    form.part(name, part.file_name(file.file_name).mime_str(mime)?)
                }
            };
        }
        Ok(form)
    }
}

struct ProgressTracker {
    loaded: AtomicU64,
    total: u64,
    callback: ProgressCallback,
}

impl ProgressTracker {
    fn new(total: u64, callback: ProgressCallback) -> Self {
        Self {
            loaded: AtomicU64::new(0),
            total,
            callback,
        }
    }

    fn advance(&self, bytes: u64) {
        let loaded = self.loaded.fetch_add(bytes, Ordering::SeqCst) + bytes;
        if let Some(percent) = percent_completed(loaded, self.total) {
            (self.callback)(percent);
        }
    }
}

fn progress_body(bytes: Bytes, chunk_size: usize, tracker: Arc<ProgressTracker>) -> Body {
    let chunk_size = chunk_size.max(1);
    let chunks: Vec<Bytes> = (0..bytes.len())
        .step_by(chunk_size)
        .map(|start| bytes.slice(start..(start + chunk_size).min(bytes.len())))
        .collect();
    let chunks = chunks.into_iter().map(move |chunk| {
        tracker.advance(chunk.len() as u64);
        Ok::<Bytes, std::io::Error>(chunk)
    });
    Body::wrap_stream(stream::iter(chunks))
}

/// Request path for multipart payloads
#[derive(Clone)]
pub struct UploadChannel {
    http_client: Client,
    config: Arc<Config>,
    session: SessionStore,
}

impl UploadChannel {
    /// Creates a channel
    pub fn new(http_client: Client, config: Arc<Config>, session: SessionStore) -> Self {
        Self {
            http_client,
            config,
            session,
        }
    }

    /// POSTs `form` as `multipart/form-data` to `path`
    ///
    /// The session token is attached when present. The response is returned
    /// as-is whatever its status; only transport failures and token read
    /// failures are errors.
    pub async fn upload(
        &self,
        path: &str,
        form: UploadForm,
        progress: Option<ProgressCallback>,
    ) -> Result<ApiResponse, AppError> {
        let mut headers = HeaderMap::new();
        attach_bearer(&self.session, &mut headers)?;

        let url = self.config.url_for(path);
        info!("Uploading {} bytes to {}", form.file_bytes(), url);

        let multipart = form.into_multipart(progress, self.config.upload.chunk_size)?;
        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .multipart(multipart)
            .send()
            .await?;

        let response = ApiResponse::read(response).await?;
        debug!("Upload response status: {}", response.status);
        Ok(response)
    }
}

impl fmt::Debug for UploadChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadChannel")
            .field("base_url", &self.config.rest_api.base_url)
            .finish()
    }
}
