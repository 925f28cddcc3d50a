/// Key under which the session token is persisted in the key-value store
pub const TOKEN_KEY: &str = "token";
/// Name of the process-wide logout broadcast
pub const LOGOUT_EVENT: &str = "auth:logout";
/// User agent string sent with every request to identify this client
pub const USER_AGENT: &str = "marketplace-client/0.1.0";
/// Default backend base URL when `MARKETPLACE_BACKEND_URL` is not set
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
/// Storage bucket used by the file endpoints when the caller does not name one
pub const DEFAULT_FILES_BUCKET: &str = "marketplace-files";
/// Size in bytes of each chunk streamed by the upload channel
///
/// Progress is reported once per chunk, so smaller chunks give finer grained
/// updates at the cost of more callback invocations.
pub const DEFAULT_UPLOAD_CHUNK_SIZE: usize = 64 * 1024;
/// Default currency for payment intents
pub const DEFAULT_CURRENCY: &str = "usd";
/// Default analysis requested from the integration endpoint
pub const DEFAULT_ANALYSIS_TYPE: &str = "funding_decision";

/// Fallback message when a document upload fails without a `detail`
pub const UPLOAD_DOCUMENT_FAILED: &str = "Document upload failed";
/// Fallback message when resolving a document URL fails without a `detail`
pub const GET_DOCUMENT_URL_FAILED: &str = "Failed to get document URL";
/// Fallback message when deleting a document fails without a `detail`
pub const DELETE_DOCUMENT_FAILED: &str = "Document deletion failed";
/// Fallback message when listing documents fails without a `detail`
pub const LIST_DOCUMENTS_FAILED: &str = "Failed to list documents";
/// Fallback message for payment intent creation and processing failures
pub const PAYMENT_PROCESSING_FAILED: &str = "Payment processing failed";
/// Fallback message when the payment history cannot be fetched
pub const PAYMENT_HISTORY_FAILED: &str = "Failed to get payment history";
