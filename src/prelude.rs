/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Marketplace Client Prelude
//!
//! Imports the types most callers need in one line:
//!
//! ```rust
//! use marketplace_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8001");
//! let store = SessionStore::in_memory();
//! assert!(store.read().unwrap().is_none());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{Config, FilesConfig, RestApiConfig, SessionConfig, UploadConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// CLIENT AND PIPELINE
// ============================================================================

pub use crate::application::client::{ApiClient, ApiClientBuilder};
pub use crate::application::interceptors::{
    AuthInterceptor, RequestInterceptor, ResponseInterceptor, SessionInterceptor,
};
pub use crate::application::upload::{
    ProgressCallback, UploadChannel, UploadFile, UploadForm, percent_completed,
};
pub use crate::model::http::{ApiResponse, RequestDescriptor};
pub use crate::model::policy::{translate_detail, with_fallback};

// ============================================================================
// SESSION
// ============================================================================

pub use crate::session::events::{SessionEvent, SessionEvents, SubscriptionId};
pub use crate::session::store::{FileStore, KeyValueStore, MemoryStore, SessionStore};
pub use crate::session::user::CurrentUser;

// ============================================================================
// SERVICES
// ============================================================================

pub use crate::application::services::*;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::requests::*;
pub use crate::model::responses::*;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::config::{get_env_or_default, get_env_or_none};
pub use crate::utils::logger::setup_logger;
