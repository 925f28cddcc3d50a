/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error types for the marketplace client
//!
//! Every fallible operation in the crate returns [`AppError`]. Transport
//! failures, non-success HTTP responses, translated backend failures and
//! session store failures are kept as distinct variants so call sites can
//! react to each of them without inspecting strings.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The request never produced a response (DNS, connect, timeout, body stream)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status code
    #[error("http error {status}")]
    Http {
        /// Status code returned by the backend
        status: StatusCode,
        /// Human readable `detail` field of the error body, when present
        detail: Option<String>,
        /// Raw error body (`Value::Null` when empty or not JSON)
        body: Value,
    },

    /// A backend failure translated into a caller facing message
    #[error("{0}")]
    Domain(String),

    /// The session store could not be read or written
    #[error("session store error: {0}")]
    Store(String),

    /// JSON (de)serialization failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local I/O failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A caller supplied an argument the client cannot send
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Client construction or configuration failed
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Builds an [`AppError::Http`] from a status and the raw error body
    ///
    /// The `detail` field is extracted when the body is a JSON object
    /// carrying a string under that key.
    #[must_use]
    pub fn from_response(status: StatusCode, body: Value) -> Self {
        let detail = body
            .get("detail")
            .and_then(Value::as_str)
            .map(str::to_owned);
        AppError::Http {
            status,
            detail,
            body,
        }
    }

    /// Status code of the backend response, if this error carries one
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the backend rejected the request's credentials (HTTP 401)
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Http { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }

    /// The backend supplied `detail` message, if any
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
