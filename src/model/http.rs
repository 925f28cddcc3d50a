/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Transport level request and response models
//!
//! [`RequestDescriptor`] is what the interceptor pipeline sees and mutates
//! before a request is transmitted. [`ApiResponse`] is a fully read response:
//! status, headers and the decoded body.

use crate::error::AppError;
use reqwest::header::{
    ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue,
};
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Describes an outgoing request before it is handed to the transport
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: Method,
    /// Path relative to the configured base URL, or an absolute URL
    pub path: String,
    /// Query parameters in the order they will be encoded
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: HeaderMap,
    /// JSON body, if any
    pub body: Option<Value>,
}

impl RequestDescriptor {
    /// Creates a descriptor carrying the standard JSON headers
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers,
            body: None,
        }
    }

    /// GET `path`
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST `path`
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT `path`
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// DELETE `path`
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Serializes `body` as the JSON payload
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Appends the fields of `query` as query parameters
    ///
    /// `query` must serialize to a JSON object. `null` fields are skipped,
    /// arrays repeat the key once per element, and nested objects are
    /// rejected.
    pub fn with_query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self, AppError> {
        let fields = match serde_json::to_value(query)? {
            Value::Object(fields) => fields,
            Value::Null => return Ok(self),
            other => {
                return Err(AppError::InvalidInput(format!(
                    "query parameters must be an object, got {other}"
                )));
            }
        };
        for (key, value) in fields {
            match value {
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = query_value(&key, item)? {
                            self.query.push((key.clone(), text));
                        }
                    }
                }
                other => {
                    if let Some(text) = query_value(&key, other)? {
                        self.query.push((key, text));
                    }
                }
            }
        }
        Ok(self)
    }

    /// Inserts a header, replacing any previous value with the same name
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// The bearer token carried by the `Authorization` header, if any
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
    }
}

fn query_value(key: &str, value: Value) -> Result<Option<String>, AppError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(_) | Value::Number(_) => Ok(Some(value.to_string())),
        Value::Array(_) | Value::Object(_) => Err(AppError::InvalidInput(format!(
            "query parameter {key} cannot be nested"
        ))),
    }
}

/// A response whose body has been read
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Decoded body: `Value::Null` when empty, a JSON string when the body is not JSON
    pub body: Value,
}

impl ApiResponse {
    /// Reads the whole body of a transport response
    pub async fn read(response: Response) -> Result<Self, AppError> {
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;
        Ok(Self {
            status,
            headers,
            body: decode_body(&bytes),
        })
    }

    /// Whether the status code is in the 2xx range
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Turns a non-success response into [`AppError::Http`]
    pub fn error_for_status(self) -> Result<Self, AppError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(AppError::from_response(self.status, self.body))
        }
    }

    /// Consumes the response, returning the body only
    #[must_use]
    pub fn into_body(self) -> Value {
        self.body
    }

    /// Deserializes the body into `T`
    pub fn json<T: DeserializeOwned>(self) -> Result<T, AppError> {
        Ok(serde_json::from_value(self.body)?)
    }
}

/// Decodes a raw body. Empty bodies (e.g. `204 No Content`) become `Value::Null`.
pub(crate) fn decode_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
