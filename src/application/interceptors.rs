/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Request and response interceptors of the shared client
//!
//! Request interceptors run, in registration order, immediately before their
//! request is transmitted and may rewrite it or reject it. Response
//! interceptors observe every settled request. They cannot swallow or
//! replace the outcome: the caller always receives the original result.

use crate::error::AppError;
use crate::model::http::{ApiResponse, RequestDescriptor};
use crate::session::events::{SessionEvent, SessionEvents};
use crate::session::store::SessionStore;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::{error, warn};

/// Pipeline stage that sees every outgoing request
pub trait RequestInterceptor: Send + Sync {
    /// Returns the request to transmit, or an error to abort it
    fn intercept(&self, request: RequestDescriptor) -> Result<RequestDescriptor, AppError>;
}

/// Pipeline stage that sees every settled request
pub trait ResponseInterceptor: Send + Sync {
    /// Called with each successful response
    fn on_response(&self, _response: &ApiResponse) {}

    /// Called with each failure, including requests rejected by a request interceptor
    fn on_error(&self, error: &AppError);
}

/// Builds the `Authorization: Bearer <token>` header value
pub fn bearer_value(token: &str) -> Result<HeaderValue, AppError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
        AppError::InvalidInput("session token contains characters not allowed in a header".into())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Sets `Authorization` from the session store when a token exists
///
/// The header is inserted, never appended, so at most one value is sent.
/// Returns whether a token was attached.
pub fn attach_bearer(session: &SessionStore, headers: &mut HeaderMap) -> Result<bool, AppError> {
    match session.read()? {
        Some(token) => {
            headers.insert(AUTHORIZATION, bearer_value(&token)?);
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Attaches the current session token to every request
#[derive(Debug, Clone)]
pub struct AuthInterceptor {
    session: SessionStore,
}

impl AuthInterceptor {
    /// Creates an interceptor reading from `session`
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }
}

impl RequestInterceptor for AuthInterceptor {
    fn intercept(&self, mut request: RequestDescriptor) -> Result<RequestDescriptor, AppError> {
        if let Err(e) = attach_bearer(&self.session, &mut request.headers) {
            error!("Rejecting {} {}: {}", request.method, request.path, e);
            return Err(e);
        }
        Ok(request)
    }
}

/// Ends the session when the backend rejects the token
///
/// On HTTP 401 the token is cleared and exactly one
/// [`SessionEvent::Logout`] is published. Every other outcome is ignored.
#[derive(Debug, Clone)]
pub struct SessionInterceptor {
    session: SessionStore,
    events: SessionEvents,
}

impl SessionInterceptor {
    /// Creates an interceptor clearing `session` and publishing on `events`
    pub fn new(session: SessionStore, events: SessionEvents) -> Self {
        Self { session, events }
    }
}

impl ResponseInterceptor for SessionInterceptor {
    fn on_error(&self, error: &AppError) {
        if !error.is_unauthorized() {
            return;
        }
        warn!("Backend rejected the session token, logging out");
        if let Err(e) = self.session.clear() {
            error!("Failed to clear session token: {}", e);
        }
        self.events.publish(SessionEvent::Logout);
    }
}
