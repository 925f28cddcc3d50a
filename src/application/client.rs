/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Shared client for the marketplace REST API
//!
//! Every resource wrapper goes through [`ApiClient`]. It owns:
//! - the transport (`reqwest`)
//! - the session token store
//! - the logout event registry
//! - the interceptor pipeline
//!
//! The [`AuthInterceptor`] and [`SessionInterceptor`] are always installed;
//! extra interceptors registered on the builder run after them.
//!
//! # Example
//! ```ignore
//! use marketplace_client::prelude::*;
//!
//! let client = ApiClient::new(Config::new())?;
//! let deals: serde_json::Value = client.get("/api/deals").await?;
//! ```

use crate::application::config::Config;
use crate::application::interceptors::{
    AuthInterceptor, RequestInterceptor, ResponseInterceptor, SessionInterceptor,
};
use crate::application::upload::UploadChannel;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{ApiResponse, RequestDescriptor};
use crate::session::events::SessionEvents;
use crate::session::store::SessionStore;
use reqwest::Client as HttpInternalClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error};

/// Builder for [`ApiClient`]
pub struct ApiClientBuilder {
    config: Config,
    session: Option<SessionStore>,
    events: Option<SessionEvents>,
    http_client: Option<HttpInternalClient>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClientBuilder {
    /// Uses `session` instead of the store described by the configuration
    pub fn session_store(mut self, session: SessionStore) -> Self {
        self.session = Some(session);
        self
    }

    /// Publishes session events on `events` instead of the process-wide registry
    pub fn events(mut self, events: SessionEvents) -> Self {
        self.events = Some(events);
        self
    }

    /// Uses a preconfigured transport
    pub fn http_client(mut self, http_client: HttpInternalClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Adds a request interceptor that runs after the built-in ones
    pub fn request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    /// Adds a response interceptor that runs after the built-in ones
    pub fn response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    /// Builds the client
    ///
    /// Fails with [`AppError::Config`] when the base URL is blank.
    pub fn build(self) -> Result<ApiClient, AppError> {
        if self.config.rest_api.base_url.trim().is_empty() {
            return Err(AppError::Config("REST API base URL is empty".to_string()));
        }
        let http_client = match self.http_client {
            Some(client) => client,
            None => HttpInternalClient::builder().user_agent(USER_AGENT).build()?,
        };
        let session = self
            .session
            .unwrap_or_else(|| SessionStore::from_config(&self.config.session));
        let events = self.events.unwrap_or_else(SessionEvents::global);

        let mut request_interceptors: Vec<Arc<dyn RequestInterceptor>> =
            vec![Arc::new(AuthInterceptor::new(session.clone()))];
        request_interceptors.extend(self.request_interceptors);

        let mut response_interceptors: Vec<Arc<dyn ResponseInterceptor>> = vec![Arc::new(
            SessionInterceptor::new(session.clone(), events.clone()),
        )];
        response_interceptors.extend(self.response_interceptors);

        Ok(ApiClient {
            http_client,
            config: Arc::new(self.config),
            session,
            events,
            request_interceptors,
            response_interceptors,
        })
    }
}

/// Authenticated client for the marketplace REST API
pub struct ApiClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    session: SessionStore,
    events: SessionEvents,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Creates a client with the default session store and the process-wide event registry
    ///
    /// # Returns
    /// * `Ok(ApiClient)` - Client ready to use
    /// * `Err(AppError)` - If the transport cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::builder(config).build()
    }

    /// Starts building a client for `config`
    pub fn builder(config: Config) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            session: None,
            events: None,
            http_client: None,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.send(RequestDescriptor::get(path)).await?.json()
    }

    /// Makes a GET request with query parameters
    pub async fn get_with_query<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, AppError> {
        let request = RequestDescriptor::get(path).with_query(query)?;
        self.send(request).await?.json()
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let request = RequestDescriptor::post(path).with_json(body)?;
        self.send(request).await?.json()
    }

    /// Makes a POST request without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.send(RequestDescriptor::post(path)).await?.json()
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let request = RequestDescriptor::put(path).with_json(body)?;
        self.send(request).await?.json()
    }

    /// Makes a PUT request without a body
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.send(RequestDescriptor::put(path)).await?.json()
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.send(RequestDescriptor::delete(path)).await?.json()
    }

    /// Makes a DELETE request with query parameters
    pub async fn delete_with_query<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, AppError> {
        let request = RequestDescriptor::delete(path).with_query(query)?;
        self.send(request).await?.json()
    }

    /// Runs `request` through the interceptor pipeline and the transport
    ///
    /// Non-2xx responses are returned as [`AppError::Http`]. Response
    /// interceptors observe the outcome before it is returned unchanged.
    pub async fn send(&self, request: RequestDescriptor) -> Result<ApiResponse, AppError> {
        let result = self.dispatch(request).await;
        match &result {
            Ok(response) => self
                .response_interceptors
                .iter()
                .for_each(|interceptor| interceptor.on_response(response)),
            Err(e) => self
                .response_interceptors
                .iter()
                .for_each(|interceptor| interceptor.on_error(e)),
        }
        result
    }

    async fn dispatch(&self, mut request: RequestDescriptor) -> Result<ApiResponse, AppError> {
        for interceptor in &self.request_interceptors {
            request = interceptor.intercept(request)?;
        }

        let url = self.config.url_for(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self
            .http_client
            .request(request.method.clone(), &url)
            .headers(request.headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = ApiResponse::read(builder.send().await?).await?;
        debug!("Response status: {}", response.status);

        if !response.is_success() {
            error!(
                "Request {} {} failed with status {}: {}",
                request.method, url, response.status, response.body
            );
        }
        response.error_for_status()
    }

    /// Returns an upload channel sharing this client's transport, configuration and session
    pub fn upload_channel(&self) -> UploadChannel {
        UploadChannel::new(
            self.http_client.clone(),
            self.config.clone(),
            self.session.clone(),
        )
    }

    /// Gets the session token store
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Gets the session event registry
    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
