//! # Marketplace Client
//!
//! Authenticated Rust client for the business marketplace REST API.
//!
//! ## Features
//!
//! - **Session handling**: the bearer token is persisted in a pluggable
//!   key-value store and attached to every request by an interceptor
//! - **Session invalidation**: a `401` from the backend clears the token and
//!   broadcasts `auth:logout` to every subscriber
//! - **Uploads**: multipart uploads with percentage progress callbacks
//! - **Resource services**: deals, listings, offers, investments, files,
//!   payments, SeedStack integration and auth/profile endpoints
//! - **Policies**: backend `detail` translation for files and payments,
//!   featured-listings fallback for the listings endpoint
//!
//! ## Example
//!
//! ```ignore
//! use marketplace_client::prelude::*;
//! use std::sync::Arc;
//!
//! setup_logger();
//! let client = Arc::new(ApiClient::new(Config::new())?);
//! let user = CurrentUser::new(client.events());
//!
//! let auth = AuthServiceImpl::new(client.clone());
//! auth.login("jane@example.com", "secret").await?;
//! user.set(auth.get_current_user().await?);
//!
//! let listings = ListingServiceImpl::new(client.clone())
//!     .get_listings(&ListingFilter::new().with_industry("Technology"))
//!     .await?;
//! ```

/// Client, configuration, interceptors, upload channel and resource services
pub mod application;
/// Crate wide constants
pub mod constants;
/// Error types
pub mod error;
/// Request/response models and call-site policies
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Session token storage, logout events and current-user state
pub mod session;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
