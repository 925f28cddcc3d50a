/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Call-site error policies
//!
//! Resource wrappers opt into these by wrapping the future of their single
//! backend call:
//!
//! - [`translate_detail`] turns any failure into [`AppError::Domain`] carrying
//!   the backend `detail` message or a fixed default
//! - [`with_fallback`] runs a secondary request once when the primary fails,
//!   surfacing the primary failure if both fail
//!
//! # Examples
//! ```ignore
//! use marketplace_client::model::policy::{translate_detail, with_fallback};
//!
//! let url = translate_detail("Failed to get document URL", client.get("/api/files/url")).await?;
//!
//! let listings = with_fallback(
//!     client.get("/api/listings"),
//!     || client.get("/api/listings/featured"),
//! ).await?;
//! ```

use crate::error::AppError;
use std::future::Future;
use tracing::{error, warn};

/// Awaits `operation`, replacing any failure with [`AppError::Domain`]
///
/// The message is the `detail` field of the backend error body when
/// present, otherwise `default_message`.
pub async fn translate_detail<T, Fut>(default_message: &str, operation: Fut) -> Result<T, AppError>
where
    Fut: Future<Output = Result<T, AppError>>,
{
    operation.await.map_err(|e| {
        error!("{}: {}", default_message, e);
        AppError::Domain(
            e.detail()
                .map(str::to_owned)
                .unwrap_or_else(|| default_message.to_string()),
        )
    })
}

/// Awaits `primary`; if it fails, builds and awaits `fallback` once
///
/// When both fail the primary error is returned and the fallback error is
/// only logged. `fallback` is never invoked when the primary succeeds.
pub async fn with_fallback<T, P, F, FFut>(primary: P, fallback: F) -> Result<T, AppError>
where
    P: Future<Output = Result<T, AppError>>,
    F: FnOnce() -> FFut,
    FFut: Future<Output = Result<T, AppError>>,
{
    let primary_error = match primary.await {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    warn!("Primary request failed ({}), trying fallback", primary_error);
    match fallback().await {
        Ok(value) => Ok(value),
        Err(fallback_error) => {
            error!("Fallback request failed: {}", fallback_error);
            Err(primary_error)
        }
    }
}
