/// Module containing the authentication and profile service
pub mod auth_service;
/// Module containing the deal service
pub mod deal_service;
/// Module containing the document storage service
pub mod file_service;
/// Module containing the SeedStack workflow integration service
pub mod integration_service;
/// Module containing the investment service
pub mod investment_service;
/// Module containing the business listing service
pub mod listing_service;
/// Module containing the offer service
pub mod offer_service;
/// Module containing the payment service
pub mod payment_service;

pub use crate::application::interfaces::auth::*;
pub use crate::application::interfaces::deal::*;
pub use crate::application::interfaces::file::*;
pub use crate::application::interfaces::integration::*;
pub use crate::application::interfaces::investment::*;
pub use crate::application::interfaces::listing::*;
pub use crate::application::interfaces::offer::*;
pub use crate::application::interfaces::payment::*;
pub use auth_service::*;
pub use deal_service::*;
pub use file_service::*;
pub use integration_service::*;
pub use investment_service::*;
pub use listing_service::*;
pub use offer_service::*;
pub use payment_service::*;

use crate::error::AppError;

/// Rejects identifiers that would turn a resource path into its collection path
pub(crate) fn require_id<'a>(id: &'a str, what: &str) -> Result<&'a str, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::InvalidInput(format!("{what} id must not be empty")));
    }
    Ok(id)
}
