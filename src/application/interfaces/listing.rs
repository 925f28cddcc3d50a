use crate::error::AppError;
use crate::model::requests::ListingFilter;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the business listing service
#[async_trait]
pub trait ListingService: Send + Sync {
    /// Gets listings matching `filter`
    ///
    /// If the listings endpoint fails, the featured listings are returned
    /// instead. If that fails too, the error of the listings endpoint is
    /// returned.
    async fn get_listings(&self, filter: &ListingFilter) -> Result<Value, AppError>;

    /// Gets the featured listings
    async fn get_featured_listings(&self) -> Result<Value, AppError>;

    /// Gets a single listing
    async fn get_listing(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a listing
    async fn create_listing(&self, listing_data: &Value) -> Result<Value, AppError>;

    /// Updates a listing
    async fn update_listing(&self, id: &str, listing_data: &Value) -> Result<Value, AppError>;

    /// Deletes a listing. The backend answers `204 No Content`, returned as `Value::Null`.
    async fn delete_listing(&self, id: &str) -> Result<Value, AppError>;

    /// Publishes a draft listing
    async fn publish_listing(&self, id: &str) -> Result<Value, AppError>;

    /// Gets the listings of a seller
    async fn get_seller_listings(&self, seller_id: &str) -> Result<Value, AppError>;
}
