use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the offer service
#[async_trait]
pub trait OfferService: Send + Sync {
    /// Submits an offer on a listing
    async fn create_offer(&self, offer_data: &Value) -> Result<Value, AppError>;

    /// Gets the offers made by the logged-in user
    async fn get_user_offers(&self) -> Result<Value, AppError>;

    /// Gets the offers received on the logged-in seller's listings
    async fn get_seller_offers(&self) -> Result<Value, AppError>;

    /// Gets a single offer
    async fn get_offer(&self, id: &str) -> Result<Value, AppError>;

    /// Accepts an offer
    async fn accept_offer(&self, id: &str) -> Result<Value, AppError>;

    /// Rejects an offer
    async fn reject_offer(&self, id: &str) -> Result<Value, AppError>;
}
