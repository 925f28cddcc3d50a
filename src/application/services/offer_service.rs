use crate::application::client::ApiClient;
use crate::application::services::{OfferService, require_id};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the offer service
pub struct OfferServiceImpl {
    client: Arc<ApiClient>,
}

impl OfferServiceImpl {
    /// Creates a new instance of the offer service
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OfferService for OfferServiceImpl {
    async fn create_offer(&self, offer_data: &Value) -> Result<Value, AppError> {
        info!("Creating offer");
        let offer: Value = self.client.post("/api/offers", offer_data).await?;
        debug!("Offer created");
        Ok(offer)
    }

    async fn get_user_offers(&self) -> Result<Value, AppError> {
        debug!("Getting offers made by the user");
        self.client.get("/api/offers").await
    }

    async fn get_seller_offers(&self) -> Result<Value, AppError> {
        debug!("Getting offers received by the seller");
        self.client.get("/api/offers/seller").await
    }

    async fn get_offer(&self, id: &str) -> Result<Value, AppError> {
        let id = require_id(id, "offer")?;
        self.client.get(&format!("/api/offers/{id}")).await
    }

    async fn accept_offer(&self, id: &str) -> Result<Value, AppError> {
        let id = require_id(id, "offer")?;
        info!("Accepting offer {}", id);
        self.client
            .post_empty(&format!("/api/offers/{id}/accept"))
            .await
    }

    async fn reject_offer(&self, id: &str) -> Result<Value, AppError> {
        let id = require_id(id, "offer")?;
        info!("Rejecting offer {}", id);
        self.client
            .post_empty(&format!("/api/offers/{id}/reject"))
            .await
    }
}
