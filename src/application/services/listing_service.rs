use crate::application::client::ApiClient;
use crate::application::services::{ListingService, require_id};
use crate::error::AppError;
use crate::model::policy::with_fallback;
use crate::model::requests::ListingFilter;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

const LISTINGS_PATH: &str = "/api/listings";
const FEATURED_LISTINGS_PATH: &str = "/api/listings/featured";

/// Implementation of the business listing service
pub struct ListingServiceImpl {
    client: Arc<ApiClient>,
}

impl ListingServiceImpl {
    /// Creates a new instance of the listing service
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ListingService for ListingServiceImpl {
    async fn get_listings(&self, filter: &ListingFilter) -> Result<Value, AppError> {
        info!("Getting listings");
        let listings = with_fallback(
            self.client.get_with_query::<_, Value>(LISTINGS_PATH, filter),
            || self.client.get::<Value>(FEATURED_LISTINGS_PATH),
        )
        .await?;
        debug!("Listings obtained");
        Ok(listings)
    }

    async fn get_featured_listings(&self) -> Result<Value, AppError> {
        debug!("Getting featured listings");
        self.client.get(FEATURED_LISTINGS_PATH).await
    }

    async fn get_listing(&self, id: &str) -> Result<Value, AppError> {
        let id = require_id(id, "listing")?;
        debug!("Getting listing {}", id);
        self.client.get(&format!("{LISTINGS_PATH}/{id}")).await
    }

    async fn create_listing(&self, listing_data: &Value) -> Result<Value, AppError> {
        info!("Creating listing");
        self.client.post(LISTINGS_PATH, listing_data).await
    }

    async fn update_listing(&self, id: &str, listing_data: &Value) -> Result<Value, AppError> {
        let id = require_id(id, "listing")?;
        info!("Updating listing {}", id);
        self.client
            .put(&format!("{LISTINGS_PATH}/{id}"), listing_data)
            .await
    }

    async fn delete_listing(&self, id: &str) -> Result<Value, AppError> {
        let id = require_id(id, "listing")?;
        info!("Deleting listing {}", id);
        self.client.delete(&format!("{LISTINGS_PATH}/{id}")).await
    }

    async fn publish_listing(&self, id: &str) -> Result<Value, AppError> {
        let id = require_id(id, "listing")?;
        info!("Publishing listing {}", id);
        self.client
            .put_empty(&format!("{LISTINGS_PATH}/{id}/publish"))
            .await
    }

    async fn get_seller_listings(&self, seller_id: &str) -> Result<Value, AppError> {
        let seller_id = require_id(seller_id, "seller")?;
        debug!("Getting listings of seller {}", seller_id);
        self.client
            .get(&format!("{LISTINGS_PATH}/seller/{seller_id}"))
            .await
    }
}
