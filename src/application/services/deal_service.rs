use crate::application::client::ApiClient;
use crate::application::services::{DealService, require_id};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the deal service
pub struct DealServiceImpl {
    client: Arc<ApiClient>,
}

impl DealServiceImpl {
    /// Creates a new instance of the deal service
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DealService for DealServiceImpl {
    async fn get_user_deals(&self) -> Result<Value, AppError> {
        info!("Getting user deals");
        let deals: Value = self.client.get("/api/deals").await?;
        debug!("User deals obtained");
        Ok(deals)
    }

    async fn get_deal(&self, id: &str) -> Result<Value, AppError> {
        let id = require_id(id, "deal")?;
        debug!("Getting deal {}", id);
        self.client.get(&format!("/api/deals/{id}")).await
    }

    async fn add_timeline_event(&self, deal_id: &str, event_data: &Value) -> Result<Value, AppError> {
        let deal_id = require_id(deal_id, "deal")?;
        info!("Adding timeline event to deal {}", deal_id);
        self.client
            .post(&format!("/api/deals/{deal_id}/timeline"), event_data)
            .await
    }

    async fn complete_deal(&self, id: &str) -> Result<Value, AppError> {
        let id = require_id(id, "deal")?;
        info!("Completing deal {}", id);
        self.client
            .post_empty(&format!("/api/deals/{id}/complete"))
            .await
    }

    async fn add_document(&self, deal_id: &str, document_data: &Value) -> Result<Value, AppError> {
        let deal_id = require_id(deal_id, "deal")?;
        info!("Adding document to deal {}", deal_id);
        self.client
            .post(&format!("/api/deals/{deal_id}/documents"), document_data)
            .await
    }

    async fn get_deal_documents(&self, deal_id: &str) -> Result<Value, AppError> {
        let deal_id = require_id(deal_id, "deal")?;
        debug!("Getting documents of deal {}", deal_id);
        self.client
            .get(&format!("/api/deals/{deal_id}/documents"))
            .await
    }
}
