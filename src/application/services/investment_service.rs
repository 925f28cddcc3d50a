use crate::application::client::ApiClient;
use crate::application::services::{InvestmentService, require_id};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Implementation of the investment service
pub struct InvestmentServiceImpl {
    client: Arc<ApiClient>,
}

impl InvestmentServiceImpl {
    /// Creates a new instance of the investment service
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InvestmentService for InvestmentServiceImpl {
    async fn create_investment(&self, investment_data: &Value) -> Result<Value, AppError> {
        info!("Creating investment");
        self.client.post("/api/investments", investment_data).await
    }

    async fn get_user_investments(&self) -> Result<Value, AppError> {
        self.client.get("/api/investments").await
    }

    async fn get_business_investments(&self, business_id: &str) -> Result<Value, AppError> {
        let business_id = require_id(business_id, "business")?;
        self.client
            .get(&format!("/api/investments/business/{business_id}"))
            .await
    }

    async fn get_investment(&self, id: &str) -> Result<Value, AppError> {
        let id = require_id(id, "investment")?;
        self.client.get(&format!("/api/investments/{id}")).await
    }
}
