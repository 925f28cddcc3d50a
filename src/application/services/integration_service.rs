use crate::application::client::ApiClient;
use crate::application::services::{IntegrationService, require_id};
use crate::constants::DEFAULT_ANALYSIS_TYPE;
use crate::error::AppError;
use crate::model::requests::{AnalyzeDealRequest, ReturnToSeedStackRequest};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

/// Implementation of the SeedStack workflow integration service
///
/// Failures are logged and returned unchanged.
pub struct IntegrationServiceImpl {
    client: Arc<ApiClient>,
}

impl IntegrationServiceImpl {
    /// Creates a new instance of the integration service
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

fn log_failure<T>(operation: &str, result: Result<T, AppError>) -> Result<T, AppError> {
    if let Err(e) = &result {
        error!("Error {}: {}", operation, e);
    }
    result
}

#[async_trait]
impl IntegrationService for IntegrationServiceImpl {
    async fn analyze_deal(&self, deal_id: &str, analysis_type: Option<&str>) -> Result<Value, AppError> {
        let request = AnalyzeDealRequest {
            deal_id: require_id(deal_id, "deal")?.to_string(),
            analysis_type: analysis_type.unwrap_or(DEFAULT_ANALYSIS_TYPE).to_string(),
        };
        info!("Requesting {} analysis of deal {}", request.analysis_type, request.deal_id);
        log_failure(
            "analyzing deal",
            self.client.post("/integration/analyze-deal", &request).await,
        )
    }

    async fn push_to_marketplace(&self, deal_data: &Value) -> Result<Value, AppError> {
        info!("Pushing deal to marketplace");
        log_failure(
            "pushing to marketplace",
            self.client
                .post("/integration/push-to-marketplace", deal_data)
                .await,
        )
    }

    async fn get_marketplace_status(&self, deal_id: &str) -> Result<Value, AppError> {
        let deal_id = require_id(deal_id, "deal")?;
        log_failure(
            "getting marketplace status",
            self.client
                .get(&format!("/integration/marketplace-status/{deal_id}"))
                .await,
        )
    }

    async fn return_to_seedstack(
        &self,
        deal_id: &str,
        funding_secured: bool,
        funding_details: Option<Value>,
    ) -> Result<Value, AppError> {
        let request = ReturnToSeedStackRequest {
            deal_id: require_id(deal_id, "deal")?.to_string(),
            funding_secured,
            funding_details,
        };
        info!("Returning deal {} to SeedStack", request.deal_id);
        log_failure(
            "returning to SeedStack",
            self.client
                .post("/integration/return-to-seedstack", &request)
                .await,
        )
    }

    async fn get_workflow_status(&self, deal_id: &str) -> Result<Value, AppError> {
        let deal_id = require_id(deal_id, "deal")?;
        log_failure(
            "getting workflow status",
            self.client
                .get(&format!("/integration/workflow-status/{deal_id}"))
                .await,
        )
    }
}
