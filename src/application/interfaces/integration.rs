use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the SeedStack ↔ marketplace workflow endpoints
#[async_trait]
pub trait IntegrationService: Send + Sync {
    /// Requests an AI analysis of a deal
    ///
    /// `analysis_type` defaults to `funding_decision`.
    async fn analyze_deal(&self, deal_id: &str, analysis_type: Option<&str>) -> Result<Value, AppError>;

    /// Publishes a SeedStack deal as a marketplace listing
    async fn push_to_marketplace(&self, deal_data: &Value) -> Result<Value, AppError>;

    /// Gets the marketplace status of a pushed deal
    async fn get_marketplace_status(&self, deal_id: &str) -> Result<Value, AppError>;

    /// Hands a deal back to SeedStack with its funding outcome
    async fn return_to_seedstack(
        &self,
        deal_id: &str,
        funding_secured: bool,
        funding_details: Option<Value>,
    ) -> Result<Value, AppError>;

    /// Gets the workflow status of a deal across both systems
    async fn get_workflow_status(&self, deal_id: &str) -> Result<Value, AppError>;
}
