use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the deal service
#[async_trait]
pub trait DealService: Send + Sync {
    /// Gets the deals of the logged-in user
    async fn get_user_deals(&self) -> Result<Value, AppError>;

    /// Gets a single deal
    async fn get_deal(&self, id: &str) -> Result<Value, AppError>;

    /// Appends an event to a deal's timeline
    async fn add_timeline_event(&self, deal_id: &str, event_data: &Value) -> Result<Value, AppError>;

    /// Marks a deal as completed
    async fn complete_deal(&self, id: &str) -> Result<Value, AppError>;

    /// Attaches a document record to a deal
    async fn add_document(&self, deal_id: &str, document_data: &Value) -> Result<Value, AppError>;

    /// Gets the documents attached to a deal
    async fn get_deal_documents(&self, deal_id: &str) -> Result<Value, AppError>;
}
