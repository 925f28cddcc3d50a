use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the investment service
#[async_trait]
pub trait InvestmentService: Send + Sync {
    /// Commits an investment in a business
    async fn create_investment(&self, investment_data: &Value) -> Result<Value, AppError>;

    /// Gets the investments of the logged-in user
    async fn get_user_investments(&self) -> Result<Value, AppError>;

    /// Gets the investments made in a business
    async fn get_business_investments(&self, business_id: &str) -> Result<Value, AppError>;

    /// Gets a single investment
    async fn get_investment(&self, id: &str) -> Result<Value, AppError>;
}
