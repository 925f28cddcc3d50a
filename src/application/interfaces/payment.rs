use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for payments
///
/// Failures are reported as [`AppError::Domain`] carrying the backend
/// `detail` or a fixed default message.
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Creates a payment intent
    ///
    /// `currency` defaults to `usd` and `metadata` to an empty object.
    async fn create_payment_intent(
        &self,
        amount: f64,
        currency: Option<&str>,
        metadata: Option<Value>,
    ) -> Result<Value, AppError>;

    /// Confirms a payment intent with a payment method
    async fn process_payment(&self, client_secret: &str, payment_method: &Value) -> Result<Value, AppError>;

    /// Gets the payment history of the logged-in user
    async fn get_payment_history(&self) -> Result<Value, AppError>;
}
