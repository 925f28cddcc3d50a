use crate::application::client::ApiClient;
use crate::application::services::PaymentService;
use crate::constants::{DEFAULT_CURRENCY, PAYMENT_HISTORY_FAILED, PAYMENT_PROCESSING_FAILED};
use crate::error::AppError;
use crate::model::policy::translate_detail;
use crate::model::requests::{PaymentIntentRequest, ProcessPaymentRequest};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::info;

/// Implementation of the payment service
pub struct PaymentServiceImpl {
    client: Arc<ApiClient>,
}

impl PaymentServiceImpl {
    /// Creates a new instance of the payment service
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentService for PaymentServiceImpl {
    async fn create_payment_intent(
        &self,
        amount: f64,
        currency: Option<&str>,
        metadata: Option<Value>,
    ) -> Result<Value, AppError> {
        let request = PaymentIntentRequest {
            amount,
            currency: currency.unwrap_or(DEFAULT_CURRENCY).to_string(),
            metadata: metadata.unwrap_or_else(|| Value::Object(Map::new())),
        };
        info!("Creating payment intent of {} {}", request.amount, request.currency);
        translate_detail(
            PAYMENT_PROCESSING_FAILED,
            self.client.post("/api/payments/create-intent", &request),
        )
        .await
    }

    async fn process_payment(&self, client_secret: &str, payment_method: &Value) -> Result<Value, AppError> {
        let request = ProcessPaymentRequest {
            client_secret: client_secret.to_string(),
            payment_method: payment_method.clone(),
        };
        info!("Processing payment");
        translate_detail(
            PAYMENT_PROCESSING_FAILED,
            self.client.post("/api/payments/process", &request),
        )
        .await
    }

    async fn get_payment_history(&self) -> Result<Value, AppError> {
        translate_detail(
            PAYMENT_HISTORY_FAILED,
            self.client.get("/api/payments/history"),
        )
        .await
    }
}
