use crate::application::client::ApiClient;
use crate::application::services::AuthService;
use crate::error::AppError;
use crate::model::requests::{EmailCheckRequest, LoginRequest};
use crate::model::responses::LoginResponse;
use crate::session::events::SessionEvent;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the authentication and profile service
pub struct AuthServiceImpl {
    client: Arc<ApiClient>,
}

impl AuthServiceImpl {
    /// Creates a new instance of the auth service
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.client.post("/api/auth/login", &request).await?;
        self.client.session().store(&response.access_token)?;
        info!("✓ Login successful for {}", email);
        Ok(response)
    }

    async fn register(&self, user_data: &Value) -> Result<Value, AppError> {
        info!("Registering new account");
        self.client.post("/api/auth/register", user_data).await
    }

    async fn get_current_user(&self) -> Result<Value, AppError> {
        debug!("Getting current user");
        self.client.get("/api/profiles/me").await
    }

    async fn update_profile(&self, profile_data: &Value) -> Result<Value, AppError> {
        info!("Updating profile");
        self.client.put("/api/profiles/me", profile_data).await
    }

    async fn complete_onboarding(&self) -> Result<Value, AppError> {
        self.client
            .put_empty("/api/profiles/me/complete-onboarding")
            .await
    }

    async fn check_email_exists(&self, email: &str) -> Result<Value, AppError> {
        let request = EmailCheckRequest {
            email: email.to_string(),
        };
        self.client.post("/api/auth/check-email", &request).await
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.client.session().clear()?;
        self.client.events().publish(SessionEvent::Logout);
        info!("Logged out");
        Ok(())
    }
}
