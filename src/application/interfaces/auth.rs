use crate::error::AppError;
use crate::model::responses::LoginResponse;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for authentication and profile operations
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Logs in and stores the returned token as the active session
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError>;

    /// Registers a new account. The caller logs in separately.
    async fn register(&self, user_data: &Value) -> Result<Value, AppError>;

    /// Gets the profile of the logged-in user
    async fn get_current_user(&self) -> Result<Value, AppError>;

    /// Updates the profile of the logged-in user
    async fn update_profile(&self, profile_data: &Value) -> Result<Value, AppError>;

    /// Marks the onboarding flow as completed
    async fn complete_onboarding(&self) -> Result<Value, AppError>;

    /// Checks whether an account already uses `email`
    async fn check_email_exists(&self, email: &str) -> Result<Value, AppError>;

    /// Ends the session locally
    ///
    /// Clears the stored token and publishes the logout signal. The backend
    /// is not contacted.
    async fn logout(&self) -> Result<(), AppError>;
}
