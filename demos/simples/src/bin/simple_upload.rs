/// Logs in and uploads a document, reporting progress
///
/// Configure via environment variables:
/// - MARKETPLACE_BACKEND_URL (default: http://localhost:8001)
/// - MARKETPLACE_EMAIL / MARKETPLACE_PASSWORD
/// - MARKETPLACE_UPLOAD_CHUNK_SIZE (default: 65536)
///
/// Run with: cargo run --bin simple_upload -- <file>
use marketplace_client::prelude::*;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: simple_upload <file>")?;

    let client = Arc::new(ApiClient::new(Config::new())?);
    let auth = AuthServiceImpl::new(client.clone());

    let email: String = get_env_or_default("MARKETPLACE_EMAIL", String::from("demo@example.com"));
    let password: String = get_env_or_default("MARKETPLACE_PASSWORD", String::new());
    auth.login(&email, &password).await?;

    let user = CurrentUser::new(client.events());
    user.set(auth.get_current_user().await?);
    info!("Verification level: {}", user.verification_level());

    let files = FileServiceImpl::new(client.clone());
    let progress: ProgressCallback = Arc::new(|percent| info!("Upload progress: {}%", percent));
    let stored = files
        .upload_document(UploadFile::from_path(&path).await?, "deals", false, Some(progress))
        .await?;
    info!("✓ Stored document: {}", stored);

    auth.logout().await?;
    Ok(())
}
