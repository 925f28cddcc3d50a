use marketplace_client::prelude::*;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    info!("Starting simple listings example");
    let config = Config::new();
    info!("Using backend {}", config.rest_api.base_url);

    let client = Arc::new(ApiClient::new(config)?);

    // Watch for the session ending while we work
    client.events().subscribe(|event| warn!("Session event: {}", event));

    let listings = ListingServiceImpl::new(client.clone());
    let filter = ListingFilter::new().with_status("active").with_page(0, 10);
    let results = listings.get_listings(&filter).await?;

    let count = results.as_array().map(Vec::len).unwrap_or_default();
    info!("✓ Obtained {} listings", count);
    info!("Listings: {}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
