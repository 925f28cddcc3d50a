/// Authentication and profile service interface
pub mod auth;
/// Deal service interface
pub mod deal;
/// Document storage service interface
pub mod file;
/// Workflow integration service interface
pub mod integration;
/// Investment service interface
pub mod investment;
/// Listing service interface
pub mod listing;
/// Offer service interface
pub mod offer;
/// Payment service interface
pub mod payment;
