/// Shared API client with the interceptor pipeline
pub mod client;
/// Application configuration module
pub mod config;
/// Request and response interceptors
pub mod interceptors;
/// Resource service interfaces
pub mod interfaces;
/// Resource service implementations
pub mod services;
/// Multipart upload channel with progress reporting
pub mod upload;
