/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Transport request and response models
pub mod http;
/// Error translation and fallback policies for resource wrappers
pub mod policy;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
