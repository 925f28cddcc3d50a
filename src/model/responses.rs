/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of the login endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub access_token: String,
    /// Token type reported by the backend (normally `bearer`)
    #[serde(default)]
    pub token_type: Option<String>,
    /// Any other fields returned alongside the token
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of the document URL endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentUrlResponse {
    /// Public or signed URL of the document
    pub url: String,
}
