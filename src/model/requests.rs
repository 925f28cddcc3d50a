/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Credentials sent to the login endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Body of the email availability check
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct EmailCheckRequest {
    /// Email to look up
    pub email: String,
}

/// Query parameters accepted by the listings endpoint
///
/// Unset fields are not sent, letting the backend apply its own defaults
/// (active listings only, first 20 results).
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ListingFilter {
    /// Listing status (e.g. `active`, `pending`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Industry name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Minimum annual revenue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_revenue: Option<f64>,
    /// Maximum annual revenue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_revenue: Option<f64>,
    /// Minimum annual profit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_profit: Option<f64>,
    /// Maximum annual profit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_profit: Option<f64>,
    /// Location substring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free text search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Number of results to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    /// Maximum number of results (the backend accepts 1..=100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListingFilter {
    /// An empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the industry
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Set the revenue range
    pub fn with_revenue(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_revenue = min;
        self.max_revenue = max;
        self
    }

    /// Set the profit range
    pub fn with_profit(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_profit = min;
        self.max_profit = max;
        self
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the search text
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set paging
    pub fn with_page(mut self, skip: u32, limit: u32) -> Self {
        self.skip = Some(skip);
        self.limit = Some(limit);
        self
    }
}

/// Body of the payment intent endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PaymentIntentRequest {
    /// Amount in the currency's major unit
    pub amount: f64,
    /// ISO currency code, lowercase
    pub currency: String,
    /// Free-form metadata attached to the intent
    pub metadata: Value,
}

/// Body of the payment processing endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ProcessPaymentRequest {
    /// Client secret of the payment intent
    pub client_secret: String,
    /// Payment method payload produced by the payment provider
    pub payment_method: Value,
}

/// Body of the deal analysis endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeDealRequest {
    /// Deal to analyse
    pub deal_id: String,
    /// Kind of analysis, e.g. `funding_decision`
    pub analysis_type: String,
}

/// Body of the return-to-SeedStack endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ReturnToSeedStackRequest {
    /// Deal being returned
    pub deal_id: String,
    /// Whether funding was secured on the marketplace
    pub funding_secured: bool,
    /// Optional funding details
    pub funding_details: Option<Value>,
}

/// Query of the document URL endpoint
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DocumentUrlQuery {
    /// Storage path of the document
    pub path: String,
    /// Storage bucket
    pub bucket: String,
    /// Whether to return a public URL instead of a signed one
    pub public: bool,
}

/// Query naming a single stored document
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DocumentQuery {
    /// Storage path of the document
    pub path: String,
    /// Storage bucket
    pub bucket: String,
}

/// Query naming a storage folder
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FolderQuery {
    /// Folder to list
    pub folder: String,
    /// Storage bucket
    pub bucket: String,
}
