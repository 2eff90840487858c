//! JSON request/response boundary for the analyze endpoint
//!
//! Request body: `{"url": "https://example.com"}`. Successful responses carry
//! the serialized [`Analysis`](crate::Analysis); failures carry
//! `{"error": "..."}` with the status from [`ApiError::status_code`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::url_utils::normalize_target_url;

/// Browser-like user agent sent when fetching pages for analysis
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; TagSnippet/1.0; +https://tagsnippet.com)";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Invalid request body")]
    MalformedBody,
    #[error("URL is required")]
    MissingUrl,
    #[error("Invalid URL format")]
    InvalidUrl,
    #[error("Failed to fetch URL: {status} {reason}")]
    Upstream { status: u16, reason: String },
    #[error("Failed to analyze URL. Please try again.")]
    Internal,
}

impl ApiError {
    /// HTTP status to answer with. Upstream failures pass the fetched
    /// page's status through; anything outside 400..=599 becomes 502.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MalformedBody | ApiError::MissingUrl | ApiError::InvalidUrl => 400,
            ApiError::Upstream { status, .. } if (400..=599).contains(status) => *status,
            ApiError::Upstream { .. } => 502,
            ApiError::Internal => 500,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

/// Parse a request body and validate the URL it names
pub fn parse_analyze_request(body: &str) -> Result<Url, ApiError> {
    let request: AnalyzeRequest =
        serde_json::from_str(body).map_err(|_| ApiError::MalformedBody)?;
    validate_target(request.url.as_deref())
}

/// Validate a URL taken from a request body or query string
pub fn validate_target(url: Option<&str>) -> Result<Url, ApiError> {
    let raw = url
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or(ApiError::MissingUrl)?;
    normalize_target_url(raw).ok_or(ApiError::InvalidUrl)
}
