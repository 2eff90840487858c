//! Page fetching over HTTP
//!
//! Requires the `fetch` feature (needs reqwest)

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::analyzer::analyze;
use crate::api::{ApiError, USER_AGENT};
use crate::types::Analysis;
use crate::url_utils::normalize_target_url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for a single page fetch
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("upstream returned {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::InvalidUrl(_) => ApiError::InvalidUrl,
            FetchError::Status { status, reason } => ApiError::Upstream { status, reason },
            FetchError::Timeout(_) => ApiError::Upstream {
                status: 504,
                reason: "Gateway Timeout".to_string(),
            },
            FetchError::Request(e) => ApiError::Upstream {
                status: 502,
                reason: e.to_string(),
            },
        }
    }
}

/// Fetch the HTML of an already normalized page URL.
///
/// Non-2xx responses are reported as [`FetchError::Status`]; the body is only
/// read for successful responses.
pub async fn fetch_html(target: &Url, options: &FetchOptions) -> Result<String, FetchError> {
    let client = reqwest::Client::builder()
        .user_agent(options.user_agent.as_str())
        .timeout(options.timeout)
        .build()?;

    log::info!("fetching {target}");
    let response = client
        .get(target.as_str())
        .send()
        .await
        .map_err(|e| classify(e, options.timeout))?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("{target} answered {status}");
        return Err(FetchError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let html = response
        .text()
        .await
        .map_err(|e| classify(e, options.timeout))?;
    log::debug!("fetched {} bytes from {target}", html.len());
    Ok(html)
}

/// Fetch a page and analyze it, reporting the normalized URL in the result
pub async fn analyze_url(url: &str, options: &FetchOptions) -> Result<Analysis, FetchError> {
    let target = normalize_target_url(url).ok_or_else(|| FetchError::InvalidUrl(url.to_string()))?;
    let html = fetch_html(&target, options).await?;
    Ok(analyze(target.as_str(), &html))
}

fn classify(err: reqwest::Error, timeout: Duration) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(timeout)
    } else {
        FetchError::Request(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = FetchOptions::default();
        assert!(options.user_agent.contains("TagSnippet/1.0"));
        assert_eq!(options.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_invalid_url_fails_before_any_request() {
        let err = analyze_url("ftp://example.com", &FetchOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
        assert_eq!(ApiError::from(err), ApiError::InvalidUrl);
    }

    #[tokio::test]
    async fn test_fetch_html_takes_parsed_url() {
        let target = normalize_target_url("http://127.0.0.1:9/").unwrap();
        let options = FetchOptions {
            timeout: Duration::from_secs(2),
            ..FetchOptions::default()
        };

        let err = fetch_html(&target, &options).await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Request(_) | FetchError::Timeout(_)
        ));
        assert!(matches!(
            ApiError::from(err).status_code(),
            502 | 504
        ));
    }

    #[test]
    fn test_status_error_maps_to_upstream() {
        let err = FetchError::Status {
            status: 404,
            reason: "Not Found".into(),
        };
        let api: ApiError = err.into();
        assert_eq!(api.status_code(), 404);
        assert_eq!(api.to_string(), "Failed to fetch URL: 404 Not Found");
    }

    #[test]
    fn test_timeout_maps_to_gateway_timeout() {
        let api: ApiError = FetchError::Timeout(Duration::from_secs(5)).into();
        assert_eq!(api.status_code(), 504);
    }
}
