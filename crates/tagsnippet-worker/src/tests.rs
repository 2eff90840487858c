use super::*;

#[test]
fn test_routes() {
    assert_eq!(route(&Method::Options, "/anything"), Route::Preflight);
    assert_eq!(route(&Method::Post, "/api/analyze"), Route::Analyze);
    assert_eq!(route(&Method::Get, "/"), Route::AnalyzeQuery);
    assert_eq!(route(&Method::Get, "/health"), Route::Health);
    assert_eq!(route(&Method::Get, "/api/analyze"), Route::NotFound);
    assert_eq!(route(&Method::Post, "/"), Route::NotFound);
    assert_eq!(route(&Method::Get, "/missing"), Route::NotFound);
}

#[test]
fn test_query_target_decodes_url() {
    assert_eq!(
        query_target(Some("url=https%3A%2F%2Fexample.com%2Fpage%3Fa%3D1")),
        Some("https://example.com/page?a=1".to_string())
    );
    assert_eq!(
        query_target(Some("lang=en&url=example.com")),
        Some("example.com".to_string())
    );
}

#[test]
fn test_query_target_missing() {
    assert_eq!(query_target(None), None);
    assert_eq!(query_target(Some("")), None);
    assert_eq!(query_target(Some("share=abc")), None);
}

#[test]
fn test_query_target_validation() {
    let err = validate_target(query_target(Some("share=abc")).as_deref()).unwrap_err();
    assert_eq!(err, ApiError::MissingUrl);
    assert_eq!(err.status_code(), 400);

    let url = validate_target(query_target(Some("url=example.com")).as_deref()).unwrap();
    assert_eq!(url.as_str(), "https://example.com/");
}

#[test]
fn test_upstream_error_passes_status_through() {
    let err = upstream_error(404);
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_string(), "Failed to fetch URL: 404 Not Found");

    let err = upstream_error(418);
    assert_eq!(err.status_code(), 418);
    assert_eq!(err.to_string(), "Failed to fetch URL: 418 Unknown");

    let err = upstream_error(302);
    assert_eq!(err.status_code(), 502);
}

#[test]
fn test_timeout_maps_to_gateway_timeout() {
    let err = timeout_error();
    assert_eq!(err.status_code(), 504);
    assert_eq!(err.to_string(), "Failed to fetch URL: 504 Gateway Timeout");
    assert_eq!(FETCH_TIMEOUT, Duration::from_secs(30));
}

#[test]
fn test_check_status() {
    assert!(check_status(200).is_ok());
    assert!(check_status(204).is_ok());
    assert_eq!(check_status(404).unwrap_err().status_code(), 404);
    assert_eq!(check_status(503).unwrap_err().status_code(), 503);
    assert_eq!(check_status(301).unwrap_err().status_code(), 502);
}

#[test]
fn test_error_body_shape() {
    let body = serde_json::to_value(ApiError::InvalidUrl.to_body()).unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Invalid URL format" }));
}

#[test]
fn test_health_body() {
    let body = serde_json::to_value(health()).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
