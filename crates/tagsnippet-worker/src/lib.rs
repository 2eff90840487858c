//! Cloudflare Worker for tagsnippet
//!
//! JSON API over tagsnippet-core:
//! - `POST /api/analyze` with `{"url": "..."}`
//! - `GET /?url=<encoded>`
//! - `GET /health`

use std::time::Duration;

use futures::future::{Either, select};
use serde::Serialize;
use tagsnippet_core::api::{parse_analyze_request, validate_target};
use tagsnippet_core::{Analysis, ApiError, USER_AGENT, analyze};
use url::Url;
use worker::*;

#[cfg(test)]
mod tests;

type ApiResult<T> = std::result::Result<T, ApiError>;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Preflight,
    Analyze,
    AnalyzeQuery,
    Health,
    NotFound,
}

fn route(method: &Method, path: &str) -> Route {
    match (method, path) {
        (Method::Options, _) => Route::Preflight,
        (Method::Post, "/api/analyze") => Route::Analyze,
        (Method::Get, "/") => Route::AnalyzeQuery,
        (Method::Get, "/health") => Route::Health,
        _ => Route::NotFound,
    }
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

fn health() -> Health {
    Health {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    }
}

/// Percent-decoded `url` parameter of a query string
fn query_target(query: Option<&str>) -> Option<String> {
    let raw = query?
        .split('&')
        .find_map(|pair| pair.strip_prefix("url="))?
        .replace('+', " ");

    Some(
        urlencoding::decode(&raw)
            .map(|decoded| decoded.into_owned())
            .unwrap_or(raw),
    )
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        410 => "Gone",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Unknown",
    }
}

fn upstream_error(status: u16) -> ApiError {
    ApiError::Upstream {
        status,
        reason: reason_phrase(status).to_string(),
    }
}

/// The upstream did not answer within [`FETCH_TIMEOUT`]
fn timeout_error() -> ApiError {
    upstream_error(504)
}

fn check_status(status: u16) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(upstream_error(status))
    }
}

fn internal(err: Error) -> ApiError {
    console_log!("[Worker] internal error: {}", err);
    ApiError::Internal
}

async fn fetch_page(target: &Url) -> ApiResult<String> {
    let mut fetch_req = Request::new(target.as_str(), Method::Get).map_err(internal)?;
    fetch_req
        .headers_mut()
        .map_err(internal)?
        .set("User-Agent", USER_AGENT)
        .map_err(internal)?;

    let fetch = Fetch::Request(fetch_req);
    let controller = AbortController::default();
    let signal = controller.signal();
    let send = Box::pin(fetch.send_with_signal(&signal));
    let deadline = Box::pin(Delay::from(FETCH_TIMEOUT));

    let mut response = match select(send, deadline).await {
        Either::Left((Ok(response), _)) => response,
        Either::Left((Err(e), _)) => {
            console_log!("[Worker] fetch failed for {}: {}", target, e);
            return Err(upstream_error(502));
        }
        Either::Right(_) => {
            controller.abort();
            console_log!("[Worker] {} timed out after {:?}", target, FETCH_TIMEOUT);
            return Err(timeout_error());
        }
    };

    let status = response.status_code();
    if let Err(err) = check_status(status) {
        console_log!("[Worker] {} answered {}", target, status);
        return Err(err);
    }

    let html = response.text().await.map_err(internal)?;
    console_log!("[Worker] Fetched {} bytes", html.len());
    Ok(html)
}

async fn analyze_target(target: ApiResult<Url>) -> ApiResult<Analysis> {
    let target = target?;
    console_log!("[Worker] Processing URL: {}", target);
    let html = fetch_page(&target).await?;
    Ok(analyze(target.as_str(), &html))
}

fn cors_headers() -> Result<Headers> {
    let headers = Headers::new();
    headers.set("Access-Control-Allow-Origin", "*")?;
    headers.set("Access-Control-Allow-Methods", "GET, POST, OPTIONS")?;
    headers.set("Access-Control-Allow-Headers", "Content-Type")?;
    Ok(headers)
}

fn json_response<T: Serialize>(body: &T, status: u16) -> Result<Response> {
    let headers = cors_headers()?;
    headers.set("Content-Type", "application/json")?;
    Response::ok(serde_json::to_string(body)?).map(|r| r.with_headers(headers).with_status(status))
}

fn respond(outcome: ApiResult<Analysis>) -> Result<Response> {
    match outcome {
        Ok(analysis) => {
            console_log!(
                "[Worker] {} scored {}/100 with {} recommendation(s)",
                analysis.url,
                analysis.score.total,
                analysis.recommendations.len()
            );
            json_response(&analysis, 200)
        }
        Err(err) => {
            console_log!("[Worker] {} -> {}", err, err.status_code());
            json_response(&err.to_body(), err.status_code())
        }
    }
}

#[event(fetch)]
async fn main(mut req: Request, _env: Env, _ctx: Context) -> Result<Response> {
    console_error_panic_hook::set_once();

    let url = req.url()?;
    console_log!("[Worker] {} {}", req.method(), url.path());

    match route(&req.method(), url.path()) {
        Route::Preflight => {
            let headers = cors_headers()?;
            Response::empty().map(|r| r.with_headers(headers))
        }
        Route::Analyze => {
            let target = match req.text().await {
                Ok(body) => parse_analyze_request(&body),
                Err(_) => Err(ApiError::MalformedBody),
            };
            respond(analyze_target(target).await)
        }
        Route::AnalyzeQuery => {
            let target = validate_target(query_target(url.query()).as_deref());
            respond(analyze_target(target).await)
        }
        Route::Health => json_response(&health(), 200),
        Route::NotFound => Response::error("Not Found", 404),
    }
}
