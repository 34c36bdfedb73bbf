//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::http::Uri;
use axum::middleware::Next;
use axum::response::Response;

/// Logs method, path, request kind, status and latency.
///
/// The query string is never logged, since it carries file paths. Server
/// errors and timeouts are logged at `warn`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let kind = request_kind(request.uri());
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() || status == axum::http::StatusCode::REQUEST_TIMEOUT {
        tracing::warn!(%method, %path, kind, status = status.as_u16(), latency_ms, "HTTP request failed");
    } else {
        tracing::info!(%method, %path, kind, status = status.as_u16(), latency_ms, "HTTP request");
    }

    response
}

/// What a request asks for: a listing, one file's content, the health
/// probe, or a page.
fn request_kind(uri: &Uri) -> &'static str {
    match uri.path() {
        "/files" if requests_file(uri.query()) => "content",
        "/files" => "listing",
        "/health" => "health",
        _ => "page",
    }
}

fn requests_file(query: Option<&str>) -> bool {
    query.is_some_and(|q| {
        q.split('&')
            .any(|pair| pair.strip_prefix("file_path=").is_some_and(|v| !v.is_empty()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(uri: &str) -> &'static str {
        request_kind(&uri.parse().unwrap())
    }

    #[test]
    fn test_request_kind() {
        assert_eq!(kind("/files"), "listing");
        assert_eq!(kind("/files?file_path="), "listing");
        assert_eq!(kind("/files?content_type=html&file_path=a.txt"), "content");
        assert_eq!(kind("/health"), "health");
        assert_eq!(kind("/explorer"), "page");
    }
}
