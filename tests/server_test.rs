//! Integration tests for the health probe and the explorer page.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["roots"], 1);
}

#[tokio::test]
async fn test_explorer_page_served_at_both_paths() {
    let app = helpers::TestApp::new().await;

    for uri in ["/explorer", "/"] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::OK, "GET {uri}");
        assert!(response.text.contains("explorer"));
    }
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/nope").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
