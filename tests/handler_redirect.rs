mod common;

use axum_test::TestServer;
use serde_json::json;
use short_url::api::dto::url::UrlResponse;
use short_url::routes::app_router;

#[tokio::test]
async fn test_redirect_success() {
    let server = TestServer::new(app_router(common::create_test_state(), None)).unwrap();

    let created = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/target" }))
        .await
        .json::<UrlResponse>();

    let response = server.get(&format!("/{}", created.id)).await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = TestServer::new(app_router(common::create_test_state(), None)).unwrap();

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_shorten_rejects_url_with_newline() {
    let server = TestServer::new(app_router(common::create_test_state(), None)).unwrap();

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/a\nb" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_redirect_non_ascii_url() {
    let server = TestServer::new(app_router(common::create_test_state(), None)).unwrap();

    let created = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/café" }))
        .await
        .json::<UrlResponse>();

    let resolved = server
        .get(&format!("/url/{}", created.id))
        .await
        .json::<UrlResponse>();
    assert_eq!(resolved.url, "https://example.com/café");

    let response = server.get(&format!("/{}", created.id)).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/caf%C3%A9");
}
