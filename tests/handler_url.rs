mod common;

use axum_test::TestServer;
use serde_json::json;
use short_url::api::dto::url::UrlResponse;
use short_url::api::middleware::rate_limit::RateLimit;
use short_url::routes::app_router;

fn test_server() -> TestServer {
    let app = app_router(common::create_test_state(), None);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_then_resolve() {
    let server = test_server();

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/a" }))
        .await;

    response.assert_status_ok();

    let created = response.json::<UrlResponse>();
    assert_eq!(created.id.len(), 8);
    assert_eq!(created.url, "https://example.com/a");

    let response = server.get(&format!("/url/{}", created.id)).await;

    response.assert_status_ok();
    assert_eq!(response.json::<UrlResponse>(), created);
}

#[tokio::test]
async fn test_shorten_same_url_twice_gives_distinct_ids() {
    let server = test_server();
    let body = json!({ "url": "https://example.com/a" });

    let first = server.post("/url").json(&body).await.json::<UrlResponse>();
    let second = server.post("/url").json(&body).await.json::<UrlResponse>();

    assert_ne!(first.id, second.id);

    let a = server.get(&format!("/url/{}", first.id)).await;
    let b = server.get(&format!("/url/{}", second.id)).await;
    assert_eq!(a.json::<UrlResponse>().url, "https://example.com/a");
    assert_eq!(b.json::<UrlResponse>().url, "https://example.com/a");
}

#[tokio::test]
async fn test_shorten_preserves_url_verbatim() {
    let server = test_server();
    let url = "https://Example.COM/Path/?b=2&a=1#frag";

    let created = server
        .post("/url")
        .json(&json!({ "url": url }))
        .await
        .json::<UrlResponse>();

    let resolved = server
        .get(&format!("/url/{}", created.id))
        .await
        .json::<UrlResponse>();

    assert_eq!(resolved.url, url);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = test_server();

    let response = server
        .post("/url")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_rejects_non_http_scheme() {
    let server = test_server();

    let response = server
        .post("/url")
        .json(&json!({ "url": "ftp://example.com/file" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let server = test_server();

    let response = server.post("/url").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let server = test_server();

    let response = server
        .post("/url")
        .text("{\"url\":")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_get_url_not_found() {
    let server = test_server();

    let response = server.get("/url/doesnotexist").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_get_url_malformed_id_is_not_found() {
    let server = test_server();

    let response = server.get("/url/bad%20id!").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_rate_limit_rejects_burst_overflow() {
    let limits = RateLimit {
        per_second: 60,
        burst: 1,
    };
    let app = app_router(common::create_test_state(), Some(limits))
        .layer(common::MockConnectInfoLayer);
    let server = TestServer::new(app).unwrap();

    let first = server.get("/url/doesnotexist").await;
    first.assert_status_not_found();

    let second = server.get("/url/doesnotexist").await;
    assert_eq!(second.status_code(), 429);
}
