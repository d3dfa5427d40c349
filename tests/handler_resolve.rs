mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use linkcut::api::handlers::resolve_handler;
use serde_json::json;

fn test_server(state: &linkcut::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/resolve/{alias}", get(resolve_handler))
        .with_state(state.clone());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_resolve_primed_alias() {
    let state = common::create_test_state();
    common::prime_link(&state, "abc123", "https://example.com/docs").await;

    let server = test_server(&state);

    let response = server.get("/api/resolve/abc123").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "url": "https://example.com/docs" }));
}

#[tokio::test]
async fn test_resolve_unknown_alias_is_not_found() {
    let state = common::create_test_state();
    common::prime_link(&state, "abc123", "https://example.com/docs").await;

    let server = test_server(&state);

    let response = server.get("/api/resolve/zzz999").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["alias"], "zzz999");
}

#[tokio::test]
async fn test_resolve_on_empty_store_is_not_found() {
    let state = common::create_test_state();
    let server = test_server(&state);

    let response = server.get("/api/resolve/unknown-alias").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
