//! Shared helpers for API integration tests.
//!
//! Requests are sent straight into the router with `tower::ServiceExt`, no
//! TCP listener involved.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tourify_api::config::ServerConfig;
use tourify_api::router::build_app_router;
use tourify_api::state::AppState;
use tourify_db::DbPool;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
    }
}

/// Build the full application router over the given store.
pub fn build_test_app(pool: DbPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build a router over a fresh, empty store.
pub fn fresh_app() -> (Router, DbPool) {
    let pool = tourify_db::create_pool();
    (build_test_app(pool.clone()), pool)
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    with_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    with_json(app, Method::PUT, uri, body).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a tour through the API and return its id.
pub async fn create_tour(app: Router, name: &str) -> i64 {
    let response = post_json(app, "/api/tours", serde_json::json!({ "name": name })).await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a scene through the API and return its id.
pub async fn create_scene(app: Router, tour_id: i64, name: &str) -> i64 {
    let response = post_json(
        app,
        &format!("/api/tours/{tour_id}/scenes"),
        serde_json::json!({ "name": name, "panorama": format!("https://cdn.test/{name}.jpg") }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

pub fn marker_json(id: &str, target: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "yaw": 1.25,
        "pitch": -0.2,
        "config": { "data": { "targetSceneId": target, "label": "Next", "type": "arrow" } }
    })
}
