//! HTTP-level integration tests for the tour endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_scene, create_tour, delete, fresh_app, get, post_json, post_raw, put_json,
};
use serde_json::json;

#[tokio::test]
async fn create_tour_returns_201_with_id() {
    let (app, _) = fresh_app();
    let response = post_json(
        app,
        "/api/tours",
        json!({ "name": "My Virtual Tour", "description": "Walkthrough" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "My Virtual Tour");
    assert_eq!(json["description"], "Walkthrough");
}

#[tokio::test]
async fn created_tour_round_trips_through_get() {
    let (app, _) = fresh_app();
    let created = body_json(
        post_json(app.clone(), "/api/tours", json!({ "name": "Villa" })).await,
    )
    .await;

    let response = get(app, &format!("/api/tours/{}", created["id"])).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched, created);
    assert!(fetched["description"].is_null());
}

#[tokio::test]
async fn list_tours_returns_all() {
    let (app, _) = fresh_app();
    create_tour(app.clone(), "A").await;
    create_tour(app.clone(), "B").await;

    let json = body_json(get(app, "/api/tours").await).await;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["A", "B"]);
}

#[tokio::test]
async fn create_tour_without_name_returns_400() {
    let (app, _) = fresh_app();
    let response = post_json(app, "/api/tours", json!({ "description": "no name" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid tour data");
}

#[tokio::test]
async fn create_tour_with_blank_name_returns_400() {
    let (app, _) = fresh_app();
    let response = post_json(app, "/api/tours", json!({ "name": "   " })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let (app, _) = fresh_app();
    let response = post_raw(app, "/api/tours", "{ not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_tour_merges_fields() {
    let (app, _) = fresh_app();
    post_json(
        app.clone(),
        "/api/tours",
        json!({ "name": "Villa", "description": "Keep me" }),
    )
    .await;

    let response = put_json(app, "/api/tours/1", json!({ "name": "Manor" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Manor");
    assert_eq!(json["description"], "Keep me");
}

#[tokio::test]
async fn delete_tour_removes_its_scenes() {
    let (app, _) = fresh_app();
    let tour_id = create_tour(app.clone(), "Villa").await;
    let other_id = create_tour(app.clone(), "Other").await;
    let scene_id = create_scene(app.clone(), tour_id, "hall").await;
    create_scene(app.clone(), other_id, "garden").await;

    let response = delete(app.clone(), &format!("/api/tours/{tour_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/api/scenes/{scene_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let remaining = body_json(get(app, &format!("/api/tours/{other_id}/scenes")).await).await;
    assert_eq!(remaining.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_tour_returns_404_on_every_route() {
    let (app, _) = fresh_app();

    let responses = [
        get(app.clone(), "/api/tours/999").await,
        put_json(app.clone(), "/api/tours/999", json!({ "name": "x" })).await,
        delete(app.clone(), "/api/tours/999").await,
        get(app.clone(), "/api/tours/999/scenes").await,
        post_json(
            app.clone(),
            "/api/tours/999/scenes",
            json!({ "name": "hall", "panorama": "https://cdn.test/hall.jpg" }),
        )
        .await,
    ];

    for response in responses {
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["error"], "Tour with id 999 not found");
    }
}

#[tokio::test]
async fn unparseable_ids_return_404_json() {
    let (app, _) = fresh_app();
    let responses = vec![
        get(app.clone(), "/api/tours/abc").await,
        get(app.clone(), "/api/tours/99999999999999999999").await,
        delete(app.clone(), "/api/tours/abc").await,
        get(app.clone(), "/api/tours/abc/scenes").await,
        put_json(app.clone(), "/api/scenes/abc", json!({ "name": "hall" })).await,
        delete(app.clone(), "/api/scenes/abc/markers/m1").await,
    ];

    for response in responses {
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["error"], "Resource not found");
    }
}
