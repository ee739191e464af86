//! Handlers for scenes.
//!
//! Listing and creation are nested under their tour
//! (`/tours/{id}/scenes`); everything else addresses a scene directly
//! (`/scenes/{id}`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tourify_core::error::CoreError;
use tourify_core::types::DbId;
use tourify_db::models::scene::{CreateScene, Scene, UpdateScene};
use tourify_db::repositories::SceneRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::handlers::tour::ensure_tour_exists;
use crate::state::AppState;

fn scene_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Scene",
        id,
    })
}

/// GET /api/tours/{tour_id}/scenes
pub async fn list_by_tour(
    State(state): State<AppState>,
    ValidatedPath(tour_id): ValidatedPath<DbId>,
) -> AppResult<Json<Vec<Scene>>> {
    ensure_tour_exists(&state, tour_id).await?;
    let scenes = SceneRepo::list_by_tour(&state.pool, tour_id).await;
    Ok(Json(scenes))
}

/// POST /api/tours/{tour_id}/scenes
///
/// Overrides `input.tour_id` with the value from the URL path.
pub async fn create(
    State(state): State<AppState>,
    ValidatedPath(tour_id): ValidatedPath<DbId>,
    ValidatedJson(mut input): ValidatedJson<CreateScene>,
) -> AppResult<(StatusCode, Json<Scene>)> {
    ensure_tour_exists(&state, tour_id).await?;
    input.tour_id = tour_id;
    let scene = SceneRepo::create(&state.pool, &input).await;
    tracing::info!(scene_id = scene.id, tour_id, "Scene created");
    Ok((StatusCode::CREATED, Json(scene)))
}

/// GET /api/scenes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<Scene>> {
    let scene = SceneRepo::find_by_id(&state.pool, id)
        .await
        .ok_or_else(|| scene_not_found(id))?;
    Ok(Json(scene))
}

/// PUT /api/scenes/{id}
///
/// Merges the given fields over the stored scene. A `markers` list replaces
/// the stored list; use the markers endpoint to append.
pub async fn update(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateScene>,
) -> AppResult<Json<Scene>> {
    let scene = SceneRepo::update(&state.pool, id, &input)
        .await
        .ok_or_else(|| scene_not_found(id))?;
    Ok(Json(scene))
}

/// DELETE /api/scenes/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<StatusCode> {
    if SceneRepo::delete(&state.pool, id).await {
        tracing::info!(scene_id = id, "Scene deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(scene_not_found(id))
    }
}
