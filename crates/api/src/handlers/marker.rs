//! Handlers for markers embedded in a scene.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tourify_core::error::CoreError;
use tourify_core::marker::Marker;
use tourify_core::types::DbId;
use tourify_db::models::scene::Scene;
use tourify_db::repositories::SceneRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::state::AppState;

/// POST /api/scenes/{id}/markers
///
/// Appends the marker after the scene's existing markers and returns the
/// updated scene. The target scene is not checked for existence.
pub async fn append(
    State(state): State<AppState>,
    ValidatedPath(scene_id): ValidatedPath<DbId>,
    ValidatedJson(marker): ValidatedJson<Marker>,
) -> AppResult<(StatusCode, Json<Scene>)> {
    let scene = SceneRepo::append_marker(&state.pool, scene_id, marker)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Scene",
            id: scene_id,
        }))?;
    Ok((StatusCode::CREATED, Json(scene)))
}

/// DELETE /api/scenes/{id}/markers/{marker_id}
pub async fn remove(
    State(state): State<AppState>,
    ValidatedPath((scene_id, marker_id)): ValidatedPath<(DbId, String)>,
) -> AppResult<StatusCode> {
    match SceneRepo::remove_marker(&state.pool, scene_id, &marker_id).await {
        Some(true) => Ok(StatusCode::NO_CONTENT),
        Some(false) => Err(AppError::NotFound(format!(
            "Marker '{marker_id}' not found on scene {scene_id}"
        ))),
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Scene",
            id: scene_id,
        })),
    }
}
