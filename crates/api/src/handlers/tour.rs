//! Handlers for the `/tours` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tourify_core::error::CoreError;
use tourify_core::types::DbId;
use tourify_db::models::tour::{CreateTour, Tour, UpdateTour};
use tourify_db::repositories::TourRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::state::AppState;

/// Look up a tour or fail with 404.
pub(crate) async fn ensure_tour_exists(state: &AppState, id: DbId) -> AppResult<Tour> {
    TourRepo::find_by_id(&state.pool, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tour", id }))
}

/// GET /api/tours
pub async fn list(State(state): State<AppState>) -> Json<Vec<Tour>> {
    Json(TourRepo::list(&state.pool).await)
}

/// POST /api/tours
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTour>,
) -> AppResult<(StatusCode, Json<Tour>)> {
    let tour = TourRepo::create(&state.pool, &input).await;
    tracing::info!(tour_id = tour.id, name = %tour.name, "Tour created");
    Ok((StatusCode::CREATED, Json(tour)))
}

/// GET /api/tours/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<Tour>> {
    let tour = ensure_tour_exists(&state, id).await?;
    Ok(Json(tour))
}

/// PUT /api/tours/{id}
pub async fn update(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTour>,
) -> AppResult<Json<Tour>> {
    let tour = TourRepo::update(&state.pool, id, &input)
        .await
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tour", id }))?;
    Ok(Json(tour))
}

/// DELETE /api/tours/{id}
///
/// Also deletes every scene belonging to the tour.
pub async fn delete(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<StatusCode> {
    if TourRepo::delete(&state.pool, id).await {
        tracing::info!(tour_id = id, "Tour deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Tour", id }))
    }
}
