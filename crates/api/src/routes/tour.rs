//! Route definitions for tours and their scene collections.

use axum::routing::get;
use axum::Router;

use crate::handlers::{scene, tour};
use crate::state::AppState;

/// Routes mounted at `/tours`.
///
/// ```text
/// GET    /                list
/// POST   /                create
/// GET    /{id}            get_by_id
/// PUT    /{id}            update
/// DELETE /{id}            delete
/// GET    /{id}/scenes     scene::list_by_tour
/// POST   /{id}/scenes     scene::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tour::list).post(tour::create))
        .route(
            "/{id}",
            get(tour::get_by_id).put(tour::update).delete(tour::delete),
        )
        .route(
            "/{id}/scenes",
            get(scene::list_by_tour).post(scene::create),
        )
}
