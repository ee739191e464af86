//! Route definitions for individual scenes and their markers.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{marker, scene};
use crate::state::AppState;

/// Routes mounted at `/scenes`.
///
/// ```text
/// GET    /{id}                        get_by_id
/// PUT    /{id}                        update
/// DELETE /{id}                        delete
/// POST   /{id}/markers                marker::append
/// DELETE /{id}/markers/{marker_id}    marker::remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(scene::get_by_id)
                .put(scene::update)
                .delete(scene::delete),
        )
        .route("/{id}/markers", post(marker::append))
        .route("/{id}/markers/{marker_id}", delete(marker::remove))
}
