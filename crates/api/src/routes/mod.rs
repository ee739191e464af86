pub mod health;
pub mod scene;
pub mod tour;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tours                                 list, create
/// /tours/{id}                            get, update, delete (cascades to scenes)
/// /tours/{id}/scenes                     list, create
///
/// /scenes/{id}                           get, update, delete
/// /scenes/{id}/markers                   append marker (POST)
/// /scenes/{id}/markers/{marker_id}       remove marker (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tours", tour::router())
        .nest("/scenes", scene::router())
}
