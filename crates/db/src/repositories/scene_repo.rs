//! Repository for scenes and their embedded markers.

use tourify_core::error::CoreError;
use tourify_core::marker::Marker;
use tourify_core::types::DbId;

use crate::models::scene::{CreateScene, Scene, UpdateScene};
use crate::DbPool;

/// Provides CRUD operations for scenes.
pub struct SceneRepo;

impl SceneRepo {
    /// Insert a new scene. Markers default to an empty list.
    ///
    /// `input.tour_id` is stored as given; the tour need not exist.
    pub async fn create(pool: &DbPool, input: &CreateScene) -> Scene {
        let mut tables = pool.write().await;
        let id = tables.allocate_scene_id();
        let scene = Scene {
            id,
            tour_id: input.tour_id,
            name: input.name.clone(),
            panorama: input.panorama.clone(),
            markers: input.markers.clone().unwrap_or_default(),
        };
        tables.scenes.insert(id, scene.clone());
        tracing::debug!(scene_id = id, tour_id = input.tour_id, "Scene created");
        scene
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Option<Scene> {
        pool.read().await.scenes.get(&id).cloned()
    }

    /// List the scenes of a tour, ordered by id.
    pub async fn list_by_tour(pool: &DbPool, tour_id: DbId) -> Vec<Scene> {
        pool.read()
            .await
            .scenes
            .values()
            .filter(|scene| scene.tour_id == tour_id)
            .cloned()
            .collect()
    }

    /// Update a scene. Only non-`None` fields in `input` are applied; a
    /// provided marker list replaces the stored one wholesale.
    ///
    /// Returns `None` if no scene with the given `id` exists.
    pub async fn update(pool: &DbPool, id: DbId, input: &UpdateScene) -> Option<Scene> {
        let mut tables = pool.write().await;
        let scene = tables.scenes.get_mut(&id)?;
        scene.merge(input);
        tracing::debug!(scene_id = id, markers = scene.markers.len(), "Scene updated");
        Some(scene.clone())
    }

    /// Delete a scene by id. Returns `true` if it existed.
    ///
    /// Markers on other scenes that target it are left dangling.
    pub async fn delete(pool: &DbPool, id: DbId) -> bool {
        let removed = pool.write().await.scenes.remove(&id).is_some();
        tracing::debug!(scene_id = id, removed, "Scene deleted");
        removed
    }

    /// Append a marker after the scene's existing markers.
    ///
    /// Returns `Ok(None)` if the scene does not exist and
    /// [`CoreError::Conflict`] if the marker id is already used on it.
    pub async fn append_marker(
        pool: &DbPool,
        scene_id: DbId,
        marker: Marker,
    ) -> Result<Option<Scene>, CoreError> {
        let mut tables = pool.write().await;
        let Some(scene) = tables.scenes.get_mut(&scene_id) else {
            return Ok(None);
        };
        if scene.markers.iter().any(|m| m.id == marker.id) {
            return Err(CoreError::Conflict(format!(
                "Marker '{}' already exists on scene {scene_id}",
                marker.id
            )));
        }
        tracing::debug!(scene_id, marker_id = %marker.id, "Marker appended");
        scene.markers.push(marker);
        Ok(Some(scene.clone()))
    }

    /// Remove a marker from a scene.
    ///
    /// Returns `None` if the scene does not exist, otherwise whether a marker
    /// with that id was removed.
    pub async fn remove_marker(pool: &DbPool, scene_id: DbId, marker_id: &str) -> Option<bool> {
        let mut tables = pool.write().await;
        let scene = tables.scenes.get_mut(&scene_id)?;
        let before = scene.markers.len();
        scene.markers.retain(|m| m.id != marker_id);
        let removed = scene.markers.len() < before;
        tracing::debug!(scene_id, marker_id, removed, "Marker removed");
        Some(removed)
    }
}
