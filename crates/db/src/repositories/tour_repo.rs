//! Repository for tours.

use tourify_core::types::DbId;

use crate::models::tour::{CreateTour, Tour, UpdateTour};
use crate::DbPool;

/// Provides CRUD operations for tours.
pub struct TourRepo;

impl TourRepo {
    /// Insert a new tour, returning it with its assigned id.
    ///
    /// An empty description is stored as `None`.
    pub async fn create(pool: &DbPool, input: &CreateTour) -> Tour {
        let mut tables = pool.write().await;
        let id = tables.allocate_tour_id();
        let tour = Tour {
            id,
            name: input.name.clone(),
            description: input.description.clone().filter(|d| !d.is_empty()),
        };
        tables.tours.insert(id, tour.clone());
        tracing::debug!(tour_id = id, "Tour created");
        tour
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Option<Tour> {
        pool.read().await.tours.get(&id).cloned()
    }

    /// List all tours ordered by id.
    pub async fn list(pool: &DbPool) -> Vec<Tour> {
        pool.read().await.tours.values().cloned().collect()
    }

    /// Update a tour. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no tour with the given `id` exists.
    pub async fn update(pool: &DbPool, id: DbId, input: &UpdateTour) -> Option<Tour> {
        let mut tables = pool.write().await;
        let tour = tables.tours.get_mut(&id)?;
        tour.merge(input);
        tracing::debug!(tour_id = id, "Tour updated");
        Some(tour.clone())
    }

    /// Delete a tour and every scene whose `tour_id` matches.
    ///
    /// Scenes are removed even when the tour itself does not exist (they may
    /// reference it without it ever having been created). Returns `true` if
    /// the tour was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> bool {
        let mut tables = pool.write().await;
        let before = tables.scenes.len();
        tables.scenes.retain(|_, scene| scene.tour_id != id);
        let scenes_removed = before - tables.scenes.len();
        let removed = tables.tours.remove(&id).is_some();
        tracing::debug!(tour_id = id, removed, scenes_removed, "Tour deleted");
        removed
    }
}
