//! In-memory persistence for tours, scenes and users.
//!
//! The store keeps one ordered map per entity kind plus an id counter each,
//! behind a single async `RwLock`. Every repository call takes the lock once,
//! so multi-step operations (cascade delete, marker append) are atomic with
//! respect to concurrent requests. Nothing survives a restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tourify_core::error::CoreError;
use tourify_core::types::DbId;

use crate::models::scene::Scene;
use crate::models::tour::Tour;
use crate::models::user::User;

pub mod models;
pub mod repositories;

/// Shared handle to the store, cloned into every request.
pub type DbPool = Arc<MemStore>;

/// Create an empty store. Id counters start at 1.
pub fn create_pool() -> DbPool {
    Arc::new(MemStore::default())
}

/// Entity counts reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub tours: usize,
    pub scenes: usize,
    pub users: usize,
}

/// Report how many entities of each kind are stored.
pub async fn counts(pool: &DbPool) -> StoreCounts {
    let tables = pool.read().await;
    StoreCounts {
        tours: tables.tours.len(),
        scenes: tables.scenes.len(),
        users: tables.users.len(),
    }
}

/// Check that the store is usable: the lock can be taken and no id counter
/// has fallen behind an id already in use (which would make the next insert
/// overwrite a stored entity).
pub async fn health_check(pool: &DbPool) -> Result<(), CoreError> {
    pool.read().await.check_counters()
}

#[derive(Debug, Default)]
pub struct MemStore {
    tables: RwLock<Tables>,
}

impl MemStore {
    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}

#[derive(Debug)]
pub(crate) struct Tables {
    pub(crate) users: BTreeMap<DbId, User>,
    pub(crate) tours: BTreeMap<DbId, Tour>,
    pub(crate) scenes: BTreeMap<DbId, Scene>,
    next_user_id: DbId,
    next_tour_id: DbId,
    next_scene_id: DbId,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            tours: BTreeMap::new(),
            scenes: BTreeMap::new(),
            next_user_id: 1,
            next_tour_id: 1,
            next_scene_id: 1,
        }
    }
}

impl Tables {
    pub(crate) fn allocate_user_id(&mut self) -> DbId {
        bump(&mut self.next_user_id)
    }

    pub(crate) fn allocate_tour_id(&mut self) -> DbId {
        bump(&mut self.next_tour_id)
    }

    pub(crate) fn allocate_scene_id(&mut self) -> DbId {
        bump(&mut self.next_scene_id)
    }

    fn check_counters(&self) -> Result<(), CoreError> {
        ensure_ahead("user", &self.users, self.next_user_id)?;
        ensure_ahead("tour", &self.tours, self.next_tour_id)?;
        ensure_ahead("scene", &self.scenes, self.next_scene_id)
    }
}

fn ensure_ahead<T>(kind: &str, table: &BTreeMap<DbId, T>, next: DbId) -> Result<(), CoreError> {
    match table.keys().next_back() {
        Some(&max) if max >= next => Err(CoreError::Internal(format!(
            "{kind} id counter at {next} but id {max} is already stored"
        ))),
        _ => Ok(()),
    }
}

fn bump(counter: &mut DbId) -> DbId {
    let id = *counter;
    *counter += 1;
    id
}
