//! Editing state for the tour builder.
//!
//! Holds the scene list a builder is working on, which scene is active, the
//! edit/preview mode and a hotspot position waiting for confirmation. It does
//! no I/O: operations that change persisted data return the update to send,
//! and the caller feeds server responses back in via [`TourBuilder::load_scenes`],
//! [`TourBuilder::scene_created`] or [`TourBuilder::replace_scene`].

use crate::error::CoreError;
use crate::marker::{self, Marker, MarkerType};
use crate::types::DbId;

/// The minimal view of a scene the builder needs.
pub trait BuilderScene {
    fn id(&self) -> DbId;
    fn markers(&self) -> &[Marker];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuilderMode {
    /// Clicking the panorama places hotspots.
    #[default]
    Edit,
    /// Clicking a hotspot navigates to its target scene.
    Preview,
}

/// Angular position captured from a panorama click, awaiting a target scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingHotspot {
    pub yaw: f64,
    pub pitch: f64,
}

/// Result of confirming a hotspot: the new marker and the full marker list
/// to persist on the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPlacement {
    pub scene_id: DbId,
    pub marker: Marker,
    pub markers: Vec<Marker>,
}

#[derive(Debug)]
pub struct TourBuilder<S> {
    scenes: Vec<S>,
    active_scene_id: Option<DbId>,
    mode: BuilderMode,
    pending: Option<PendingHotspot>,
}

impl<S> Default for TourBuilder<S> {
    fn default() -> Self {
        Self {
            scenes: Vec::new(),
            active_scene_id: None,
            mode: BuilderMode::default(),
            pending: None,
        }
    }
}

impl<S: BuilderScene> TourBuilder<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scenes(&self) -> &[S] {
        &self.scenes
    }

    pub fn mode(&self) -> BuilderMode {
        self.mode
    }

    pub fn active_scene_id(&self) -> Option<DbId> {
        self.active_scene_id
    }

    pub fn pending_hotspot(&self) -> Option<PendingHotspot> {
        self.pending
    }

    /// The active scene, if its id resolves against the loaded list.
    ///
    /// A dangling id (e.g. a marker target that was deleted) yields `None`.
    pub fn active_scene(&self) -> Option<&S> {
        let id = self.active_scene_id?;
        self.scenes.iter().find(|s| s.id() == id)
    }

    /// Replace the scene list with freshly fetched data.
    ///
    /// Selects the first scene when nothing is active yet.
    pub fn load_scenes(&mut self, scenes: Vec<S>) {
        self.scenes = scenes;
        if self.active_scene_id.is_none() {
            self.active_scene_id = self.scenes.first().map(BuilderScene::id);
        }
    }

    pub fn select_scene(&mut self, scene_id: DbId) {
        self.active_scene_id = Some(scene_id);
    }

    /// Switching mode drops any hotspot awaiting confirmation.
    pub fn set_mode(&mut self, mode: BuilderMode) {
        self.mode = mode;
        if mode == BuilderMode::Preview {
            self.pending = None;
        }
    }

    /// Record a click on the panorama. Returns `true` if a pending hotspot
    /// was captured (edit mode only).
    pub fn click_panorama(&mut self, yaw: f64, pitch: f64) -> bool {
        if self.mode != BuilderMode::Edit {
            return false;
        }
        self.pending = Some(PendingHotspot { yaw, pitch });
        true
    }

    pub fn cancel_hotspot(&mut self) {
        self.pending = None;
    }

    /// Turn the pending hotspot into a marker on the active scene using a
    /// clock-derived marker id.
    pub fn confirm_hotspot(
        &mut self,
        target_scene_id: DbId,
        label: Option<String>,
        marker_type: Option<MarkerType>,
    ) -> Result<MarkerPlacement, CoreError> {
        self.confirm_hotspot_with_id(
            marker::generate_marker_id(),
            target_scene_id,
            label,
            marker_type,
        )
    }

    /// Like [`confirm_hotspot`](Self::confirm_hotspot) with an explicit base id.
    ///
    /// The new marker is appended after the scene's existing markers. If the
    /// id is already taken on the scene a numeric suffix is added.
    pub fn confirm_hotspot_with_id(
        &mut self,
        marker_id: String,
        target_scene_id: DbId,
        label: Option<String>,
        marker_type: Option<MarkerType>,
    ) -> Result<MarkerPlacement, CoreError> {
        let pending = self
            .pending
            .ok_or_else(|| CoreError::Validation("No hotspot is pending".into()))?;
        let scene = self.active_scene().ok_or_else(|| {
            CoreError::Validation("No active scene to place a hotspot on".into())
        })?;

        let existing = scene.markers();
        let id = unique_marker_id(marker_id, existing);
        let label = label.filter(|l| !l.trim().is_empty());
        let new_marker = Marker::new(
            id,
            pending.yaw,
            pending.pitch,
            target_scene_id,
            label,
            marker_type.unwrap_or_default(),
        );
        marker::validate_marker(&new_marker)?;

        let mut markers = existing.to_vec();
        markers.push(new_marker.clone());
        let placement = MarkerPlacement {
            scene_id: scene.id(),
            marker: new_marker,
            markers,
        };

        self.pending = None;
        Ok(placement)
    }

    /// Handle a click on a marker. In preview mode the builder navigates to
    /// the marker's target and returns its id. Existence of the target scene
    /// is not checked.
    pub fn click_marker(&mut self, marker_id: &str) -> Option<DbId> {
        if self.mode != BuilderMode::Preview {
            return None;
        }
        let target = self
            .active_scene()?
            .markers()
            .iter()
            .find(|m| m.id == marker_id)?
            .target_scene_id();
        self.active_scene_id = Some(target);
        Some(target)
    }

    /// A scene was created on the server: track it and make it active.
    pub fn scene_created(&mut self, scene: S) {
        self.active_scene_id = Some(scene.id());
        self.replace_scene(scene);
    }

    /// Insert or replace a scene in the local list by id.
    pub fn replace_scene(&mut self, scene: S) {
        match self.scenes.iter_mut().find(|s| s.id() == scene.id()) {
            Some(slot) => *slot = scene,
            None => self.scenes.push(scene),
        }
    }

    /// A scene was deleted on the server. When it was active, the first
    /// remaining scene becomes active (or none).
    pub fn scene_deleted(&mut self, scene_id: DbId) {
        self.scenes.retain(|s| s.id() != scene_id);
        if self.active_scene_id == Some(scene_id) {
            self.active_scene_id = self.scenes.first().map(BuilderScene::id);
            self.pending = None;
        }
    }

    /// Number of hotspots on a loaded scene.
    pub fn hotspot_count(&self, scene_id: DbId) -> usize {
        self.scenes
            .iter()
            .find(|s| s.id() == scene_id)
            .map_or(0, |s| s.markers().len())
    }
}

fn unique_marker_id(base: String, existing: &[Marker]) -> String {
    let taken = |id: &str| existing.iter().any(|m| m.id == id);
    if !taken(&base) {
        return base;
    }
    let mut n = 1;
    loop {
        let candidate = format!("{base}_{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
