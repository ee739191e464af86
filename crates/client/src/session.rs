//! A tour-builder session backed by the REST API.
//!
//! Local editing state lives in a [`TourBuilder`]; every mutation is sent to
//! the server first and the scene list is refetched afterwards, so the local
//! view always reflects what the server stored.

use tourify_core::error::CoreError;
use tourify_core::marker::MarkerType;
use tourify_core::tour_builder::{BuilderMode, TourBuilder};
use tourify_core::types::DbId;
use tourify_db::models::scene::{CreateScene, Scene, UpdateScene};
use tourify_db::models::tour::CreateTour;

use crate::api::ApiClient;
use crate::error::ClientError;

/// Name of the tour created when the requested one does not exist.
pub const DEFAULT_TOUR_NAME: &str = "My Virtual Tour";
/// Description of the tour created when the requested one does not exist.
pub const DEFAULT_TOUR_DESCRIPTION: &str = "A virtual tour created with VirtuTour Builder";

pub struct BuilderSession {
    client: ApiClient,
    tour_id: DbId,
    builder: TourBuilder<Scene>,
}

impl BuilderSession {
    /// Open the builder on `tour_id`, creating the default tour when the
    /// server does not know it. The session continues with whatever id the
    /// server assigned.
    pub async fn open(client: ApiClient, tour_id: DbId) -> Result<Self, ClientError> {
        let (tour_id, scenes) = match client.list_scenes(tour_id).await {
            Ok(scenes) => (tour_id, scenes),
            Err(e) if e.is_not_found() => {
                let tour = client
                    .create_tour(&CreateTour {
                        name: DEFAULT_TOUR_NAME.into(),
                        description: Some(DEFAULT_TOUR_DESCRIPTION.into()),
                    })
                    .await?;
                tracing::info!(requested = tour_id, created = tour.id, "Created default tour");
                (tour.id, Vec::new())
            }
            Err(e) => return Err(e),
        };

        let mut builder = TourBuilder::new();
        builder.load_scenes(scenes);
        Ok(Self {
            client,
            tour_id,
            builder,
        })
    }

    pub fn tour_id(&self) -> DbId {
        self.tour_id
    }

    pub fn builder(&self) -> &TourBuilder<Scene> {
        &self.builder
    }

    pub fn scenes(&self) -> &[Scene] {
        self.builder.scenes()
    }

    pub fn active_scene(&self) -> Option<&Scene> {
        self.builder.active_scene()
    }

    pub fn select_scene(&mut self, scene_id: DbId) {
        self.builder.select_scene(scene_id);
    }

    pub fn set_mode(&mut self, mode: BuilderMode) {
        self.builder.set_mode(mode);
    }

    /// Forward a panorama click; see [`TourBuilder::click_panorama`].
    pub fn click_panorama(&mut self, yaw: f64, pitch: f64) -> bool {
        self.builder.click_panorama(yaw, pitch)
    }

    pub fn cancel_hotspot(&mut self) {
        self.builder.cancel_hotspot();
    }

    /// Forward a marker click; see [`TourBuilder::click_marker`].
    pub fn click_marker(&mut self, marker_id: &str) -> Option<DbId> {
        self.builder.click_marker(marker_id)
    }

    /// Refetch the tour's scenes from the server.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let scenes = self.client.list_scenes(self.tour_id).await?;
        self.builder.load_scenes(scenes);
        Ok(())
    }

    /// Create a scene from an already-uploaded panorama URL and make it active.
    pub async fn add_scene(&mut self, name: &str, panorama: &str) -> Result<Scene, ClientError> {
        if name.trim().is_empty() || panorama.trim().is_empty() {
            return Err(CoreError::Validation(
                "Both scene name and panorama image are required".into(),
            )
            .into());
        }
        let scene = self
            .client
            .create_scene(
                self.tour_id,
                &CreateScene {
                    tour_id: self.tour_id,
                    name: name.to_string(),
                    panorama: panorama.to_string(),
                    markers: None,
                },
            )
            .await?;
        self.builder.scene_created(scene.clone());
        self.refresh().await?;
        Ok(scene)
    }

    /// Persist the pending hotspot as a marker on the active scene.
    ///
    /// The full marker list (existing markers plus the new one) is sent with
    /// `PUT /api/scenes/{id}`.
    pub async fn confirm_hotspot(
        &mut self,
        target_scene_id: DbId,
        label: Option<String>,
        marker_type: Option<MarkerType>,
    ) -> Result<Scene, ClientError> {
        let placement = self
            .builder
            .confirm_hotspot(target_scene_id, label, marker_type)?;
        let update = UpdateScene {
            markers: Some(placement.markers),
            ..Default::default()
        };
        let scene = self.client.update_scene(placement.scene_id, &update).await?;
        self.builder.replace_scene(scene.clone());
        self.refresh().await?;
        Ok(scene)
    }

    /// Delete a scene; when it was active the first remaining scene is selected.
    pub async fn delete_scene(&mut self, scene_id: DbId) -> Result<(), ClientError> {
        self.client.delete_scene(scene_id).await?;
        self.builder.scene_deleted(scene_id);
        self.refresh().await
    }
}
