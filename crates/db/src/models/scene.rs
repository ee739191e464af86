//! Scene entity model and DTOs.

use serde::{Deserialize, Serialize};
use tourify_core::marker::Marker;
use tourify_core::tour_builder::BuilderScene;
use tourify_core::types::DbId;
use validator::Validate;

/// One panorama plus its hotspots. `tour_id` is not checked against the
/// tours map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: DbId,
    pub tour_id: DbId,
    pub name: String,
    /// Public URL of the equirectangular panorama image.
    pub panorama: String,
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl BuilderScene for Scene {
    fn id(&self) -> DbId {
        self.id
    }

    fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

/// DTO for creating a new scene.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateScene {
    /// Overridden by the tour id in the request path.
    #[serde(default)]
    pub tour_id: DbId,
    #[validate(length(min = 1, max = 255), custom(function = "crate::models::not_blank"))]
    pub name: String,
    #[validate(custom(function = "crate::models::not_blank"))]
    pub panorama: String,
    /// Defaults to an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markers: Option<Vec<Marker>>,
}

/// DTO for updating an existing scene. All fields are optional; absent
/// fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScene {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255), custom(function = "crate::models::not_blank"))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::models::not_blank"))]
    pub panorama: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markers: Option<Vec<Marker>>,
}

impl Scene {
    /// Apply only the fields present in `update`.
    pub fn merge(&mut self, update: &UpdateScene) {
        if let Some(tour_id) = update.tour_id {
            self.tour_id = tour_id;
        }
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(panorama) = &update.panorama {
            self.panorama = panorama.clone();
        }
        if let Some(markers) = &update.markers {
            self.markers = markers.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use tourify_core::marker::MarkerType;
    use validator::Validate;

    use super::*;

    #[test]
    fn test_create_markers_default_to_none() {
        let input: CreateScene =
            serde_json::from_str(r#"{"name":"Hall","panorama":"https://x/p.jpg"}"#).unwrap();
        assert_eq!(input.markers, None);
        assert_eq!(input.tour_id, 0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_empty_panorama_fails_validation() {
        let input = CreateScene {
            name: "Hall".into(),
            panorama: "".into(),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_merge_replaces_only_given_fields() {
        let mut scene = Scene {
            id: 1,
            tour_id: 1,
            name: "Hall".into(),
            panorama: "a.jpg".into(),
            markers: vec![Marker::new("m", 0.0, 0.0, 2, None, MarkerType::Arrow)],
        };
        scene.merge(&UpdateScene {
            name: Some("Lobby".into()),
            ..Default::default()
        });
        assert_eq!(scene.name, "Lobby");
        assert_eq!(scene.panorama, "a.jpg");
        assert_eq!(scene.markers.len(), 1);
    }

    #[test]
    fn test_serializes_camel_case() {
        let scene = Scene {
            id: 3,
            tour_id: 9,
            name: "Hall".into(),
            panorama: "a.jpg".into(),
            markers: Vec::new(),
        };
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["tourId"], 9);
        assert_eq!(json["markers"], serde_json::json!([]));
    }
}
