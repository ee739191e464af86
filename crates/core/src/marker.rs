//! Panorama hotspots ("markers") and their validation.
//!
//! A marker sits at an angular position on the panorama sphere and links to
//! another scene. The wire shape matches what the panorama viewer's markers
//! plugin consumes:
//!
//! ```json
//! { "id": "marker_1700000000000", "yaw": 1.2, "pitch": -0.1,
//!   "config": { "data": { "targetSceneId": 3, "label": "Kitchen", "type": "arrow" } } }
//! ```

use std::collections::HashSet;
use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Prefix of generated marker ids.
pub const MARKER_ID_PREFIX: &str = "marker_";

/// Visual/behavioural kind of a hotspot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerType {
    /// Navigation arrow to another scene.
    #[default]
    Arrow,
    /// Information point.
    Info,
    /// Aerial ("drone") viewpoint link.
    Drone,
}

impl MarkerType {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerType::Arrow => "arrow",
            MarkerType::Info => "info",
            MarkerType::Drone => "drone",
        }
    }
}

/// Payload carried by a marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerData {
    /// Scene this hotspot navigates to. Not checked for existence.
    pub target_scene_id: DbId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, rename = "type")]
    pub marker_type: MarkerType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerConfig {
    pub data: MarkerData,
}

/// A hotspot embedded in a scene's marker list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    /// Horizontal angle in radians.
    pub yaw: f64,
    /// Vertical angle in radians, `-π/2..=π/2`.
    pub pitch: f64,
    pub config: MarkerConfig,
}

impl Marker {
    pub fn new(
        id: impl Into<String>,
        yaw: f64,
        pitch: f64,
        target_scene_id: DbId,
        label: Option<String>,
        marker_type: MarkerType,
    ) -> Self {
        Self {
            id: id.into(),
            yaw,
            pitch,
            config: MarkerConfig {
                data: MarkerData {
                    target_scene_id,
                    label,
                    marker_type,
                },
            },
        }
    }

    pub fn target_scene_id(&self) -> DbId {
        self.config.data.target_scene_id
    }

    pub fn marker_type(&self) -> MarkerType {
        self.config.data.marker_type
    }
}

/// Build a marker id from a unix timestamp in milliseconds.
pub fn marker_id_at(unix_millis: i64) -> String {
    format!("{MARKER_ID_PREFIX}{unix_millis}")
}

/// Build a marker id from the current wall clock.
pub fn generate_marker_id() -> String {
    marker_id_at(chrono::Utc::now().timestamp_millis())
}

/// Validate a single marker's id and angular position.
pub fn validate_marker(marker: &Marker) -> Result<(), CoreError> {
    if marker.id.trim().is_empty() {
        return Err(CoreError::Validation("Marker id must not be empty".into()));
    }
    if !marker.yaw.is_finite() {
        return Err(CoreError::Validation(format!(
            "Marker '{}' has a non-finite yaw",
            marker.id
        )));
    }
    if !marker.pitch.is_finite() || marker.pitch.abs() > FRAC_PI_2 {
        return Err(CoreError::Validation(format!(
            "Marker '{}' pitch must be between -π/2 and π/2 radians",
            marker.id
        )));
    }
    Ok(())
}

/// Validate every marker of a scene, including id uniqueness within the list.
pub fn validate_markers(markers: &[Marker]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(markers.len());
    for marker in markers {
        validate_marker(marker)?;
        if !seen.insert(marker.id.as_str()) {
            return Err(CoreError::Validation(format!(
                "Duplicate marker id '{}'",
                marker.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn marker(id: &str, yaw: f64, pitch: f64) -> Marker {
        Marker::new(id, yaw, pitch, 2, None, MarkerType::Arrow)
    }

    #[test]
    fn test_type_defaults_to_arrow_when_absent() {
        let json = serde_json::json!({
            "id": "m1",
            "yaw": 0.5,
            "pitch": 0.1,
            "config": { "data": { "targetSceneId": 7 } }
        });
        let parsed: Marker = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.marker_type(), MarkerType::Arrow);
        assert_eq!(parsed.target_scene_id(), 7);
        assert_eq!(parsed.config.data.label, None);
    }

    #[test]
    fn test_serializes_with_viewer_field_names() {
        let m = Marker::new("m1", 1.0, 0.0, 4, Some("Hall".into()), MarkerType::Drone);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["config"]["data"]["targetSceneId"], 4);
        assert_eq!(json["config"]["data"]["type"], "drone");
        assert_eq!(json["config"]["data"]["label"], "Hall");
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let json = serde_json::json!({
            "id": "m1",
            "yaw": 0.0,
            "pitch": 0.0,
            "config": { "data": { "targetSceneId": 1, "type": "portal" } }
        });
        assert!(serde_json::from_value::<Marker>(json).is_err());
    }

    #[test]
    fn test_marker_id_format() {
        assert_eq!(marker_id_at(1_700_000_000_123), "marker_1700000000123");
        assert!(generate_marker_id().starts_with(MARKER_ID_PREFIX));
    }

    #[test]
    fn test_valid_marker_passes() {
        assert!(validate_marker(&marker("m1", -3.0, FRAC_PI_2)).is_ok());
    }

    #[test]
    fn test_blank_id_rejected() {
        assert_matches!(
            validate_marker(&marker("  ", 0.0, 0.0)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn test_non_finite_angles_rejected() {
        assert!(validate_marker(&marker("m1", f64::NAN, 0.0)).is_err());
        assert!(validate_marker(&marker("m1", 0.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_pitch_out_of_range_rejected() {
        let result = validate_marker(&marker("m1", 0.0, 2.0));
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("pitch"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let list = vec![marker("a", 0.0, 0.0), marker("a", 1.0, 0.0)];
        let msg = validate_markers(&list).unwrap_err().to_string();
        assert!(msg.contains("Duplicate marker id 'a'"));
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate_markers(&[]).is_ok());
    }
}
