//! Tour entity model and DTOs.

use serde::{Deserialize, Serialize};
use tourify_core::types::DbId;
use validator::Validate;

/// A tour: a named collection of scenes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for creating a new tour.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTour {
    #[validate(length(min = 1, max = 255), custom(function = "crate::models::not_blank"))]
    pub name: String,
    /// An empty description is stored as `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// DTO for updating an existing tour. All fields are optional.
///
/// `description: null` clears the description; omitting it keeps the
/// stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTour {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255), custom(function = "crate::models::not_blank"))]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::models::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
}

impl Tour {
    /// Apply only the fields present in `update`.
    pub fn merge(&mut self, update: &UpdateTour) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[test]
    fn test_blank_name_fails_validation() {
        let input = CreateTour {
            name: "   ".into(),
            description: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_update_distinguishes_null_from_absent() {
        let absent: UpdateTour = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(absent.description, None);

        let cleared: UpdateTour = serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));
    }

    #[test]
    fn test_merge_keeps_unspecified_fields() {
        let mut tour = Tour {
            id: 1,
            name: "Old".into(),
            description: Some("Keep me".into()),
        };
        tour.merge(&UpdateTour {
            name: Some("New".into()),
            description: None,
        });
        assert_eq!(tour.name, "New");
        assert_eq!(tour.description.as_deref(), Some("Keep me"));
    }
}
