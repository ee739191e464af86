//! Entity structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct as stored and returned by the API
//! - A `Deserialize` create DTO
//! - A `Deserialize` update DTO (all `Option` fields) merged over the stored entity
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Deserializer};
use validator::ValidationError;

pub mod scene;
pub mod tour;
pub mod user;

/// Reject strings that are empty after trimming.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Distinguish an absent field (`None`) from an explicit `null` (`Some(None)`).
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
