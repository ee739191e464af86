//! Extractors that reject malformed input with [`AppError`] instead of
//! axum's plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use tourify_core::error::CoreError;
use tourify_core::marker::{self, Marker};
use tourify_db::models::scene::{CreateScene, UpdateScene};
use tourify_db::models::tour::{CreateTour, UpdateTour};
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// A request body that knows how to check itself.
pub trait RequestBody: DeserializeOwned {
    /// Entity name used in the generic rejection message.
    const KIND: &'static str;

    fn check(&self) -> Result<(), CoreError>;
}

/// Like [`Json`], but a body that fails to parse is rejected with a generic
/// `400 Invalid <kind> data`, and a parsed body must pass
/// [`RequestBody::check`].
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateTour>) -> AppResult<Json<Tour>> { .. }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: RequestBody + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(
                    kind = T::KIND,
                    error = %rejection.body_text(),
                    "Rejected request body"
                );
                AppError::BadRequest(format!("Invalid {} data", T::KIND))
            })?;
        value.check()?;
        Ok(Self(value))
    }
}

/// Like [`Path`], but a segment that does not parse (`/api/tours/abc`, an id
/// past `i64::MAX`) is answered with the JSON `404` envelope: no entity can
/// live at such an address.
#[derive(Debug)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(
                    path = %parts.uri.path(),
                    error = %rejection.body_text(),
                    "Rejected path"
                );
                AppError::NotFound("Resource not found".into())
            })?;
        Ok(Self(value))
    }
}

fn validation_error(kind: &str, errors: ValidationErrors) -> CoreError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    CoreError::Validation(format!("Invalid {kind} data: {}", fields.join(", ")))
}

impl RequestBody for CreateTour {
    const KIND: &'static str = "tour";

    fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(|e| validation_error(Self::KIND, e))
    }
}

impl RequestBody for UpdateTour {
    const KIND: &'static str = "tour";

    fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(|e| validation_error(Self::KIND, e))
    }
}

impl RequestBody for CreateScene {
    const KIND: &'static str = "scene";

    fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(|e| validation_error(Self::KIND, e))?;
        if let Some(markers) = &self.markers {
            marker::validate_markers(markers)?;
        }
        Ok(())
    }
}

impl RequestBody for UpdateScene {
    const KIND: &'static str = "scene";

    fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(|e| validation_error(Self::KIND, e))?;
        if let Some(markers) = &self.markers {
            marker::validate_markers(markers)?;
        }
        Ok(())
    }
}

impl RequestBody for Marker {
    const KIND: &'static str = "marker";

    fn check(&self) -> Result<(), CoreError> {
        marker::validate_marker(self)
    }
}
