//! Typed wrapper over the REST endpoints.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tourify_core::marker::Marker;
use tourify_core::types::DbId;
use tourify_db::models::scene::{CreateScene, Scene, UpdateScene};
use tourify_db::models::tour::{CreateTour, Tour, UpdateTour};

use crate::error::ClientError;

/// Default base URL when `TOURIFY_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Error envelope returned by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Build a client from `TOURIFY_API_URL`, falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        Self::new(std::env::var("TOURIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.base_url)
    }

    // --- Tours ---

    pub async fn list_tours(&self) -> Result<Vec<Tour>, ClientError> {
        json_body(self.http.get(self.url("/tours")).send().await?).await
    }

    pub async fn get_tour(&self, id: DbId) -> Result<Tour, ClientError> {
        json_body(self.http.get(self.url(&format!("/tours/{id}"))).send().await?).await
    }

    pub async fn create_tour(&self, input: &CreateTour) -> Result<Tour, ClientError> {
        let response = self.http.post(self.url("/tours")).json(input).send().await?;
        json_body(response).await
    }

    pub async fn update_tour(&self, id: DbId, input: &UpdateTour) -> Result<Tour, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/tours/{id}")))
            .json(input)
            .send()
            .await?;
        json_body(response).await
    }

    pub async fn delete_tour(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/tours/{id}")))
            .send()
            .await?;
        no_content(response).await
    }

    // --- Scenes ---

    pub async fn list_scenes(&self, tour_id: DbId) -> Result<Vec<Scene>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/tours/{tour_id}/scenes")))
            .send()
            .await?;
        json_body(response).await
    }

    pub async fn get_scene(&self, id: DbId) -> Result<Scene, ClientError> {
        json_body(self.http.get(self.url(&format!("/scenes/{id}"))).send().await?).await
    }

    pub async fn create_scene(
        &self,
        tour_id: DbId,
        input: &CreateScene,
    ) -> Result<Scene, ClientError> {
        let response = self
            .http
            .post(self.url(&format!("/tours/{tour_id}/scenes")))
            .json(input)
            .send()
            .await?;
        json_body(response).await
    }

    pub async fn update_scene(&self, id: DbId, input: &UpdateScene) -> Result<Scene, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/scenes/{id}")))
            .json(input)
            .send()
            .await?;
        json_body(response).await
    }

    pub async fn delete_scene(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/scenes/{id}")))
            .send()
            .await?;
        no_content(response).await
    }

    // --- Markers ---

    pub async fn append_marker(
        &self,
        scene_id: DbId,
        marker: &Marker,
    ) -> Result<Scene, ClientError> {
        let response = self
            .http
            .post(self.url(&format!("/scenes/{scene_id}/markers")))
            .json(marker)
            .send()
            .await?;
        json_body(response).await
    }

    pub async fn remove_marker(&self, scene_id: DbId, marker_id: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/scenes/{scene_id}/markers/{marker_id}")))
            .send()
            .await?;
        no_content(response).await
    }
}

async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = check_status(response).await?;
    Ok(response.json().await?)
}

async fn no_content(response: Response) -> Result<(), ClientError> {
    check_status(response).await.map(|_| ())
}

/// Turn a non-success response into [`ClientError::Api`], keeping the
/// server's error message when it sent one.
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => fallback_message(status),
    };
    tracing::debug!(%status, %message, "API request failed");
    Err(ClientError::Api { status, message })
}

fn fallback_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unexpected response")
        .to_string()
}
