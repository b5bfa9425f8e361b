use crate::{RequestDescription, Tutorial, TutorialId, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the tutorials backend.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn send(&self, description: &RequestDescription) -> ReqwestResult {
        let mut request = self.inner_client.request(
            description.method.into(),
            self.format_url(&description.path),
        );
        if !description.params.is_empty() {
            request = request.query(&description.params);
        }
        request.send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .put(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }

    async fn empty_delete(&self, path: &str) -> ReqwestResult {
        self.inner_client.delete(self.format_url(path)).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    /// Issue an arbitrary described request and decode the JSON body.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        description: &RequestDescription,
    ) -> Result<T, ClientError> {
        let response = self.send(description).await?;
        ok_body(response).await
    }

    /// List tutorials, optionally filtered by a title substring.
    pub async fn list_tutorials(
        &self,
        filter: &requests::TutorialFilter,
    ) -> Result<Vec<Tutorial>, ClientError> {
        self.execute(&filter.request()).await
    }

    pub async fn list_published_tutorials(
        &self,
    ) -> Result<Vec<Tutorial>, ClientError> {
        let response = self.empty_get("tutorials/published").await?;
        ok_body(response).await
    }

    pub async fn get_tutorial(
        &self,
        tutorial_id: &TutorialId,
    ) -> Result<Tutorial, ClientError> {
        let response =
            self.empty_get(&format!("tutorials/{tutorial_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_tutorial(
        &self,
        details: &requests::CreateTutorial,
    ) -> Result<Tutorial, ClientError> {
        let response = self.post("tutorials", details).await?;
        ok_body(response).await
    }

    pub async fn update_tutorial(
        &self,
        tutorial_id: &TutorialId,
        details: &requests::UpdateTutorial,
    ) -> Result<Tutorial, ClientError> {
        let response =
            self.put(&format!("tutorials/{tutorial_id}"), details).await?;
        ok_body(response).await
    }

    pub async fn delete_tutorial(
        &self,
        tutorial_id: &TutorialId,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response =
            self.empty_delete(&format!("tutorials/{tutorial_id}")).await?;
        ok_body(response).await
    }

    /// Delete every tutorial on the server.
    pub async fn delete_all_tutorials(
        &self,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self.empty_delete("tutorials").await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
