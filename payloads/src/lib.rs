pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use derive_more::{Display, FromStr};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Id type wrapper helps ensure we don't mix up tutorial ids with indexes
/// into a rendered list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    FromStr,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct TutorialId(pub i64);

/// A tutorial record as served by the tutorials API.
///
/// Timestamps are optional on the wire so that records produced by older
/// backends (or hand-written fixtures) still decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    pub id: TutorialId,
    pub title: String,
    pub description: String,
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Tutorial {
    /// Human readable publication status.
    pub fn status_label(&self) -> &'static str {
        if self.published { "Published" } else { "Pending" }
    }

    /// Path of the page for viewing and editing this tutorial.
    pub fn edit_path(&self) -> String {
        format!("/tutorials/{}", self.id)
    }
}

/// HTTP verbs understood by [`APIClient::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Method {
    #[display("GET")]
    Get,
    #[display("POST")]
    Post,
    #[display("PUT")]
    Put,
    #[display("DELETE")]
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Everything needed to issue a request against the API, minus the server
/// address. Paths are relative to the `/api/` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{method} {path}")]
pub struct RequestDescription {
    pub method: Method,
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl RequestDescription {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Append a query parameter.
    pub fn with_param(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }
}
