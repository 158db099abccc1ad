//! HTTP client for the notes backend.
//!
//! All four operations hit the same `/note` route and differ only by method
//! and body. No retries or timeouts are applied; callers decide what to do
//! with a failure (the drop flow logs it and moves on).

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::config::{normalize_base_url, ClientConfig};
use crate::error::{Error, Result};
use crate::models::{Note, NoteId, StoredNote};

const NOTES_ROUTE: &str = "/note";

/// Operations the drop flow needs from the backend.
///
/// [`NotesApiClient`] is the real implementation; tests plug in fakes.
#[allow(async_fn_in_trait)]
pub trait NotesBackend {
    /// Fetch every stored note
    async fn list(&self) -> Result<Vec<StoredNote>>;
    /// Persist a new note; returns the backend's `success` flag
    async fn create(&self, note: &Note) -> Result<bool>;
    /// Overwrite an existing note; returns the backend's `success` flag
    async fn update(&self, note: &StoredNote) -> Result<bool>;
    /// Delete a note by id; returns the backend's `success` flag
    async fn remove(&self, id: &NoteId) -> Result<bool>;
}

/// `GET /note` response body
#[derive(Debug, Clone, Deserialize)]
struct ListResponse {
    #[serde(default)]
    data: Option<Vec<StoredNote>>,
}

/// `POST`/`PUT`/`DELETE /note` response body
#[derive(Debug, Clone, Default, Deserialize)]
struct MutationResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct DeleteRequest<'a> {
    id: &'a NoteId,
}

/// reqwest-backed notes client.
#[derive(Debug, Clone)]
pub struct NotesApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl NotesApiClient {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into().as_str())
            .map_err(|error| Error::InvalidInput(error.to_string()))?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { base_url, client })
    }

    /// Builds a client from resolved client configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(config.api_base_url.clone())
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}{NOTES_ROUTE}", self.base_url)
    }

    async fn send_mutation<B: Serialize + ?Sized>(
        &self,
        method: Method,
        body: &B,
    ) -> Result<MutationResponse> {
        let response = self
            .client
            .request(method, self.notes_url())
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl NotesBackend for NotesApiClient {
    async fn list(&self) -> Result<Vec<StoredNote>> {
        tracing::debug!("GET {}", self.notes_url());
        let response = self
            .client
            .get(self.notes_url())
            .header("Accept", "application/json")
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let bytes = response.bytes().await?;
        let payload: ListResponse = serde_json::from_slice(&bytes)?;
        let notes = payload.data.ok_or(Error::MissingData)?;
        tracing::debug!("Received {} notes", notes.len());
        Ok(notes)
    }

    async fn create(&self, note: &Note) -> Result<bool> {
        tracing::debug!("POST {} title={:?}", self.notes_url(), note.title);
        let payload = self.send_mutation(Method::POST, note).await?;
        Ok(payload.success)
    }

    async fn update(&self, note: &StoredNote) -> Result<bool> {
        tracing::debug!("PUT {} id={}", self.notes_url(), note.id);
        let payload = self.send_mutation(Method::PUT, note).await?;
        Ok(payload.success)
    }

    async fn remove(&self, id: &NoteId) -> Result<bool> {
        tracing::debug!("DELETE {} id={}", self.notes_url(), id);
        let payload = self
            .send_mutation(Method::DELETE, &DeleteRequest { id })
            .await?;
        if let Some(message) = payload.message.as_deref() {
            tracing::debug!("Delete response: {}", message);
        }
        Ok(payload.success)
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Status {
        status,
        body: compact_text(&body),
    })
}

/// Truncate response text to at most 180 characters for error messages.
fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}
