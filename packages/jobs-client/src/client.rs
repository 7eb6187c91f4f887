use std::time::Duration;

use serde::Serialize;

use crate::error::{ClientError, Result};
use crate::types::{BatchOutcome, JobPage, ListJobsQuery, NewJob};

/// Used by [`JobsClient::from_env`] when `JOBS_API_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct JobsClient {
    client: reqwest::Client,
    base_url: String,
}

impl JobsClient {
    /// `base_url` points at the API root, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads `JOBS_API_URL`, falling back to the local development server.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("JOBS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of active jobs.
    pub async fn list_jobs(&self, query: &ListJobsQuery) -> Result<JobPage> {
        let url = format!("{}/jobs", self.base_url);
        let resp = self.client.get(&url).query(query).send().await?;
        let resp = ensure_success(resp).await?;

        let page: JobPage = decode(resp).await?;
        tracing::debug!(
            page = page.current_page,
            total = page.total,
            returned = page.jobs.len(),
            "Fetched jobs page"
        );
        Ok(page)
    }

    /// Upsert a batch of postings keyed by `externalId`.
    pub async fn publish_batch(&self, jobs: &[NewJob]) -> Result<BatchOutcome> {
        self.post_json("jobs/batch", jobs).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        let resp = self.client.post(&url).json(body).send().await?;
        let resp = ensure_success(resp).await?;
        decode(resp).await
    }
}

/// 200 and 201 both count as success; the error body's `message` is surfaced
/// when the server sent one.
async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or(body);
    tracing::warn!(status = status.as_u16(), message = %message, "Jobs API request failed");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Network failures while reading stay `Network`; a body that is not the
/// expected JSON is `Serialization`.
async fn decode<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn error_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
}
