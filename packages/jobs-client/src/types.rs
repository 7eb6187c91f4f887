use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting as listed by `GET /jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: i64,
    pub external_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    pub source: String,
    /// `None` when the server sent something unparseable; shown as "Recently".
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub scraped_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }))
}

/// One page of results plus the totals needed to render pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPage {
    pub jobs: Vec<JobPosting>,
    pub total: u64,
    pub current_page: u32,
    pub total_pages: u32,
}

/// A scraped posting to publish through `POST /jobs/batch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub external_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub source: String,
    pub posted_at: DateTime<Utc>,
    /// Defaults to the time of ingestion when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scraped_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub remote: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Omitted means active. `Some(false)` hides the posting from listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Response of a batch upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub inserted: u64,
    #[serde(default)]
    pub updated: u64,
}

/// Query string for `GET /jobs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListJobsQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for ListJobsQuery {
    fn default() -> Self {
        Self::page(1, 20)
    }
}

impl ListJobsQuery {
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            tag: None,
            search: None,
        }
    }

    /// Blank terms are dropped rather than sent as `search=`.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.trim().is_empty()).then_some(term);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.tag = (!tag.is_empty()).then_some(tag);
        self
    }
}
