use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::common::{timestamp, ApiError};
use crate::domains::jobs::models::NewJobPosting;

pub const NOT_AN_ARRAY: &str = "Payload must be an array of jobs";

/// One job as sent by a scraper.
///
/// Only `externalId` and the fields the listing cannot render without are
/// required. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    pub external_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    pub source: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub posted_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub scraped_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub remote: Option<bool>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl JobPayload {
    /// Check required strings and apply ingestion defaults.
    pub fn into_new_posting(self, now: DateTime<Utc>) -> Result<NewJobPosting, String> {
        let required = [
            ("externalId", &self.external_id),
            ("title", &self.title),
            ("company", &self.company),
            ("location", &self.location),
            ("url", &self.url),
            ("source", &self.source),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(format!("{field} must not be blank"));
        }

        Ok(NewJobPosting {
            external_id: self.external_id,
            title: self.title,
            company: self.company,
            location: self.location,
            description: self.description.filter(|d| !d.trim().is_empty()),
            url: self.url,
            source: self.source,
            posted_at: self.posted_at,
            scraped_at: self.scraped_at.unwrap_or(now),
            remote: self.remote.unwrap_or(false),
            salary: self.salary.filter(|s| !s.trim().is_empty()),
            tags: self.tags.unwrap_or_default(),
            active: self.active.unwrap_or(true),
        })
    }
}

/// Decode a batch request body.
///
/// The whole batch is rejected if the body is not an array or any element
/// fails to decode; nothing is written in that case.
pub fn parse_batch(body: Value, now: DateTime<Utc>) -> Result<Vec<NewJobPosting>, ApiError> {
    let Value::Array(items) = body else {
        return Err(ApiError::validation(NOT_AN_ARRAY));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<JobPayload>(item)
                .map_err(|e| e.to_string())
                .and_then(|payload| payload.into_new_posting(now))
                .map_err(|reason| {
                    ApiError::validation(format!("Invalid job at index {index}: {reason}"))
                })
        })
        .collect()
}
