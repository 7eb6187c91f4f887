//! Test fixtures for building job payloads and seeding the store.

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{json, Value};
use server_core::domains::jobs::{JobPosting, NewJobPosting, UpsertCounts};
use sqlx::PgPool;

/// The smallest payload the batch endpoint accepts.
pub fn minimal_job(external_id: &str) -> Value {
    json!({
        "externalId": external_id,
        "title": "A",
        "company": "C",
        "location": "L",
        "url": "u",
        "source": "s",
        "postedAt": "2024-01-01"
    })
}

/// A complete payload with a distinct title and company.
pub fn job(external_id: &str, title: &str, company: &str) -> Value {
    json!({
        "externalId": external_id,
        "title": title,
        "company": company,
        "location": "Bengaluru",
        "description": "Build things",
        "url": format!("https://jobs.example.com/{external_id}"),
        "source": "YCombinator",
        "postedAt": "2024-01-01T00:00:00Z",
        "remote": false,
        "tags": []
    })
}

/// Midnight UTC `days` days after 2024-01-01.
pub fn day(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(days)
}

/// Builder for postings written directly through the model.
pub struct PostingFixture {
    posting: NewJobPosting,
}

impl PostingFixture {
    pub fn new(external_id: &str) -> Self {
        Self {
            posting: NewJobPosting {
                external_id: external_id.to_string(),
                title: format!("Engineer {external_id}"),
                company: "Initech".to_string(),
                location: "Remote".to_string(),
                description: None,
                url: format!("https://jobs.example.com/{external_id}"),
                source: "fixture".to_string(),
                posted_at: day(0),
                scraped_at: day(1),
                remote: true,
                salary: None,
                tags: vec![],
                active: true,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.posting.title = title.to_string();
        self
    }

    pub fn company(mut self, company: &str) -> Self {
        self.posting.company = company.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.posting.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn posted(mut self, posted_at: DateTime<Utc>) -> Self {
        self.posting.posted_at = posted_at;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.posting.active = false;
        self
    }

    pub fn build(self) -> NewJobPosting {
        self.posting
    }
}

/// Write postings through the same upsert the endpoint uses.
pub async fn seed(pool: &PgPool, postings: Vec<PostingFixture>) -> Result<UpsertCounts> {
    JobPosting::upsert_batch(postings.into_iter().map(PostingFixture::build).collect(), pool).await
}
