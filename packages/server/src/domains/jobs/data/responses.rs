use serde::{Deserialize, Serialize};

use crate::common::{ApiError, PageMeta, PageRequest};
use crate::domains::jobs::models::{JobFilter, JobPosting, UpsertCounts};

/// Result of `POST /api/jobs/batch`.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResponse {
    pub message: &'static str,
    pub inserted: usize,
    pub updated: usize,
}

impl BatchResponse {
    pub fn empty() -> Self {
        BatchResponse {
            message: "No jobs to process",
            inserted: 0,
            updated: 0,
        }
    }

    pub fn processed(counts: UpsertCounts) -> Self {
        BatchResponse {
            message: "Batch processed",
            inserted: counts.inserted,
            updated: counts.updated,
        }
    }
}

/// Raw query string of `GET /api/jobs`. Everything arrives as text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListJobsParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl ListJobsParams {
    pub fn into_query(self) -> Result<(JobFilter, PageRequest), ApiError> {
        let page = PageRequest::parse(self.page.as_deref(), self.limit.as_deref())?;
        let filter = JobFilter::visible()
            .with_tag(self.tag.as_deref())
            .with_search(self.search.as_deref());
        Ok((filter, page))
    }
}

/// Result of `GET /api/jobs`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPageResponse {
    pub jobs: Vec<JobPosting>,
    pub total: i64,
    pub current_page: u32,
    pub total_pages: i64,
}

impl JobPageResponse {
    pub fn new(jobs: Vec<JobPosting>, meta: PageMeta) -> Self {
        JobPageResponse {
            jobs,
            total: meta.total,
            current_page: meta.current_page,
            total_pages: meta.total_pages,
        }
    }
}
