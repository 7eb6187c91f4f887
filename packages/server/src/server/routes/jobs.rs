use axum::{
    extract::{rejection::JsonRejection, Extension, Query},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::Value;

use crate::common::{ApiError, ApiResult};
use crate::domains::jobs::{
    parse_batch, BatchResponse, JobPageResponse, JobPosting, ListJobsParams, NOT_AN_ARRAY,
};
use crate::server::app::AppState;

/// `POST /api/jobs/batch`: upsert a batch of scraped jobs by `externalId`.
pub async fn create_jobs_batch(
    Extension(state): Extension<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<BatchResponse>> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected batch body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::validation(NOT_AN_ARRAY)
        }
    })?;

    let postings = parse_batch(body, Utc::now())?;
    if postings.is_empty() {
        return Ok(Json(BatchResponse::empty()));
    }

    state.ensure_schema().await?;

    let received = postings.len();
    let counts = JobPosting::upsert_batch(postings, &state.db_pool).await?;
    tracing::info!(
        received,
        inserted = counts.inserted,
        updated = counts.updated,
        "Processed job batch"
    );

    Ok(Json(BatchResponse::processed(counts)))
}

/// `GET /api/jobs`: one page of active jobs plus pagination totals.
pub async fn list_jobs(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListJobsParams>,
) -> ApiResult<Json<JobPageResponse>> {
    let (filter, page) = params.into_query()?;
    state.ensure_schema().await?;

    let jobs = JobPosting::find_page(&filter, &page, &state.db_pool).await?;
    let total = JobPosting::count(&filter, &state.db_pool).await?;

    Ok(Json(JobPageResponse::new(jobs, page.meta(total))))
}
