//! Server functions backing the job board.

use dioxus::prelude::*;
use jobs_client::JobPage;

/// Jobs shown per page on the board.
pub const JOBS_PER_PAGE: u32 = 12;

/// Fetch one page of active jobs, optionally filtered by a search term.
#[server]
pub async fn fetch_jobs(page: u32, search: String) -> Result<JobPage, ServerFnError> {
    let client =
        jobs_client::JobsClient::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;

    let query = jobs_client::ListJobsQuery::page(page, JOBS_PER_PAGE).with_search(search);
    client.list_jobs(&query).await.map_err(|e| {
        tracing::error!(error = %e, page, "Jobs API request failed");
        ServerFnError::new(e.to_string())
    })
}
