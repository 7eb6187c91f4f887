//! Typed client for the Job Aggregator REST API.
//!
//! Scrapers use [`JobsClient::publish_batch`] to push postings and the web
//! view uses [`JobsClient::list_jobs`] to page through active jobs. The wire
//! types and the [`paging`] helpers build without the `client` feature so
//! they can be shared with wasm front ends.
//!
//! # Example
//!
//! ```rust,ignore
//! use jobs_client::{JobsClient, ListJobsQuery};
//!
//! let client = JobsClient::new("http://localhost:5000/api".into())?;
//!
//! let page = client.list_jobs(&ListJobsQuery::page(1, 12).with_search("rust")).await?;
//! for job in &page.jobs {
//!     println!("{} at {}", job.title, job.company);
//! }
//! ```

pub mod paging;
pub mod types;

#[cfg(feature = "client")]
mod client;
#[cfg(feature = "client")]
pub mod error;

#[cfg(feature = "client")]
pub use client::JobsClient;
#[cfg(feature = "client")]
pub use error::{ClientError, Result};
pub use paging::{has_next, has_previous, page_window, shows_controls, PageItem};
pub use types::{BatchOutcome, JobPage, JobPosting, ListJobsQuery, NewJob};
