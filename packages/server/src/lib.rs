// Job Aggregator - API Core
//
// Stores job postings pushed in batches by external scrapers and serves
// them back as a paginated, filterable listing.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
