//! Job postings: ingestion payloads, the stored record and its queries.

pub mod data;
pub mod models;

pub use data::*;
pub use models::*;
