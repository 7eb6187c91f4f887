// Common types and utilities shared across the application

pub mod error;
pub mod pagination;
pub mod timestamp;

pub use error::{ApiError, ApiResult};
pub use pagination::{PageMeta, PageRequest};
