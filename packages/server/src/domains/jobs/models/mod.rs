pub mod job_filter;
pub mod job_posting;

pub use job_filter::*;
pub use job_posting::*;
