pub mod job_payload;
pub mod responses;

pub use job_payload::*;
pub use responses::*;
