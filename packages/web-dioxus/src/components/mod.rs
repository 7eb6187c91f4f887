//! Reusable UI components

mod job_card;
mod loading;
mod pagination;

pub use job_card::*;
pub use loading::*;
pub use pagination::*;
