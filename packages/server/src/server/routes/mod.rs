// HTTP routes
pub mod health;
pub mod index;
pub mod jobs;

pub use health::*;
pub use index::*;
pub use jobs::*;
