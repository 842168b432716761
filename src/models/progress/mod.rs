pub mod entities;
pub mod requests;

pub use entities::VideoProgress;
pub use requests::{MarkWatchedRequest, ProgressListQuery};
