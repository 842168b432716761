pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::QuestionAttempt;
pub use requests::{AttemptListQuery, SubmitAttemptRequest};
pub use responses::SubmitAttemptResponse;
