pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::{Difficulty, Question};
pub use requests::{CreateQuestionRequest, QuestionListQuery, UpdateQuestionRequest};
pub use responses::QuestionListResponse;
