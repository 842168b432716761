pub mod extractor;
pub mod jwt;
pub mod latex;
pub mod parameter_error_handler;
pub mod password;
pub mod validate;
pub mod youtube;

pub use extractor::{SafeDoubtIdI64, SafeQuestionIdI64, SafeVideoIdI64};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
