pub mod entities;
pub mod requests;

pub use entities::{Doubt, DoubtStatus};
pub use requests::{DoubtListQuery, RespondDoubtRequest, SubmitDoubtRequest};
