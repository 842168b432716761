pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::Video;
pub use requests::{CreateVideoRequest, UpdateVideoRequest, VideoListQuery};
pub use responses::VideoListResponse;
