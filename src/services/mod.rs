pub mod analytics;
pub mod attempts;
pub mod auth;
pub mod categories;
pub mod doubts;
pub mod progress;
pub mod questions;
pub mod render;
pub mod taxonomy;
pub mod videos;

pub use analytics::AnalyticsService;
pub use attempts::AttemptService;
pub use auth::AuthService;
pub use categories::CategoryService;
pub use doubts::DoubtService;
pub use progress::ProgressService;
pub use questions::QuestionService;
pub use render::RenderService;
pub use videos::VideoService;
