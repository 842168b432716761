pub mod analytics;

pub mod attempts;

pub mod auth;

pub mod categories;

pub mod doubts;

pub mod progress;

pub mod questions;

pub mod render;

pub mod videos;

pub use analytics::configure_analytics_routes;
pub use attempts::configure_attempts_routes;
pub use auth::configure_auth_routes;
pub use categories::configure_categories_routes;
pub use doubts::configure_doubts_routes;
pub use progress::configure_progress_routes;
pub use questions::configure_questions_routes;
pub use render::configure_render_routes;
pub use videos::configure_videos_routes;
