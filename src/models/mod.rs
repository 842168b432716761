pub mod analytics;
pub mod attempts;
pub mod auth;
pub mod categories;
pub mod common;
pub mod doubts;
pub mod progress;
pub mod questions;
pub mod render;
pub mod users;
pub mod videos;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;

/// 程序启动时间，用于运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
