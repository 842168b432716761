use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 视频观看进度
//
// 每个 (user_id, video_id) 至多一行，重复标记只刷新 last_watched_at。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct VideoProgress {
    pub id: i64,
    pub user_id: i64,
    pub video_id: i64,
    pub watched_duration: i32, // 秒，预留字段
    pub completed: bool,
    pub last_watched_at: chrono::DateTime<chrono::Utc>,
}
