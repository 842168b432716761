use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 视频课程实体
//
// youtube_id 由提交的 URL 解析得到，title/thumbnail 未提供时
// 通过 oEmbed 自动补全。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub youtube_url: String,
    pub youtube_id: String,
    pub thumbnail: String,
    pub class_level: String,
    pub subject: String,
    pub chapter: Option<String>,
    pub topic: Option<String>,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
