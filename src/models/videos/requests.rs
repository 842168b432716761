use serde::Deserialize;
use ts_rs::TS;

// 创建视频请求
//
// title 为空时取 oEmbed 标题，thumbnail 为空时取 YouTube 默认缩略图。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct CreateVideoRequest {
    pub youtube_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub class_level: String,
    pub subject: String,
    pub chapter: Option<String>,
    pub topic: Option<String>,
}

// 更新视频请求，仅提供的字段会被更新
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct UpdateVideoRequest {
    pub youtube_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub class_level: Option<String>,
    pub subject: Option<String>,
    pub chapter: Option<String>,
    pub topic: Option<String>,
}

// 视频列表筛选条件，全部为精确匹配
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct VideoListQuery {
    pub class_level: Option<String>,
    pub subject: Option<String>,
    pub chapter: Option<String>,
    pub topic: Option<String>,
    pub limit: Option<u64>,
}
