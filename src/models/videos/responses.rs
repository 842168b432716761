use serde::Serialize;
use ts_rs::TS;

use crate::models::videos::entities::Video;

// 视频列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct VideoListResponse {
    pub videos: Vec<Video>,
    pub total: u64,
}
